//! ShellApp - owns the drawer and navigation domains

use crate::config::load_shell_config;
use crate::drawer::DrawerController;
use crate::navigation::NavigationSelection;
use shared::ShellConfig;
use std::sync::Arc;
use zoon::*;

pub struct ShellApp {
    pub config: Arc<ShellConfig>,

    /// Gesture state machine and the springs that follow it
    pub drawer: DrawerController,

    /// Label shown in the header
    pub navigation: NavigationSelection,
}

impl ShellApp {
    pub async fn new() -> Self {
        let config = Arc::new(load_shell_config());
        let drawer = DrawerController::new(&config);
        let navigation = NavigationSelection::new(config.navigation.clone(), &config.chrome);

        zoon::println!(
            "🚀 {} {} mounted, drawer {}",
            config.app.title,
            config.app.version,
            if config.drawer.initially_open { "open" } else { "closed" }
        );

        Self {
            config,
            drawer,
            navigation,
        }
    }

    pub fn root(&self) -> impl Element + use<> {
        crate::layout::main_layout(self)
    }
}
