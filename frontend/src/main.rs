//! Etxe shell entry point

use etxe_ui::{FONT_FAMILY_SHELL, MIST_200};
use std::sync::OnceLock;
use zoon::*;

/// Keeps the startup task alive for the lifetime of the page.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

mod action_handler;
mod animation;
mod app;
mod config;
mod dataflow;
mod drawer;
mod layout;
mod navigation;

pub fn main() {
    global_styles().style_group(
        StyleGroup::new("body")
            .style("margin", "0")
            .style("font-family", &format!("{FONT_FAMILY_SHELL}, system-ui, sans-serif"))
            .style("color", MIST_200),
    );

    let handle = Task::start_droppable(async {
        let app = crate::app::ShellApp::new().await;
        let root_element = app.root();
        start_app("app", move || root_element);
    });
    let _ = MAIN_TASK.set(handle);
}
