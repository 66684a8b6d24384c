use moon::*;
use shared::ShellConfig;

// ===== CENTRALIZED DEBUG FLAGS =====
const DEBUG_BACKEND: bool = false;

macro_rules! debug_log {
    ($flag:expr, $($arg:tt)*) => {
        if $flag {
            println!($($arg)*);
        }
    };
}

static SHELL_CONFIG: Lazy<ShellConfig> = Lazy::new(load_shell_config);

/// The frontend embeds the same file, so both sides agree on the title.
fn load_shell_config() -> ShellConfig {
    match ShellConfig::from_toml_str(include_str!("../../shell.toml")) {
        Ok(config) => {
            debug_log!(DEBUG_BACKEND, "shell.toml loaded: {:?}", config.app);
            config
        }
        Err(error) => {
            eprintln!("shell.toml is invalid, serving with defaults: {error}");
            ShellConfig::default()
        }
    }
}

async fn frontend() -> Frontend {
    Frontend::new()
        .title(SHELL_CONFIG.app.title.as_str())
        .index_by_robots(false)
        .append_to_head(
            r#"<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Roboto:wght@400;500&display=swap">"#,
        )
}

// The shell has no application messages; the handler only satisfies the host API.
async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    debug_log!(DEBUG_BACKEND, "serving '{}'", SHELL_CONFIG.app.title);
    start(frontend, up_msg_handler, |_| {}).await
}
