use shared::ShellConfig;

/// `shell.toml` at the workspace root, embedded at build time.
const SHELL_TOML: &str = include_str!("../../shell.toml");

/// Parse the embedded configuration; any error falls back to the defaults.
pub fn load_shell_config() -> ShellConfig {
    load_from_str(SHELL_TOML)
}

fn load_from_str(source: &str) -> ShellConfig {
    match ShellConfig::from_toml_str(source) {
        Ok(config) => {
            zoon::println!(
                "⚙️ CONFIG: drawer {}px, {} navigation entries",
                config.drawer.width,
                config.navigation.len()
            );
            config
        }
        Err(error) => {
            zoon::eprintln!("⚙️ CONFIG: invalid shell.toml ({}), using defaults", error);
            ShellConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = ShellConfig::from_toml_str(SHELL_TOML).unwrap();
        assert_eq!(config.chrome.initial_selection, "User");
        assert_eq!(config.navigation.len(), 7);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = load_from_str("[drawer]\nwidth = -5.0\n");
        assert_eq!(config, ShellConfig::default());

        let config = load_from_str("not = [toml");
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = load_from_str("[drawer]\nwidth = 320.0\ninitially_open = false\n");
        assert_eq!(config.drawer.width, 320.0);
        assert!(!config.drawer.initially_open);
        assert_eq!(config.spring, ShellConfig::default().spring);
    }
}
