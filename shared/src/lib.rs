use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

// ===== CONFIG TYPES =====

/// Complete shell configuration, normally read from `shell.toml`.
///
/// Every section has defaults, so a partial file (or an empty one) is valid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShellConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub drawer: DrawerSection,
    #[serde(default)]
    pub spring: SpringSection,
    #[serde(default)]
    pub colors: ColorsSection,
    #[serde(default)]
    pub chrome: ChromeSection,
    #[serde(default = "default_navigation")]
    pub navigation: Vec<NavigationEntry>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app: AppSection::default(),
            drawer: DrawerSection::default(),
            spring: SpringSection::default(),
            colors: ColorsSection::default(),
            chrome: ChromeSection::default(),
            navigation: default_navigation(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("unsupported config version '{0}'")]
    UnsupportedVersion(String),
    #[error("drawer width must be a positive finite number, got {0}")]
    InvalidWidth(f64),
    #[error("{name} must be in (0, 1], got {value}")]
    InvalidFraction { name: &'static str, value: f64 },
    #[error("spring {name} must be positive, got {value}")]
    InvalidSpring { name: &'static str, value: f64 },
    #[error("'{value}' is not a valid color for {name}")]
    InvalidColor { name: &'static str, value: String },
    #[error("navigation list is empty")]
    EmptyNavigation,
    #[error("navigation entry '{0}' is listed twice")]
    DuplicateNavigationEntry(String),
    #[error("navigation entry name must not be empty")]
    UnnamedNavigationEntry,
    #[error("initial selection '{0}' is not a navigation entry")]
    UnknownInitialSelection(String),
}

impl ShellConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.app.is_supported_version() {
            return Err(ConfigError::UnsupportedVersion(self.app.version.clone()));
        }

        if !self.drawer.width.is_finite() || self.drawer.width <= 0.0 {
            return Err(ConfigError::InvalidWidth(self.drawer.width));
        }
        check_fraction("drawer.close_fraction", self.drawer.close_fraction)?;
        check_fraction("drawer.open_fraction", self.drawer.open_fraction)?;

        check_positive("tension", self.spring.tension)?;
        check_positive("friction", self.spring.friction)?;
        check_positive("mass", self.spring.mass)?;
        check_positive("precision", self.spring.precision)?;

        for (name, value) in [
            ("colors.open_tint", &self.colors.open_tint),
            ("colors.closed_tint", &self.colors.closed_tint),
            ("colors.overlay_open", &self.colors.overlay_open),
            ("colors.overlay_closed", &self.colors.overlay_closed),
            ("colors.body_background", &self.colors.body_background),
        ] {
            if !is_css_color(value) {
                return Err(ConfigError::InvalidColor {
                    name,
                    value: value.clone(),
                });
            }
        }

        if self.navigation.is_empty() {
            return Err(ConfigError::EmptyNavigation);
        }
        let mut seen = HashSet::new();
        for entry in &self.navigation {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::UnnamedNavigationEntry);
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateNavigationEntry(entry.name.clone()));
            }
        }
        if !seen.contains(self.chrome.initial_selection.as_str()) {
            return Err(ConfigError::UnknownInitialSelection(
                self.chrome.initial_selection.clone(),
            ));
        }

        Ok(())
    }
}

fn check_fraction(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidFraction { name, value })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidSpring { name, value })
    }
}

// AppSection carries the format version so files from another format are rejected
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSection {
    pub version: String,
    pub title: String,
}

impl AppSection {
    /// Current configuration format version
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn is_supported_version(&self) -> bool {
        matches!(self.version.as_str(), "1.0.0")
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
            title: "Etxe".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DrawerSection {
    /// Drawer width in pixels.
    pub width: f64,
    pub z_index: i32,
    pub initially_open: bool,
    /// Fraction of the width an open drawer must be dragged left to close.
    pub close_fraction: f64,
    /// Fraction of the width a closed drawer must be dragged right to open.
    pub open_fraction: f64,
    /// How far the toggle button slides out of a closed drawer, in percent of its own width.
    pub handle_closed_offset_percent: f64,
}

impl Default for DrawerSection {
    fn default() -> Self {
        Self {
            width: 600.0,
            z_index: 2,
            initially_open: true,
            close_fraction: 0.5,
            open_fraction: 0.25,
            handle_closed_offset_percent: 160.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpringSection {
    pub tension: f64,
    pub friction: f64,
    pub mass: f64,
    pub precision: f64,
}

impl Default for SpringSection {
    fn default() -> Self {
        Self {
            tension: 170.0,
            friction: 26.0,
            mass: 1.0,
            precision: 0.01,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColorsSection {
    pub open_tint: String,
    pub closed_tint: String,
    pub overlay_open: String,
    pub overlay_closed: String,
    pub body_background: String,
}

impl Default for ColorsSection {
    fn default() -> Self {
        Self {
            open_tint: "#344955".to_string(),
            closed_tint: "#ffffff".to_string(),
            overlay_open: "#06151ca0".to_string(),
            overlay_closed: "#ffffff00".to_string(),
            body_background: "#ffffff".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChromeSection {
    pub footer_label: String,
    pub initial_selection: String,
}

impl Default for ChromeSection {
    fn default() -> Self {
        Self {
            footer_label: "V1.0.0 alpha".to_string(),
            initial_selection: "User".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NavigationEntry {
    pub name: String,
    pub route: String,
    pub icon: String,
}

impl NavigationEntry {
    pub fn new(name: &str, route: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            route: route.to_string(),
            icon: icon.to_string(),
        }
    }
}

pub fn default_navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::new("User", "/private/loans", "user"),
        NavigationEntry::new("Files upload", "/private/cards", "file-text"),
        NavigationEntry::new("Route", "/private/deposits", "globe"),
        NavigationEntry::new("Locations", "/private/services", "map-pin-plus"),
        NavigationEntry::new("Connectivity", "/private/services", "wifi"),
        NavigationEntry::new("Social", "/private/services", "messages-square"),
        NavigationEntry::new("Settings", "/private/services", "settings"),
    ]
}

// ===== UTILITY FUNCTIONS =====

/// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` and the few named colors the shell uses.
pub fn is_css_color(value: &str) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "white" | "black" | "transparent" => true,
        other => other.strip_prefix('#').is_some_and(|hex| {
            matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ShellConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.navigation.len(), 7);
        assert_eq!(config.chrome.initial_selection, "User");
        assert_eq!(config.drawer.width, 600.0);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ShellConfig::from_toml_str("").unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = ShellConfig::from_toml_str(
            r#"
            [drawer]
            width = 320.0
            initially_open = false
            "#,
        )
        .unwrap();
        assert_eq!(config.drawer.width, 320.0);
        assert!(!config.drawer.initially_open);
        assert_eq!(config.drawer.close_fraction, 0.5);
        assert_eq!(config.spring, SpringSection::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ShellConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(ShellConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_repo_shell_toml_is_valid() {
        let config = ShellConfig::from_toml_str(include_str!("../../shell.toml")).unwrap();
        assert_eq!(config.app.version, AppSection::CURRENT_VERSION);
        assert_eq!(config.navigation[0].name, config.chrome.initial_selection);
    }

    #[test]
    fn test_parse_error() {
        let result = ShellConfig::from_toml_str("[drawer\nwidth = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_unsupported_version() {
        let result = ShellConfig::from_toml_str("[app]\nversion = \"0.9.0\"");
        assert!(matches!(result, Err(ConfigError::UnsupportedVersion(v)) if v == "0.9.0"));
    }

    #[test]
    fn test_rejects_non_positive_width() {
        let mut config = ShellConfig::default();
        config.drawer.width = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidWidth(_))));
        config.drawer.width = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidWidth(_))));
        config.drawer.width = f64::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidWidth(_))));

        assert!(matches!(
            ShellConfig::from_toml_str("[drawer]\nwidth = inf\n"),
            Err(ConfigError::InvalidWidth(_))
        ));
    }

    #[test]
    fn test_rejects_fraction_out_of_range() {
        let mut config = ShellConfig::default();
        config.drawer.open_fraction = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFraction { name: "drawer.open_fraction", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_spring() {
        let mut config = ShellConfig::default();
        config.spring.friction = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpring { name: "friction", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_color() {
        let mut config = ShellConfig::default();
        config.colors.overlay_open = "#06151".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidColor { .. })));
    }

    #[test]
    fn test_navigation_checks() {
        let mut config = ShellConfig::default();
        config.navigation.clear();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyNavigation)));

        let mut config = ShellConfig::default();
        config.navigation.push(NavigationEntry::new("Route", "/x", "globe"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateNavigationEntry(name)) if name == "Route"
        ));

        let mut config = ShellConfig::default();
        config.chrome.initial_selection = "Nowhere".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownInitialSelection(_))
        ));
    }

    #[test]
    fn test_is_css_color() {
        assert!(is_css_color("#fff"));
        assert!(is_css_color("#344955"));
        assert!(is_css_color("#06151CA0"));
        assert!(is_css_color("white"));
        assert!(!is_css_color("344955"));
        assert!(!is_css_color("#12345"));
        assert!(!is_css_color("#gggggg"));
    }

    #[test]
    fn test_config_serializes_to_json() {
        let json = serde_json::to_value(ShellConfig::default()).unwrap();
        assert_eq!(json["drawer"]["open_fraction"], 0.25);
        assert_eq!(json["navigation"][1]["route"], "/private/cards");
    }
}
