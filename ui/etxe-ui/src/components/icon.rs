// Icon Component
// Inline stroke SVGs that inherit `currentColor` from their parent

use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconName {
    Menu,
    MenuOpen,
    User,
    FileText,
    Globe,
    MapPinPlus,
    Wifi,
    MessagesSquare,
    Settings,
    CircleHelp,
}

impl IconName {
    pub fn to_kebab_case(self) -> &'static str {
        match self {
            IconName::Menu => "menu",
            IconName::MenuOpen => "menu-open",
            IconName::User => "user",
            IconName::FileText => "file-text",
            IconName::Globe => "globe",
            IconName::MapPinPlus => "map-pin-plus",
            IconName::Wifi => "wifi",
            IconName::MessagesSquare => "messages-square",
            IconName::Settings => "settings",
            IconName::CircleHelp => "circle-help",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconSize {
    Small,  // 16px
    Medium, // 20px
    Large,  // 24px
}

impl IconSize {
    pub fn to_px(self) -> u32 {
        match self {
            IconSize::Small => 16,
            IconSize::Medium => 20,
            IconSize::Large => 24,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconColor {
    Current, // inherit from parent
    Custom(&'static str),
}

pub struct IconBuilder {
    name: IconName,
    size: IconSize,
    color: IconColor,
    aria_label: Option<String>,
}

impl IconBuilder {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: IconSize::Large,
            color: IconColor::Current,
            aria_label: None,
        }
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: IconColor) -> Self {
        self.color = color;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn build(self) -> impl Element {
        let size_px = self.size.to_px();
        let color = match self.color {
            IconColor::Current => "currentColor",
            IconColor::Custom(color) => color,
        };

        let svg = RawHtmlEl::new("div")
            .style("display", "flex")
            .style("color", color)
            .inner_markup(&svg_markup(self.name, size_px));
        let svg = match self.aria_label {
            Some(label) => svg.attr("role", "img").attr("aria-label", &label),
            None => svg.attr("aria-hidden", "true"),
        };

        El::new()
            .s(Width::exact(size_px))
            .s(Height::exact(size_px))
            .s(Align::center())
            .child(svg)
    }
}

fn svg_template(name: IconName) -> &'static str {
    match name {
        IconName::Menu => include_str!("../../assets/icons/menu.svg"),
        IconName::MenuOpen => include_str!("../../assets/icons/menu-open.svg"),
        IconName::User => include_str!("../../assets/icons/user.svg"),
        IconName::FileText => include_str!("../../assets/icons/file-text.svg"),
        IconName::Globe => include_str!("../../assets/icons/globe.svg"),
        IconName::MapPinPlus => include_str!("../../assets/icons/map-pin-plus.svg"),
        IconName::Wifi => include_str!("../../assets/icons/wifi.svg"),
        IconName::MessagesSquare => include_str!("../../assets/icons/messages-square.svg"),
        IconName::Settings => include_str!("../../assets/icons/settings.svg"),
        IconName::CircleHelp => include_str!("../../assets/icons/circle-help.svg"),
    }
}

// Templates are authored at 24px
fn svg_markup(name: IconName, size_px: u32) -> String {
    svg_template(name)
        .replace("width=\"24\"", &format!("width=\"{}\"", size_px))
        .replace("height=\"24\"", &format!("height=\"{}\"", size_px))
}

/// Unknown names fall back to `CircleHelp` so a typo in configuration stays visible.
pub fn icon_name_from_str(name: &str) -> IconName {
    match name {
        "menu" => IconName::Menu,
        "menu-open" => IconName::MenuOpen,
        "user" => IconName::User,
        "file-text" => IconName::FileText,
        "globe" => IconName::Globe,
        "map-pin-plus" => IconName::MapPinPlus,
        "wifi" => IconName::Wifi,
        "messages-square" => IconName::MessagesSquare,
        "settings" => IconName::Settings,
        _ => IconName::CircleHelp,
    }
}

pub fn icon(name: IconName) -> IconBuilder {
    IconBuilder::new(name)
}

pub fn icon_str(name: &str) -> IconBuilder {
    IconBuilder::new(icon_name_from_str(name))
}
