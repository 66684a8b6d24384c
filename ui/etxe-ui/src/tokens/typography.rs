// Typography Token System

use zoon::*;

pub const FONT_FAMILY_SHELL: &str = "Roboto";

pub const FONT_SIZE_14: u32 = 14;
pub const FONT_SIZE_16: u32 = 16;
pub const FONT_SIZE_18: u32 = 18;

pub fn font_shell() -> impl Style<'static> {
    Font::new().family([
        FontFamily::new(FONT_FAMILY_SHELL),
        FontFamily::new("system-ui"),
        FontFamily::SansSerif,
    ])
}
