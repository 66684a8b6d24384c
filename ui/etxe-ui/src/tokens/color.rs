// Color Token System
// Static shell palette plus the color math the chrome needs (lighten, darken, mix)

use palette::{Clamp, Darken, FromColor, Hsl, LinSrgba, Lighten, Mix, Srgb, Srgba, WithAlpha};

// Shell palette
pub const SLATE_900: &str = "#344955"; // drawer tint, navigation text
pub const SLATE_700: &str = "#4a6572"; // header background
pub const SLATE_500: &str = "#5f7481"; // base of the navigation highlight
pub const AMBER_500: &str = "#f9aa33"; // base of the selected navigation text
pub const MIST_200: &str = "#d8dcde"; // body text, footer border
pub const WHITE: &str = "#ffffff";
pub const TRANSPARENT: &str = "#ffffff00";

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `white`, `black` or `transparent`.
pub fn parse_color(value: &str) -> Option<Srgba> {
    let value = value.trim().to_ascii_lowercase();
    let rgba: Srgba<u8> = match value.as_str() {
        "white" => Srgba::new(255, 255, 255, 255),
        "black" => Srgba::new(0, 0, 0, 255),
        "transparent" => Srgba::new(255, 255, 255, 0),
        other => {
            let hex = other.strip_prefix('#')?;
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
            match hex.len() {
                3 => {
                    let short = |index: usize| channel(index..index + 1).map(|c| c * 17);
                    Srgba::new(short(0)?, short(1)?, short(2)?, 255)
                }
                6 => Srgba::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255),
                8 => Srgba::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?),
                _ => return None,
            }
        }
    };
    Some(rgba.into_format())
}

/// Render as a CSS `rgba(...)` value.
pub fn to_css(color: Srgba) -> String {
    let rgb: Srgb<u8> = color.color.into_format();
    let alpha = (color.alpha.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
    format!("rgba({}, {}, {}, {})", rgb.red, rgb.green, rgb.blue, alpha)
}

/// Blend in linear light, `factor` 0 is `from`, 1 is `to`.
pub fn mix(from: Srgba, to: Srgba, factor: f32) -> Srgba {
    let from: LinSrgba = from.into_linear();
    let to: LinSrgba = to.into_linear();
    Srgba::from_linear(from.mix(to, factor.clamp(0.0, 1.0)))
}

/// Raise HSL lightness by an absolute amount. Unparsable input is returned unchanged.
pub fn lighten(amount: f32, value: &str) -> String {
    adjust_lightness(value, |hsl| hsl.lighten_fixed(amount))
}

/// Lower HSL lightness by an absolute amount. Unparsable input is returned unchanged.
pub fn darken(amount: f32, value: &str) -> String {
    adjust_lightness(value, |hsl| hsl.darken_fixed(amount))
}

fn adjust_lightness(value: &str, adjust: impl FnOnce(Hsl) -> Hsl) -> String {
    let Some(color) = parse_color(value) else {
        return value.to_string();
    };
    let hsl = adjust(Hsl::from_color(color.color)).clamp();
    to_css(Srgb::from_color(hsl).with_alpha(color.alpha))
}

// Navigation cell colors
pub fn cell_highlight_background() -> String {
    lighten(0.5, SLATE_500)
}

pub fn cell_selected_text() -> String {
    darken(0.25, AMBER_500)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.002
    }

    #[test]
    fn test_parse_hex_forms() {
        let long = parse_color("#344955").unwrap();
        assert!(close(long.red, 0x34 as f32 / 255.0));
        assert!(close(long.alpha, 1.0));

        let short = parse_color("#fff").unwrap();
        assert!(close(short.red, 1.0) && close(short.blue, 1.0));

        let with_alpha = parse_color("#06151CA0").unwrap();
        assert!(close(with_alpha.alpha, 0xA0 as f32 / 255.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_color("344955").is_none());
        assert!(parse_color("#12345").is_none());
        assert!(parse_color("#zzzzzz").is_none());
        assert!(parse_color("#ééé").is_none());
        assert!(parse_color("#+f+f+f").is_none());
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(to_css(parse_color("white").unwrap()), "rgba(255, 255, 255, 1)");
        assert_eq!(to_css(parse_color("transparent").unwrap()), "rgba(255, 255, 255, 0)");
    }

    #[test]
    fn test_mix_endpoints() {
        let from = parse_color(SLATE_900).unwrap();
        let to = parse_color(WHITE).unwrap();
        assert_eq!(to_css(mix(from, to, 0.0)), "rgba(52, 73, 85, 1)");
        assert_eq!(to_css(mix(from, to, 1.0)), "rgba(255, 255, 255, 1)");
        // factor is clamped
        assert_eq!(to_css(mix(from, to, 7.0)), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn test_mix_interpolates_alpha() {
        let from = parse_color("#06151ca0").unwrap();
        let to = parse_color(TRANSPARENT).unwrap();
        let halfway = mix(from, to, 0.5);
        assert!(close(halfway.alpha, 0xA0 as f32 / 255.0 / 2.0));
    }

    #[test]
    fn test_lighten_and_darken() {
        // #5f7481 has ~44% lightness; +50% lands near white but keeps the hue tint
        let highlight = cell_highlight_background();
        assert!(highlight.starts_with("rgba("));
        assert_ne!(highlight, "rgba(255, 255, 255, 1)");
        assert_eq!(lighten(1.0, SLATE_500), "rgba(255, 255, 255, 1)");
        assert_eq!(darken(1.0, AMBER_500), "rgba(0, 0, 0, 1)");
        assert_eq!(lighten(0.2, "not-a-color"), "not-a-color");
    }
}
