//! Color token resolution.
//!
//! Style strings name colors symbolically. [`resolve_color`] maps a token to
//! a concrete color string against the active theme:
//!
//! 1. `#rrggbb` (any `#`-prefixed token) is returned verbatim
//! 2. the theme's twelve named slots (`red`, `bg`, ...; `magenta` is an
//!    alias of `purple`), matched case-insensitively
//! 3. the theme's raw palette (`base08`, ...), matched case-sensitively
//! 4. the default theme's named slots
//! 5. otherwise the token itself, so the caller can hand it to a renderer
//!    that understands raw color names
//!
//! Resolution never fails. An empty token resolves to `inherit`.
//!
//! [`ColorDef`] goes the other way for terminal output: it parses a resolved
//! color (hex or ANSI name) into a `console::Color`.
//!
//! # Example
//!
//! ```rust
//! use promptcraft_render::style::resolve_color;
//! use promptcraft_render::Theme;
//!
//! let theme = Theme::default_theme();
//! assert_eq!(resolve_color("red", theme), "#ef4444");
//! assert_eq!(resolve_color("magenta", theme), resolve_color("purple", theme));
//! assert_eq!(resolve_color("#123456", theme), "#123456");
//! assert_eq!(resolve_color("bright_red", theme), "bright_red");
//! ```

use console::Color;

use crate::theme::Theme;

/// Color used when a style asks for a color but names none.
pub const INHERIT: &str = "inherit";

/// Resolves a color token against a theme.
pub fn resolve_color(token: &str, theme: &Theme) -> String {
    if token.is_empty() {
        return INHERIT.to_string();
    }
    if token.starts_with('#') {
        return token.to_string();
    }

    let mut normalized = token.to_lowercase();
    if normalized == "magenta" {
        normalized = "purple".to_string();
    }

    if let Some(color) = theme.colors().get(&normalized) {
        return color.to_string();
    }
    if let Some(color) = theme.palette().and_then(|palette| palette.get(token)) {
        return color.clone();
    }
    if let Some(color) = Theme::default_theme().colors().get(&normalized) {
        return color.to_string();
    }

    token.to_string()
}

/// A resolved color in a form a terminal can display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorDef {
    /// Named ANSI color.
    Named(Color),
    /// 256-color palette index.
    Color256(u8),
    /// True color RGB.
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// Parses a resolved color string.
    ///
    /// Supports:
    /// - Hex codes: `#ff6b35` or `#fff`
    /// - Named colors: `red`, `green`, `blue`, etc.
    /// - Bright variants: `bright_red`, `bright_green`, etc.
    pub fn parse_string(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        Self::parse_named(s)
    }

    /// Parses a hex color code (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| format!("Invalid hex: {}", hex))
        };
        if !hex.is_ascii() {
            return Err(format!("Invalid hex: {}", hex));
        }
        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => Ok(ColorDef::Rgb(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Ok(ColorDef::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    /// Parses a named color (including bright variants).
    fn parse_named(name: &str) -> Result<Self, String> {
        let name_lower = name.to_lowercase();

        if let Some(base) = name_lower.strip_prefix("bright_") {
            return Self::parse_bright_color(base);
        }

        let color = match name_lower.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" | "purple" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            _ => return Err(format!("Unknown color name: {}", name)),
        };

        Ok(ColorDef::Named(color))
    }

    /// Parses a bright color variant.
    fn parse_bright_color(base: &str) -> Result<Self, String> {
        let index = match base {
            "black" => 8,
            "red" => 9,
            "green" => 10,
            "yellow" => 11,
            "blue" => 12,
            "magenta" | "purple" => 13,
            "cyan" => 14,
            "white" => 15,
            _ => return Err(format!("Unknown bright color: bright_{}", base)),
        };

        Ok(ColorDef::Color256(index))
    }

    /// Converts this color definition to a `console::Color`.
    ///
    /// RGB values are mapped to the nearest 256-color palette entry.
    pub fn to_console_color(&self) -> Color {
        match self {
            ColorDef::Named(c) => *c,
            ColorDef::Color256(n) => Color::Color256(*n),
            ColorDef::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((*r, *g, *b))),
        }
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use promptcraft_render::style::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeColors;

    fn palette_theme() -> Theme {
        let mut colors = ThemeColors::uniform("#101010");
        colors.red = "#ef4444".to_string();
        colors.purple = "#aa00ff".to_string();
        Theme::new("test", colors).with_palette([("base08", "#ff0000"), ("Accent", "00ff00")])
    }

    // =========================================================================
    // resolve_color tests
    // =========================================================================

    #[test]
    fn test_resolve_hex_verbatim() {
        assert_eq!(resolve_color("#ABCDEF", &palette_theme()), "#ABCDEF");
    }

    #[test]
    fn test_resolve_empty_is_inherit() {
        assert_eq!(resolve_color("", &palette_theme()), "inherit");
    }

    #[test]
    fn test_resolve_named_slot_case_insensitive() {
        let theme = palette_theme();
        assert_eq!(resolve_color("red", &theme), "#ef4444");
        assert_eq!(resolve_color("RED", &theme), "#ef4444");
        assert_eq!(resolve_color("bg", &theme), "#101010");
    }

    #[test]
    fn test_resolve_magenta_alias() {
        let theme = palette_theme();
        assert_eq!(resolve_color("magenta", &theme), "#aa00ff");
        assert_eq!(
            resolve_color("Magenta", &theme),
            resolve_color("purple", &theme)
        );
    }

    #[test]
    fn test_resolve_palette_case_sensitive() {
        let theme = palette_theme();
        assert_eq!(resolve_color("base08", &theme), "#ff0000");
        assert_eq!(resolve_color("Accent", &theme), "#00ff00");
        // Lowercased lookup does not reach the palette.
        assert_eq!(resolve_color("accent", &theme), "accent");
    }

    #[test]
    fn test_resolve_named_slot_beats_palette() {
        let theme = Theme::new("t", ThemeColors::uniform("#111111"))
            .with_palette([("red", "#999999")]);
        assert_eq!(resolve_color("red", &theme), "#111111");
    }

    #[test]
    fn test_resolve_passthrough() {
        let theme = palette_theme();
        assert_eq!(resolve_color("bright_red", &theme), "bright_red");
        assert_eq!(resolve_color("Teal", &theme), "Teal");
    }

    // =========================================================================
    // ColorDef tests
    // =========================================================================

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(
            ColorDef::parse_string("red").unwrap(),
            ColorDef::Named(Color::Red)
        );
        assert_eq!(
            ColorDef::parse_string("Purple").unwrap(),
            ColorDef::Named(Color::Magenta)
        );
        assert!(ColorDef::parse_string("orange").is_err());
    }

    #[test]
    fn test_parse_bright_colors() {
        assert_eq!(
            ColorDef::parse_string("bright_red").unwrap(),
            ColorDef::Color256(9)
        );
        assert_eq!(
            ColorDef::parse_string("bright_white").unwrap(),
            ColorDef::Color256(15)
        );
        assert!(ColorDef::parse_string("bright_orange").is_err());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            ColorDef::parse_string("#ff6b35").unwrap(),
            ColorDef::Rgb(255, 107, 53)
        );
        assert_eq!(
            ColorDef::parse_string("#f80").unwrap(),
            ColorDef::Rgb(255, 136, 0)
        );
        assert!(ColorDef::parse_string("#ff").is_err());
        assert!(ColorDef::parse_string("#gggggg").is_err());
        assert!(ColorDef::parse_string("#ééé").is_err());
    }

    #[test]
    fn test_to_console_color() {
        assert_eq!(ColorDef::Named(Color::Red).to_console_color(), Color::Red);
        assert_eq!(
            ColorDef::Rgb(255, 0, 0).to_console_color(),
            Color::Color256(196)
        );
    }

    #[test]
    fn test_rgb_to_ansi256_grays() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((128, 128, 128)), 243);
    }
}
