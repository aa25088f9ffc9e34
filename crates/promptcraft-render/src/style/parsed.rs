//! Style strings and the structural style they resolve to.
//!
//! A style string is a whitespace-separated list of tokens:
//!
//! - `bold`, `italic`, `underline` set the matching flag
//! - `bg:<color>` sets the background
//! - `fg:<color>` sets the foreground
//! - anything else is a foreground color
//!
//! Tokens are independent. When two tokens target the same field the last
//! one wins. Colors go through [`resolve_color`](super::resolve_color), so
//! the resulting [`ParsedStyle`] no longer depends on the theme.
//!
//! # Example
//!
//! ```rust
//! use promptcraft_render::style::parse_style_string;
//! use promptcraft_render::Theme;
//!
//! let style = parse_style_string("bold red bg:#000000", Theme::default_theme());
//! assert_eq!(style.bold, Some(true));
//! assert_eq!(style.foreground.as_deref(), Some("#ef4444"));
//! assert_eq!(style.background.as_deref(), Some("#000000"));
//! ```

use console::Style;
use serde::{Deserialize, Serialize};

use super::color::{resolve_color, ColorDef};
use crate::theme::Theme;

/// A resolved, theme-independent rendering instruction.
///
/// Every field is optional: `None` means "not specified here" so that an
/// outer style can fill it in. See [`ParsedStyle::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
}

impl ParsedStyle {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    pub fn fg(mut self, color: impl Into<String>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    /// Sets the background color.
    pub fn bg(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Sets bold.
    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    /// Sets italic.
    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    /// Sets underline.
    pub fn underline(mut self) -> Self {
        self.underline = Some(true);
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none()
            && self.background.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
    }

    /// Layers `other` on top of `self`.
    ///
    /// Fields set in `other` win; fields `other` leaves unset keep the value
    /// from `self`. A style block uses this to put its own style under the
    /// styles of the segments nested inside it.
    pub fn merge(&self, other: &ParsedStyle) -> ParsedStyle {
        ParsedStyle {
            foreground: other.foreground.clone().or_else(|| self.foreground.clone()),
            background: other.background.clone().or_else(|| self.background.clone()),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            underline: other.underline.or(self.underline),
        }
    }

    /// Builds a `console::Style` for terminal output.
    ///
    /// Colors that are neither hex nor ANSI names (for example `inherit` or
    /// an unknown passthrough token) are left out.
    pub fn to_console_style(&self) -> Style {
        let mut style = Style::new();

        if let Some(fg) = self.foreground.as_deref() {
            if let Ok(color) = ColorDef::parse_string(fg) {
                style = style.fg(color.to_console_color());
            }
        }
        if let Some(bg) = self.background.as_deref() {
            if let Ok(color) = ColorDef::parse_string(bg) {
                style = style.bg(color.to_console_color());
            }
        }
        if self.bold == Some(true) {
            style = style.bold();
        }
        if self.italic == Some(true) {
            style = style.italic();
        }
        if self.underline == Some(true) {
            style = style.underlined();
        }

        style
    }
}

/// Parses a style string against a theme. Never fails.
pub fn parse_style_string(style: &str, theme: &Theme) -> ParsedStyle {
    let mut parsed = ParsedStyle::default();

    for token in style.split_whitespace() {
        match token {
            "bold" => parsed.bold = Some(true),
            "italic" => parsed.italic = Some(true),
            "underline" => parsed.underline = Some(true),
            _ => {
                if let Some(color) = token.strip_prefix("bg:") {
                    parsed.background = Some(resolve_color(color, theme));
                } else if let Some(color) = token.strip_prefix("fg:") {
                    parsed.foreground = Some(resolve_color(color, theme));
                } else {
                    parsed.foreground = Some(resolve_color(token, theme));
                }
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> &'static Theme {
        Theme::default_theme()
    }

    // =========================================================================
    // parse_style_string tests
    // =========================================================================

    #[test]
    fn test_parse_empty() {
        assert!(parse_style_string("", theme()).is_empty());
        assert!(parse_style_string("   \t ", theme()).is_empty());
    }

    #[test]
    fn test_parse_attributes() {
        let style = parse_style_string("bold italic underline", theme());
        assert_eq!(style, ParsedStyle::new().bold().italic().underline());
    }

    #[test]
    fn test_parse_attributes_are_case_sensitive() {
        // `Bold` is not an attribute; it is treated as a color token.
        let style = parse_style_string("Bold", theme());
        assert_eq!(style.bold, None);
        assert_eq!(style.foreground.as_deref(), Some("Bold"));
    }

    #[test]
    fn test_parse_bare_color_is_foreground() {
        let style = parse_style_string("red", theme());
        assert_eq!(style.foreground.as_deref(), Some("#ef4444"));
        assert_eq!(style.background, None);
    }

    #[test]
    fn test_parse_prefixed_colors() {
        let style = parse_style_string("fg:green bg:blue", theme());
        assert_eq!(style.foreground.as_deref(), Some("#22c55e"));
        assert_eq!(style.background.as_deref(), Some("#3b82f6"));
    }

    #[test]
    fn test_parse_empty_prefixed_color_inherits() {
        let style = parse_style_string("bg:", theme());
        assert_eq!(style.background.as_deref(), Some("inherit"));
    }

    #[test]
    fn test_parse_last_write_wins() {
        let style = parse_style_string("red fg:blue", theme());
        assert_eq!(style.foreground.as_deref(), Some("#3b82f6"));
        let style = parse_style_string("fg:blue red", theme());
        assert_eq!(style.foreground.as_deref(), Some("#ef4444"));
    }

    #[test]
    fn test_parse_order_independent_across_fields() {
        assert_eq!(
            parse_style_string("bold bg:red green", theme()),
            parse_style_string("green bg:red bold", theme())
        );
    }

    // =========================================================================
    // merge tests
    // =========================================================================

    #[test]
    fn test_merge_inner_overrides_per_field() {
        let block = ParsedStyle::new().bold().fg("#ffffff");
        let inner = ParsedStyle::new().fg("#ef4444");
        let merged = block.merge(&inner);
        assert_eq!(merged.bold, Some(true));
        assert_eq!(merged.foreground.as_deref(), Some("#ef4444"));
    }

    #[test]
    fn test_merge_empty_keeps_base() {
        let block = ParsedStyle::new().underline().bg("#000000");
        assert_eq!(block.merge(&ParsedStyle::new()), block);
        assert_eq!(ParsedStyle::new().merge(&block), block);
    }

    // =========================================================================
    // console conversion tests
    // =========================================================================

    #[test]
    fn test_to_console_style_skips_unknown_colors() {
        let style = ParsedStyle::new().fg("inherit").bg("teal").bold();
        let expected = Style::new().bold();
        assert_eq!(
            style.to_console_style().force_styling(true).apply_to("x").to_string(),
            expected.force_styling(true).apply_to("x").to_string()
        );
    }

    #[test]
    fn test_to_console_style_named_color() {
        let style = ParsedStyle::new().fg("red");
        let expected = Style::new().red();
        assert_eq!(
            style.to_console_style().force_styling(true).apply_to("x").to_string(),
            expected.force_styling(true).apply_to("x").to_string()
        );
    }
}
