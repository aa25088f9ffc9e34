//! Base16 / Base24 palette import.
//!
//! Accepts the scheme format published by the base16 project:
//!
//! ```yaml
//! system: "base16"
//! name: "Gruvbox dark, medium"
//! author: "Dawid Kurek"
//! variant: "dark"
//! palette:
//!   base00: "282828"
//!   base01: "3c3836"
//!   # ... through base0F
//! ```
//!
//! The sixteen `base00..base0F` keys are required. Base24 schemes
//! (`system: "base24"`) may add `base10..base17`, which are kept when
//! present. Slot assignment follows the base16 styling guidelines:
//! background from `base00`, foreground from `base05`, accents from
//! `base08..base0E`.

use std::collections::BTreeMap;

use serde_yaml::Value;

use super::theme::{ensure_hex_prefix, Theme, ThemeColors, ThemeSystem};
use crate::error::ThemeImportError;

/// Keys every Base16 palette must define.
pub const BASE16_KEYS: [&str; 16] = [
    "base00", "base01", "base02", "base03", "base04", "base05", "base06", "base07", "base08",
    "base09", "base0A", "base0B", "base0C", "base0D", "base0E", "base0F",
];

/// Extension keys a Base24 palette may add.
pub const BASE24_KEYS: [&str; 8] = [
    "base10", "base11", "base12", "base13", "base14", "base15", "base16", "base17",
];

const DEFAULT_NAME: &str = "Custom Theme";
const DEFAULT_VARIANT: &str = "dark";

/// Imports a Base16 or Base24 scheme into a [`Theme`].
///
/// Returns an error, never a partial theme, when the YAML is malformed or a
/// required palette key is missing.
///
/// # Example
///
/// ```rust
/// use promptcraft_render::theme::import_base16_or_24;
///
/// let yaml = r#"
/// name: Mono
/// palette:
///   base00: "000000"
///   base01: "111111"
///   base02: "222222"
///   base03: "333333"
///   base04: "444444"
///   base05: "555555"
///   base06: "666666"
///   base07: "777777"
///   base08: "888888"
///   base09: "999999"
///   base0A: "aaaaaa"
///   base0B: "bbbbbb"
///   base0C: "cccccc"
///   base0D: "dddddd"
///   base0E: "eeeeee"
///   base0F: "ffffff"
/// "#;
///
/// let theme = import_base16_or_24(yaml).unwrap();
/// assert_eq!(theme.colors().fg, "#555555");
/// ```
pub fn import_base16_or_24(yaml: &str) -> Result<Theme, ThemeImportError> {
    build_theme(yaml).map_err(|err| {
        tracing::warn!(error = %err, "rejected theme import");
        err
    })
}

fn build_theme(yaml: &str) -> Result<Theme, ThemeImportError> {
    let doc: Value = serde_yaml::from_str(yaml)?;
    let raw = match doc.get("palette") {
        Some(palette @ Value::Mapping(_)) => palette,
        _ => return Err(ThemeImportError::MissingPalette),
    };

    let system = match doc.get("system").and_then(Value::as_str) {
        Some("base24") => ThemeSystem::Base24,
        _ => ThemeSystem::Base16,
    };

    let mut palette = BTreeMap::new();
    for key in BASE16_KEYS {
        let value = raw
            .get(key)
            .ok_or_else(|| ThemeImportError::MissingKey(key.to_string()))?;
        let color = color_text(key, value)?;
        if color.is_empty() {
            return Err(ThemeImportError::MissingKey(key.to_string()));
        }
        palette.insert(key.to_string(), ensure_hex_prefix(&color));
    }

    if system == ThemeSystem::Base24 {
        for key in BASE24_KEYS {
            if let Some(value) = raw.get(key) {
                let color = color_text(key, value)?;
                if !color.is_empty() {
                    palette.insert(key.to_string(), ensure_hex_prefix(&color));
                }
            }
        }
    }

    let slot = |key: &str| palette[key].clone();
    let colors = ThemeColors {
        bg: slot("base00"),
        fg: slot("base05"),
        black: slot("base01"),
        red: slot("base08"),
        green: slot("base0B"),
        yellow: slot("base0A"),
        blue: slot("base0D"),
        purple: slot("base0E"),
        cyan: slot("base0C"),
        white: slot("base07"),
        orange: slot("base09"),
        gray: slot("base03"),
    };

    let name = doc
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_NAME);
    let variant = doc
        .get("variant")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_VARIANT);

    let mut theme = Theme::new(name, colors)
        .with_variant(variant)
        .with_system(system)
        .with_palette(palette);
    if let Some(author) = doc.get("author").and_then(Value::as_str) {
        theme = theme.with_author(author);
    }

    tracing::debug!(name, ?system, "imported theme");
    Ok(theme)
}

/// Reads a palette entry as text.
///
/// Unquoted hex digits such as `181818` arrive as YAML integers; they are
/// printed back and zero-padded to six digits.
fn color_text(key: &str, value: &Value) -> Result<String, ThemeImportError> {
    match value {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) if n.is_u64() => Ok(format!("{:0>6}", n.to_string())),
        _ => Err(ThemeImportError::InvalidValue {
            key: key.to_string(),
        }),
    }
}
