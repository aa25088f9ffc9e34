//! Theme struct: twelve named color slots plus an optional raw palette.
//!
//! Themes feed two consumers:
//!
//! - The style resolver, which looks symbolic tokens (`red`, `bg`, `base08`)
//!   up in the named slots first and in the palette second.
//! - The configuration generator, which can embed the raw palette as a
//!   `[palettes.<name>]` section.
//!
//! # Construction
//!
//! ```rust
//! use promptcraft_render::{Theme, ThemeColors};
//!
//! let theme = Theme::new("Mono", ThemeColors::uniform("#808080"))
//!     .with_author("me")
//!     .with_palette([("accent", "ff8800")]);
//!
//! // Palette values are normalized to carry a `#` prefix.
//! assert_eq!(theme.palette().unwrap()["accent"], "#ff8800");
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};

/// Names of the twelve fixed color slots, in declaration order.
pub const COLOR_SLOTS: [&str; 12] = [
    "bg", "fg", "black", "red", "green", "yellow", "blue", "purple", "cyan", "white", "orange",
    "gray",
];

/// The twelve named color slots every theme populates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub purple: String,
    pub cyan: String,
    pub white: String,
    pub orange: String,
    pub gray: String,
}

impl ThemeColors {
    /// Every slot set to the same color. Mostly useful in tests.
    pub fn uniform(color: &str) -> Self {
        Self {
            bg: color.to_string(),
            fg: color.to_string(),
            black: color.to_string(),
            red: color.to_string(),
            green: color.to_string(),
            yellow: color.to_string(),
            blue: color.to_string(),
            purple: color.to_string(),
            cyan: color.to_string(),
            white: color.to_string(),
            orange: color.to_string(),
            gray: color.to_string(),
        }
    }

    /// Looks a slot up by its (already lowercased) name.
    pub fn get(&self, slot: &str) -> Option<&str> {
        let value = match slot {
            "bg" => &self.bg,
            "fg" => &self.fg,
            "black" => &self.black,
            "red" => &self.red,
            "green" => &self.green,
            "yellow" => &self.yellow,
            "blue" => &self.blue,
            "purple" => &self.purple,
            "cyan" => &self.cyan,
            "white" => &self.white,
            "orange" => &self.orange,
            "gray" => &self.gray,
            _ => return None,
        };
        Some(value.as_str())
    }
}

/// Palette system a theme was imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSystem {
    Base16,
    Base24,
}

/// A named set of colors used to resolve style tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    system: Option<ThemeSystem>,
    colors: ThemeColors,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_palette"
    )]
    palette: Option<BTreeMap<String, String>>,
}

/// Reads a palette and gives every value a `#` prefix, as `with_palette` does.
fn deserialize_palette<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let palette = Option::<BTreeMap<String, String>>::deserialize(deserializer)?;
    Ok(palette.map(|palette| {
        palette
            .into_iter()
            .map(|(key, value)| {
                let value = ensure_hex_prefix(&value);
                (key, value)
            })
            .collect()
    }))
}

impl Theme {
    /// Creates a theme with the given name and colors and no palette.
    pub fn new(name: impl Into<String>, colors: ThemeColors) -> Self {
        Self {
            name: name.into(),
            author: None,
            variant: None,
            system: None,
            colors,
            palette: None,
        }
    }

    /// The hard-coded fallback theme consulted when a token is missing from
    /// the active theme.
    pub fn default_theme() -> &'static Theme {
        &DEFAULT_THEME
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_system(mut self, system: ThemeSystem) -> Self {
        self.system = Some(system);
        self
    }

    /// Attaches a raw palette, normalizing each value to carry a `#` prefix.
    pub fn with_palette<I, K, V>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let palette = palette
            .into_iter()
            .map(|(key, value)| (key.into(), ensure_hex_prefix(value.as_ref())))
            .collect();
        self.palette = Some(palette);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    pub fn system(&self) -> Option<ThemeSystem> {
        self.system
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    pub fn palette(&self) -> Option<&BTreeMap<String, String>> {
        self.palette.as_ref()
    }

    /// Exports the raw palette for embedding in configuration text.
    ///
    /// Empty entries are dropped. Returns `None` when the theme has no palette.
    pub fn export_palette(&self) -> Option<BTreeMap<String, String>> {
        let palette = self.palette.as_ref()?;
        Some(
            palette
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    /// Palette name used when embedding: lowercase, whitespace runs as `_`.
    ///
    /// ```rust
    /// use promptcraft_render::Theme;
    ///
    /// let theme = Theme::default_theme().clone();
    /// assert_eq!(theme.palette_slug(), "default");
    /// ```
    pub fn palette_slug(&self) -> String {
        self.name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    }
}

/// Prefixes `#` onto a color value that lacks it. Empty input stays empty.
pub(crate) fn ensure_hex_prefix(color: &str) -> String {
    if color.is_empty() || color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{}", color)
    }
}

fn colors(hex: [&str; 12]) -> ThemeColors {
    let [bg, fg, black, red, green, yellow, blue, purple, cyan, white, orange, gray] =
        hex.map(|s| s.to_string());
    ThemeColors {
        bg,
        fg,
        black,
        red,
        green,
        yellow,
        blue,
        purple,
        cyan,
        white,
        orange,
        gray,
    }
}

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new(
        "Default",
        colors([
            "#1e1e1e", "#d4d4d4", "#000000", "#ef4444", "#22c55e", "#eab308", "#3b82f6", "#a855f7",
            "#06b6d4", "#ffffff", "#f97316", "#6b7280",
        ]),
    )
});

/// The themes available without importing anything, Default first.
pub fn builtin_themes() -> Vec<Theme> {
    vec![
        DEFAULT_THEME.clone(),
        Theme::new(
            "Catppuccin Mocha",
            colors([
                "#1e1e2e", "#cdd6f4", "#45475a", "#f38ba8", "#a6e3a1", "#f9e2af", "#89b4fa",
                "#cba6f7", "#89dceb", "#bac2de", "#fab387", "#585b70",
            ]),
        ),
        Theme::new(
            "Tokyo Night",
            colors([
                "#1a1b26", "#c0caf5", "#414868", "#f7768e", "#9ece6a", "#e0af68", "#7aa2f7",
                "#bb9af7", "#7dcfff", "#a9b1d6", "#ff9e64", "#565f89",
            ]),
        ),
        Theme::new(
            "Gruvbox Dark",
            colors([
                "#282828", "#ebdbb2", "#928374", "#cc241d", "#98971a", "#d79921", "#458588",
                "#b16286", "#689d6a", "#a89984", "#d65d0e", "#a89984",
            ]),
        ),
        Theme::new(
            "Dracula",
            colors([
                "#282a36", "#f8f8f2", "#6272a4", "#ff5555", "#50fa7b", "#f1fa8c", "#bd93f9",
                "#ff79c6", "#8be9fd", "#f8f8f2", "#ffb86c", "#44475a",
            ]),
        ),
    ]
}
