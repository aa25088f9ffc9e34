//! Themes: named color slots, raw palettes, and Base16/Base24 import.
//!
//! A [`Theme`] always carries twelve named colors (`bg`, `fg`, `black`,
//! `red`, `green`, `yellow`, `blue`, `purple`, `cyan`, `white`, `orange`,
//! `gray`). Imported schemes additionally keep their raw palette so style
//! strings can reference `base08` directly and so the palette can be embedded
//! verbatim in generated configuration.
//!
//! ```rust
//! use promptcraft_render::theme::builtin_themes;
//!
//! let themes = builtin_themes();
//! assert_eq!(themes[0].name(), "Default");
//! ```
//!
//! ## See Also
//!
//! - [`crate::style`]: how style tokens are resolved against a theme
//! - [`crate::config::GlobalConfig::embed_theme_palette`]: palette export

mod base16;
#[allow(clippy::module_inception)]
mod theme;

pub use base16::{import_base16_or_24, BASE16_KEYS, BASE24_KEYS};
pub use theme::{builtin_themes, Theme, ThemeColors, ThemeSystem, COLOR_SLOTS};
