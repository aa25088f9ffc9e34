//! Configuration codec: module list to TOML text and back.
//!
//! [`generate`] writes a module list plus [`GlobalConfig`] as TOML: a master
//! `format` string listing the modules in order, then one `[type]` section
//! per module. [`parse`] reads such text back into a [`ParsedConfig`].
//!
//! The two are inverse for modules whose properties are strings, numbers,
//! booleans or string maps. Free-text modules survive too, with two limits:
//! text that itself contains a `$module` reference reads back as that
//! module, and adjacent free-text modules read back as one. Text starting
//! with an identifier character or a `\` right after a module reference is
//! written with a separating `\`, which the parser drops again.
//!
//! ```rust
//! use promptcraft_render::config::{generate, parse, GlobalConfig};
//! use promptcraft_render::{ModuleInstance, ModuleList, ModuleRegistry};
//!
//! let registry = ModuleRegistry::builtin();
//! let modules: ModuleList = vec![
//!     ModuleInstance::from_definition(registry.get("directory").unwrap()),
//!     ModuleInstance::line_break(),
//!     ModuleInstance::from_definition(registry.get("character").unwrap()),
//! ]
//! .into();
//!
//! let text = generate(modules.as_slice(), &GlobalConfig::default());
//! let parsed = parse(&text, &registry).unwrap();
//!
//! let types: Vec<_> = parsed.modules.iter().map(|m| m.module_type.as_str()).collect();
//! assert_eq!(types, ["directory", "line_break", "character"]);
//! ```
//!
//! ## See Also
//!
//! - [`crate::module`]: the data being encoded
//! - [`crate::theme::Theme::export_palette`]: source of embedded palettes

mod generate;
mod parse;
mod quote;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::module::ModuleList;
use crate::theme::Theme;

pub use generate::{generate, palette_fragment};
pub use parse::parse;

/// Top-level settings that are not tied to a module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_newline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_prompt: Option<String>,
    /// Name of the active entry in `palettes`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub palettes: BTreeMap<String, BTreeMap<String, String>>,
}

impl GlobalConfig {
    /// Embeds the theme's raw palette and makes it the active palette.
    ///
    /// Returns false, leaving the config untouched, when the theme has no
    /// palette.
    pub fn embed_theme_palette(&mut self, theme: &Theme) -> bool {
        let Some(colors) = theme.export_palette() else {
            return false;
        };
        let name = theme.palette_slug();
        self.palettes.insert(name.clone(), colors);
        self.palette = Some(name);
        true
    }
}

/// Result of [`parse`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedConfig {
    pub modules: ModuleList,
    pub globals: GlobalConfig,
}
