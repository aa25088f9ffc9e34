//! # Promptcraft Render - Shell Prompt Engine and Configuration Codec
//!
//! `promptcraft-render` renders shell-prompt format strings into styled
//! segments and converts module lists to and from TOML configuration text.
//!
//! Everything here is pure and synchronous: no file, network or process
//! access. The `promptcraft` CLI is a thin front end over this crate.
//!
//! ## Core Concepts
//!
//! - [`render`]: format string + [`Variables`] + base style + [`Theme`] to
//!   [`Segment`]s
//! - [`Theme`]: twelve named colors plus an optional raw palette
//! - [`style::parse_style_string`]: `"bold red bg:base00"` to [`ParsedStyle`]
//! - [`ModuleRegistry`]: default properties and variables per module type
//! - [`ModuleList`]: the ordered [`ModuleInstance`]s of one prompt
//! - [`config::generate`] / [`config::parse`]: the TOML codec
//! - [`theme::import_base16_or_24`]: Base16/Base24 YAML to [`Theme`]
//!
//! ## Quick Start
//!
//! ```rust
//! use promptcraft_render::{render, format::plain_text, Theme, Variables};
//!
//! let vars = Variables::new().with("symbol", "⬢ ").with("version", "v18.16.0");
//! let segments = render(
//!     "via [$symbol($version)]($style) ",
//!     &vars,
//!     "green bold",
//!     Theme::default_theme(),
//! );
//!
//! assert_eq!(plain_text(&segments), "via ⬢ v18.16.0 ");
//! assert_eq!(segments[1].style.foreground.as_deref(), Some("#22c55e"));
//! ```
//!
//! ## Configuration Round Trip
//!
//! ```rust
//! use promptcraft_render::config::{generate, parse, GlobalConfig};
//! use promptcraft_render::{ModuleInstance, ModuleRegistry};
//!
//! let registry = ModuleRegistry::builtin();
//! let modules = vec![
//!     ModuleInstance::from_definition(registry.get("directory").unwrap())
//!         .with_property("style", "bold blue"),
//!     ModuleInstance::from_definition(registry.get("character").unwrap()),
//! ];
//!
//! let text = generate(&modules, &GlobalConfig::default());
//! let parsed = parse(&text, &registry).unwrap();
//!
//! assert_eq!(parsed.modules.len(), 2);
//! assert_eq!(
//!     parsed.modules.as_slice()[0].string_property("style"),
//!     Some("bold blue")
//! );
//! ```
//!
//! ## Themes
//!
//! ```rust
//! use promptcraft_render::theme::builtin_themes;
//! use promptcraft_render::style::resolve_color;
//!
//! let dracula = builtin_themes().into_iter().find(|t| t.name() == "Dracula").unwrap();
//! assert_eq!(resolve_color("magenta", &dracula), "#ff79c6");
//! ```

pub mod ansi;
pub mod config;
mod error;
pub mod format;
pub mod module;
pub mod prelude;
pub mod preview;
pub mod registry;
pub mod style;
pub mod theme;

// Error types
pub use error::{ConfigError, RegistryError, ThemeImportError};

// Format engine exports
pub use format::{render, Segment, Variables, MAX_DEPTH};

// Style exports
pub use style::{parse_style_string, resolve_color, ParsedStyle};

// Theme exports
pub use theme::{import_base16_or_24, Theme, ThemeColors, ThemeSystem};

// Module and registry exports
pub use module::{ModuleInstance, ModuleList, Properties, PropertyValue};
pub use registry::{ModuleDefinition, ModuleRegistry};

// Codec exports
pub use config::{GlobalConfig, ParsedConfig};
