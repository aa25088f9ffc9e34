//! Prelude for convenient imports.
//!
//! Re-exports the types most callers need in one line:
//!
//! ```rust
//! use promptcraft_render::prelude::*;
//!
//! let registry = ModuleRegistry::builtin();
//! let modules = vec![ModuleInstance::from_definition(registry.get("character")?)];
//! let lines = render_prompt(&modules, &registry, Theme::default_theme(), &Bindings::new());
//! assert_eq!(paint_lines(&lines, ColorChoice::Never), "❯ ");
//! # Ok::<(), RegistryError>(())
//! ```

// Rendering
pub use crate::ansi::{paint, paint_lines, ColorChoice};
pub use crate::format::{render, Segment, Variables};
pub use crate::preview::{render_prompt, sample_bindings, Bindings, Line};

// Themes and styles
pub use crate::style::{parse_style_string, ParsedStyle};
pub use crate::theme::{import_base16_or_24, Theme};

// Modules and configuration
pub use crate::config::{generate, parse, GlobalConfig, ParsedConfig};
pub use crate::module::{ModuleInstance, ModuleList, PropertyValue};
pub use crate::registry::{ModuleDefinition, ModuleRegistry};

// Errors
pub use crate::error::{ConfigError, RegistryError, ThemeImportError};
