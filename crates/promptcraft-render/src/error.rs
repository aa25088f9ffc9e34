//! Error types for the configuration codec, theme importer, and registry.
//!
//! Every error here is recoverable: callers keep their last known-good state
//! (module list, theme) and surface the message. Style resolution and
//! format-string rendering never fail and therefore have no error type.

use thiserror::Error;

/// Error returned when configuration text cannot be read back into modules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The text is not valid TOML.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::InvalidFormat(err.to_string())
    }
}

/// Error returned when a Base16/Base24 theme description is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeImportError {
    /// The text is not valid YAML.
    #[error("invalid theme: {0} (expected a `palette` mapping with base00..base0F)")]
    Yaml(String),

    /// The document has no `palette` mapping.
    #[error("invalid theme: missing `palette` mapping with base00..base0F")]
    MissingPalette,

    /// A required Base16 slot is absent.
    #[error("invalid theme: palette is missing required key `{0}` (base00..base0F are required)")]
    MissingKey(String),

    /// A palette slot holds something other than a color string.
    #[error("invalid theme: palette key `{key}` is not a color string")]
    InvalidValue { key: String },
}

impl From<serde_yaml::Error> for ThemeImportError {
    fn from(err: serde_yaml::Error) -> Self {
        ThemeImportError::Yaml(err.to_string())
    }
}

/// Error returned when a module type has no registry definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No definition is registered under this module type.
    #[error("unknown module type: {0}")]
    UnknownModule(String),
}
