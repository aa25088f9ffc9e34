//! Module registry: default properties and variables per module type.
//!
//! The registry is an explicit value handed to the codec and the preview,
//! never ambient state. [`ModuleRegistry::builtin`] returns the modules the
//! editor ships with; callers may start from [`ModuleRegistry::new`] and
//! [`register`](ModuleRegistry::register) their own.
//!
//! ```rust
//! use promptcraft_render::ModuleRegistry;
//!
//! let registry = ModuleRegistry::builtin();
//! let def = registry.get("git_branch").unwrap();
//! assert_eq!(def.variables(), ["$symbol", "$branch"]);
//! assert!(registry.get("kubernetes").is_err());
//! ```

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::module::{
    Properties, PropertyValue, FORMAT_KEY, LINE_BREAK_MODULE, STYLE_KEY,
};

/// Registry entry describing one module type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    name: String,
    description: String,
    #[serde(default)]
    default_props: Properties,
    #[serde(default)]
    variables: Vec<String>,
}

impl ModuleDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default_props: Properties::new(),
            variables: Vec::new(),
        }
    }

    /// Adds a default property.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.default_props.insert(key.into(), value.into());
        self
    }

    /// Sets the ordered variable list. Names keep their `$` prefix.
    pub fn with_variables<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = variables.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn default_props(&self) -> &Properties {
        &self.default_props
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// The default format string, if the module has one.
    pub fn default_format(&self) -> Option<&str> {
        self.default_props
            .get(FORMAT_KEY)
            .and_then(PropertyValue::as_str)
    }

    /// The default base style, if the module has one.
    pub fn default_style(&self) -> Option<&str> {
        self.default_props
            .get(STYLE_KEY)
            .and_then(PropertyValue::as_str)
    }
}

/// Lookup table of module definitions, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleRegistry {
    definitions: IndexMap<String, ModuleDefinition>,
}

impl ModuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in module set.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Adds or replaces a definition, returning the one it replaced.
    pub fn register(&mut self, definition: ModuleDefinition) -> Option<ModuleDefinition> {
        self.definitions
            .insert(definition.name.clone(), definition)
    }

    pub fn get(&self, module_type: &str) -> Result<&ModuleDefinition, RegistryError> {
        self.definitions
            .get(module_type)
            .ok_or_else(|| RegistryError::UnknownModule(module_type.to_string()))
    }

    pub fn contains(&self, module_type: &str) -> bool {
        self.definitions.contains_key(module_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

static BUILTIN: Lazy<ModuleRegistry> = Lazy::new(|| {
    let mut registry = ModuleRegistry::new();
    for definition in builtin_definitions() {
        registry.register(definition);
    }
    registry
});

fn builtin_definitions() -> Vec<ModuleDefinition> {
    vec![
        ModuleDefinition::new("directory", "Current working directory")
            .with_prop("format", "[$path]($style)[$read_only]($read_only_style) ")
            .with_prop("style", "cyan bold")
            .with_prop("read_only", "🔒")
            .with_prop("read_only_style", "red")
            .with_prop("truncation_length", 3)
            .with_prop("truncation_symbol", "…/")
            .with_variables(["$path", "$read_only"]),
        ModuleDefinition::new("git_branch", "Active git branch")
            .with_prop("format", "on [$symbol$branch]($style) ")
            .with_prop("symbol", "\u{e0a0} ")
            .with_prop("style", "purple bold")
            .with_variables(["$symbol", "$branch"]),
        ModuleDefinition::new("git_status", "Git status symbols")
            .with_prop("format", "([$all_status$ahead_behind]($style) )")
            .with_prop("style", "red bold")
            .with_prop("conflicted", "🏳")
            .with_prop("ahead", "⇡")
            .with_prop("behind", "⇣")
            .with_prop("diverged", "⇕")
            .with_prop("untracked", "?")
            .with_prop("stashed", "$")
            .with_prop("modified", "!")
            .with_prop("staged", "+")
            .with_prop("renamed", "»")
            .with_prop("deleted", "✘")
            .with_variables([
                "$all_status",
                "$ahead_behind",
                "$conflicted",
                "$ahead",
                "$behind",
            ]),
        ModuleDefinition::new("nodejs", "Node.js version")
            .with_prop("format", "via [$symbol($version)]($style) ")
            .with_prop("symbol", "\u{e718} ")
            .with_prop("style", "green bold")
            .with_variables(["$symbol", "$version"]),
        ModuleDefinition::new("rust", "Rust version")
            .with_prop("format", "via [$symbol($version)]($style) ")
            .with_prop("symbol", "\u{e7a8} ")
            .with_prop("style", "red bold")
            .with_variables(["$symbol", "$version"]),
        ModuleDefinition::new("python", "Python version")
            .with_prop(
                "format",
                "via [$symbol$pyenv_prefix($version)(\\($virtualenv\\))]($style) ",
            )
            .with_prop("symbol", "🐍 ")
            .with_prop("style", "yellow bold")
            .with_variables(["$symbol", "$version", "$virtualenv", "$pyenv_prefix"]),
        ModuleDefinition::new("docker_context", "Docker context")
            .with_prop("format", "via [$symbol$context]($style) ")
            .with_prop("symbol", "\u{f308} ")
            .with_prop("style", "blue bold")
            .with_variables(["$symbol", "$context"]),
        ModuleDefinition::new("aws", "AWS profile")
            .with_prop("format", "on [$symbol($profile )(\\($region\\) )]($style)")
            .with_prop("symbol", "☁️  ")
            .with_prop("style", "orange bold")
            .with_variables(["$symbol", "$profile", "$region"]),
        ModuleDefinition::new("cmd_duration", "Command duration")
            .with_prop("format", "took [$duration]($style) ")
            .with_prop("style", "yellow bold")
            .with_variables(["$duration"]),
        ModuleDefinition::new(LINE_BREAK_MODULE, "Inserts a line break"),
        ModuleDefinition::new("character", "The prompt character (usually at the end)")
            .with_prop("format", "$symbol ")
            .with_prop("success_symbol", "[❯](green bold)")
            .with_prop("error_symbol", "[❯](red bold)")
            .with_prop("vicmd_symbol", "[❮](green bold)")
            .with_variables(["$symbol"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contents() {
        let registry = ModuleRegistry::builtin();
        assert_eq!(registry.len(), 11);
        for name in [
            "directory",
            "git_branch",
            "git_status",
            "nodejs",
            "rust",
            "python",
            "docker_context",
            "aws",
            "cmd_duration",
            "line_break",
            "character",
        ] {
            assert!(registry.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_builtin_order() {
        let registry = ModuleRegistry::builtin();
        let names: Vec<&str> = registry.iter().map(ModuleDefinition::name).collect();
        assert_eq!(names.first(), Some(&"directory"));
        assert_eq!(names.last(), Some(&"character"));
    }

    #[test]
    fn test_default_format_and_style() {
        let registry = ModuleRegistry::builtin();
        let def = registry.get("cmd_duration").unwrap();
        assert_eq!(def.default_format(), Some("took [$duration]($style) "));
        assert_eq!(def.default_style(), Some("yellow bold"));
        assert_eq!(registry.get("line_break").unwrap().default_format(), None);
    }

    #[test]
    fn test_numeric_default() {
        let registry = ModuleRegistry::builtin();
        let def = registry.get("directory").unwrap();
        assert_eq!(
            def.default_props().get("truncation_length"),
            Some(&PropertyValue::Number(3.0))
        );
    }

    #[test]
    fn test_unknown_module_is_error() {
        let registry = ModuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(
            registry.get("directory"),
            Err(RegistryError::UnknownModule("directory".to_string()))
        );
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ModuleRegistry::builtin();
        let custom = ModuleDefinition::new("rust", "Custom rust").with_prop("style", "bold");
        let previous = registry.register(custom).unwrap();
        assert_eq!(previous.description(), "Rust version");
        assert_eq!(registry.get("rust").unwrap().description(), "Custom rust");
        assert_eq!(registry.len(), 11);
    }

    #[test]
    fn test_register_new_module() {
        let mut registry = ModuleRegistry::new();
        assert!(registry
            .register(ModuleDefinition::new("time", "Clock").with_variables(["$time"]))
            .is_none());
        assert!(registry.contains("time"));
        assert_eq!(registry.get("time").unwrap().variables(), ["$time"]);
    }
}
