//! Module instances and the ordered list the editor works on.
//!
//! A [`ModuleInstance`] is one entry of a prompt: a registry module such as
//! `git_branch`, a free-text module carrying literal format text, or a line
//! break. Property values are a closed set, see [`PropertyValue`].

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::registry::ModuleDefinition;

/// Module type of free-text entries. Their text lives in the `format` property.
pub const TEXT_MODULE: &str = "text";

/// Module type of line breaks.
pub const LINE_BREAK_MODULE: &str = "line_break";

/// Property key holding a module's format string.
pub const FORMAT_KEY: &str = "format";

/// Property key holding a module's base style string.
pub const STYLE_KEY: &str = "style";

/// Property key mirrored into [`ModuleInstance::disabled`].
pub const DISABLED_KEY: &str = "disabled";

/// Ordered module properties.
pub type Properties = IndexMap<String, PropertyValue>;

/// A module property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Boolean(bool),
    Number(f64),
    String(String),
    StringMap(BTreeMap<String, String>),
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            PropertyValue::StringMap(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Number(value as f64)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(f64::from(value))
    }
}

impl From<BTreeMap<String, String>> for PropertyValue {
    fn from(value: BTreeMap<String, String>) -> Self {
        PropertyValue::StringMap(value)
    }
}

/// One entry of a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInstance {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub module_type: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub properties: Properties,
}

impl ModuleInstance {
    /// Creates an enabled instance with a fresh id.
    pub fn new(module_type: impl Into<String>, properties: Properties) -> Self {
        Self {
            id: Uuid::new_v4(),
            module_type: module_type.into(),
            disabled: false,
            properties,
        }
    }

    /// Creates an instance carrying a definition's default properties.
    pub fn from_definition(definition: &ModuleDefinition) -> Self {
        Self::new(definition.name(), definition.default_props().clone())
    }

    /// Creates a free-text instance.
    pub fn text(content: impl Into<String>) -> Self {
        let mut properties = Properties::new();
        properties.insert(FORMAT_KEY.to_string(), PropertyValue::String(content.into()));
        Self::new(TEXT_MODULE, properties)
    }

    pub fn line_break() -> Self {
        Self::new(LINE_BREAK_MODULE, Properties::new())
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn is_text(&self) -> bool {
        self.module_type == TEXT_MODULE
    }

    pub fn is_line_break(&self) -> bool {
        self.module_type == LINE_BREAK_MODULE
    }

    /// Reads a string property.
    pub fn string_property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(PropertyValue::as_str)
    }
}

/// The ordered modules of one prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleList {
    modules: Vec<ModuleInstance>,
}

impl ModuleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an instance of `definition` and returns its id.
    ///
    /// With more than one module in the list the new one goes just before
    /// the last module, which is usually the prompt character. Otherwise it
    /// is appended.
    pub fn add(&mut self, definition: &ModuleDefinition) -> Uuid {
        let instance = ModuleInstance::from_definition(definition);
        let id = instance.id;
        if self.modules.len() > 1 {
            let at = self.modules.len() - 1;
            self.modules.insert(at, instance);
        } else {
            self.modules.push(instance);
        }
        tracing::debug!(module = definition.name(), %id, "added module");
        id
    }

    pub fn push(&mut self, instance: ModuleInstance) {
        self.modules.push(instance);
    }

    /// Removes the module with `id`, returning it.
    pub fn remove(&mut self, id: Uuid) -> Option<ModuleInstance> {
        let index = self.position(id)?;
        Some(self.modules.remove(index))
    }

    /// Swaps the module at `index` with its predecessor. No-op at the top.
    pub fn move_up(&mut self, index: usize) {
        if index > 0 && index < self.modules.len() {
            self.modules.swap(index, index - 1);
        }
    }

    /// Swaps the module at `index` with its successor. No-op at the bottom.
    pub fn move_down(&mut self, index: usize) {
        if index < self.modules.len().saturating_sub(1) {
            self.modules.swap(index, index + 1);
        }
    }

    /// Merges `updates` into the properties of module `id`.
    ///
    /// A boolean `disabled` entry also sets the instance flag and is not
    /// stored as a property. Returns false when no module has that id.
    pub fn update(&mut self, id: Uuid, updates: Properties) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let module = &mut self.modules[index];
        for (key, value) in updates {
            if key == DISABLED_KEY {
                if let PropertyValue::Boolean(disabled) = value {
                    module.disabled = disabled;
                    continue;
                }
            }
            module.properties.insert(key, value);
        }
        true
    }

    pub fn get(&self, id: Uuid) -> Option<&ModuleInstance> {
        self.modules.iter().find(|module| module.id == id)
    }

    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.modules.iter().position(|module| module.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModuleInstance> {
        self.modules.iter()
    }

    pub fn as_slice(&self) -> &[ModuleInstance] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn into_vec(self) -> Vec<ModuleInstance> {
        self.modules
    }
}

impl From<Vec<ModuleInstance>> for ModuleList {
    fn from(modules: Vec<ModuleInstance>) -> Self {
        Self { modules }
    }
}

impl FromIterator<ModuleInstance> for ModuleList {
    fn from_iter<I: IntoIterator<Item = ModuleInstance>>(iter: I) -> Self {
        Self {
            modules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ModuleList {
    type Item = &'a ModuleInstance;
    type IntoIter = std::slice::Iter<'a, ModuleInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.iter()
    }
}
