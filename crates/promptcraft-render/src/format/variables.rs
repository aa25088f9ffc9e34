use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-render variable bindings for one module.
///
/// Names may be given with or without the leading `$`; they are stored
/// without it. Unbound names read as the empty string.
///
/// ```rust
/// use promptcraft_render::Variables;
///
/// let vars: Variables = [("$branch", "main"), ("symbol", "\u{e0a0} ")].into_iter().collect();
/// assert_eq!(vars.get("$branch"), Some("main"));
/// assert_eq!(vars.get("symbol"), Some("\u{e0a0} "));
/// assert!(vars.is_bound("branch"));
/// assert!(!vars.is_bound("version"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables {
    values: BTreeMap<String, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.values.insert(bare(name.as_ref()).to_string(), value.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(bare(name)).map(String::as_str)
    }

    /// True when the name is bound to a non-empty value.
    pub fn is_bound(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates bindings as (`name`, `value`), names without `$`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Variables::new();
        for (name, value) in iter {
            vars.insert(name, value);
        }
        vars
    }
}

fn bare(name: &str) -> &str {
    name.strip_prefix('$').unwrap_or(name)
}
