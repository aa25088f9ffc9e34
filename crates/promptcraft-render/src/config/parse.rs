use std::collections::BTreeMap;

use toml::{Table, Value};

use super::{GlobalConfig, ParsedConfig};
use crate::error::ConfigError;
use crate::format::cursor::{is_identifier_char, Cursor};
use crate::module::{
    ModuleInstance, ModuleList, Properties, PropertyValue, DISABLED_KEY, FORMAT_KEY,
    LINE_BREAK_MODULE,
};
use crate::registry::{ModuleDefinition, ModuleRegistry};

/// Reads configuration text back into modules and global settings.
///
/// With a non-empty top-level `format` string the module order follows its
/// `$module` references; text between references becomes free-text modules.
/// Without one (an empty `format` counts as none), every top-level key naming
/// a registered module becomes a module, in document order. That fallback
/// cannot recover free text.
///
/// Malformed TOML is an error; the caller should keep its previous state.
pub fn parse(text: &str, registry: &ModuleRegistry) -> Result<ParsedConfig, ConfigError> {
    let table: Table = toml::from_str(text).map_err(|err| {
        let err = ConfigError::from(err);
        tracing::warn!(error = %err, "rejected configuration text");
        err
    })?;

    let modules = match table.get(FORMAT_KEY) {
        Some(Value::String(format)) if !format.is_empty() => {
            modules_from_format(format, &table, registry)
        }
        Some(Value::String(_)) => modules_from_keys(&table, registry),
        Some(other) => {
            tracing::debug!(kind = other.type_str(), "ignoring non-string format");
            modules_from_keys(&table, registry)
        }
        None => modules_from_keys(&table, registry),
    };

    Ok(ParsedConfig {
        modules,
        globals: read_globals(&table),
    })
}

fn modules_from_format(format: &str, table: &Table, registry: &ModuleRegistry) -> ModuleList {
    let mut modules = ModuleList::new();
    let mut literal = String::new();
    let mut cursor = Cursor::new(format);

    while let Some(c) = cursor.bump() {
        if c != '$' {
            literal.push(c);
            continue;
        }
        let name = cursor.eat_identifier();
        if name.is_empty() {
            literal.push('$');
            continue;
        }

        let module = if name == LINE_BREAK_MODULE {
            Some(ModuleInstance::line_break())
        } else {
            registry
                .get(name)
                .ok()
                .map(|definition| module_from_section(definition, table))
        };

        match module {
            Some(module) => {
                flush_text(&mut literal, &mut modules);
                modules.push(module);
                skip_boundary_escape(&mut cursor);
            }
            None => {
                tracing::debug!(name, "unknown module reference kept as text");
                literal.push('$');
                literal.push_str(name);
            }
        }
    }

    flush_text(&mut literal, &mut modules);
    modules
}

/// Drops the `\\` that separates a reference from following text starting
/// with an identifier character or another `\\`.
fn skip_boundary_escape(cursor: &mut Cursor<'_>) {
    let mut rest = cursor.rest().chars();
    let separated = rest.next() == Some('\\')
        && rest.next().is_some_and(|c| is_identifier_char(c) || c == '\\');
    if separated {
        cursor.bump();
    }
}

fn modules_from_keys(table: &Table, registry: &ModuleRegistry) -> ModuleList {
    table
        .keys()
        .filter_map(|key| {
            if key == LINE_BREAK_MODULE {
                Some(ModuleInstance::line_break())
            } else {
                let definition = registry.get(key).ok()?;
                Some(module_from_section(definition, table))
            }
        })
        .collect()
}

fn flush_text(literal: &mut String, modules: &mut ModuleList) {
    if !literal.is_empty() {
        modules.push(ModuleInstance::text(std::mem::take(literal)));
    }
}

/// Builds an instance from the registry defaults and the module's section.
fn module_from_section(definition: &ModuleDefinition, table: &Table) -> ModuleInstance {
    let mut properties: Properties = definition.default_props().clone();
    let mut disabled = false;

    if let Some(Value::Table(section)) = table.get(definition.name()) {
        for (key, value) in section {
            if key == DISABLED_KEY {
                disabled = value.as_bool() == Some(true);
                continue;
            }
            match property_value(value) {
                Some(value) => {
                    properties.insert(key.clone(), value);
                }
                None => tracing::debug!(
                    module = definition.name(),
                    key = %key,
                    kind = value.type_str(),
                    "skipped unsupported property value"
                ),
            }
        }
    }

    ModuleInstance::new(definition.name(), properties).with_disabled(disabled)
}

fn property_value(value: &Value) -> Option<PropertyValue> {
    match value {
        Value::String(s) => Some(PropertyValue::String(s.clone())),
        Value::Integer(i) => Some(PropertyValue::Number(*i as f64)),
        Value::Float(f) => Some(PropertyValue::Number(*f)),
        Value::Boolean(b) => Some(PropertyValue::Boolean(*b)),
        Value::Table(table) => string_map(table).map(PropertyValue::StringMap),
        _ => None,
    }
}

/// Reads a table whose values are all strings.
fn string_map(table: &Table) -> Option<BTreeMap<String, String>> {
    table
        .iter()
        .map(|(key, value)| Some((key.clone(), value.as_str()?.to_string())))
        .collect()
}

fn read_globals(table: &Table) -> GlobalConfig {
    let string = |key: &str| table.get(key).and_then(Value::as_str).map(str::to_string);
    let unsigned = |key: &str| {
        table
            .get(key)
            .and_then(Value::as_integer)
            .and_then(|n| u64::try_from(n).ok())
    };

    let palettes = match table.get("palettes") {
        Some(Value::Table(palettes)) => palettes
            .iter()
            .filter_map(|(name, value)| {
                let colors = value.as_table().and_then(string_map);
                if colors.is_none() {
                    tracing::debug!(palette = %name, "skipped malformed palette");
                }
                Some((name.clone(), colors?))
            })
            .collect(),
        _ => BTreeMap::new(),
    };

    GlobalConfig {
        add_newline: table.get("add_newline").and_then(Value::as_bool),
        command_timeout: unsigned("command_timeout"),
        scan_timeout: unsigned("scan_timeout"),
        right_format: string("right_format"),
        continuation_prompt: string("continuation_prompt"),
        palette: string("palette"),
        palettes,
    }
}
