use std::collections::HashSet;
use std::fmt::Write;

use super::quote;
use super::GlobalConfig;
use crate::format::cursor::is_identifier_char;
use crate::module::{ModuleInstance, PropertyValue, DISABLED_KEY, FORMAT_KEY};

const HEADER: &str = "# Prompt configuration\n# Generated by promptcraft\n";

/// Serializes modules and global settings to configuration text.
///
/// Output order: header comment, global scalars, `format`, `right_format`,
/// `continuation_prompt`, one section per module type, then palettes.
pub fn generate(modules: &[ModuleInstance], config: &GlobalConfig) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    let mut has_globals = false;
    if let Some(add_newline) = config.add_newline {
        let _ = writeln!(out, "add_newline = {}", add_newline);
        has_globals = true;
    }
    if let Some(timeout) = config.command_timeout {
        let _ = writeln!(out, "command_timeout = {}", timeout);
        has_globals = true;
    }
    if let Some(timeout) = config.scan_timeout {
        let _ = writeln!(out, "scan_timeout = {}", timeout);
        has_globals = true;
    }
    if let Some(palette) = config.palette.as_deref().filter(|p| !p.is_empty()) {
        let _ = writeln!(out, "palette = {}", quote::string(palette));
        has_globals = true;
    }
    if has_globals {
        out.push('\n');
    }

    let _ = writeln!(out, "format = {}", quote::block(&master_format(modules)));
    if let Some(right_format) = config.right_format.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "right_format = {}", quote::block(right_format));
    }
    if let Some(prompt) = config.continuation_prompt.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "continuation_prompt = {}", quote::string(prompt));
    }

    let mut emitted = HashSet::new();
    for module in modules {
        if module.is_text() || module.is_line_break() {
            continue;
        }
        if !emitted.insert(module.module_type.as_str()) {
            tracing::debug!(
                module = %module.module_type,
                "repeated module type, section already written"
            );
            continue;
        }
        out.push('\n');
        write_section(&mut out, module);
    }

    write_palettes(&mut out, config);
    out
}

/// Configuration fragment selecting and defining the palettes of `config`.
///
/// Meant to be pasted into an existing configuration, so no header and no
/// `format` line are written.
pub fn palette_fragment(config: &GlobalConfig) -> String {
    let mut out = String::new();
    if let Some(palette) = config.palette.as_deref().filter(|p| !p.is_empty()) {
        let _ = writeln!(out, "palette = {}", quote::string(palette));
    }
    write_palettes(&mut out, config);
    out
}

fn write_palettes(out: &mut String, config: &GlobalConfig) {
    for (name, colors) in &config.palettes {
        let _ = writeln!(out, "\n[palettes.{}]", quote::key(name));
        for (color, value) in colors {
            let _ = writeln!(out, "{} = {}", quote::key(color), quote::string(value));
        }
    }
}

/// Builds the master format string from the module order.
///
/// Free text starting with an identifier character or a `\` right after a
/// `$module` reference gets a separating `\`, so the reference neither
/// swallows the text nor loses its leading backslash on read-back.
fn master_format(modules: &[ModuleInstance]) -> String {
    let mut format = String::new();
    let mut after_reference = false;
    for module in modules {
        if module.is_line_break() {
            format.push_str("$line_break");
            after_reference = true;
        } else if module.is_text() {
            let text = module.string_property(FORMAT_KEY).unwrap_or_default();
            let glued = text.starts_with(|c| is_identifier_char(c) || c == '\\');
            if after_reference && glued {
                format.push('\\');
            }
            format.push_str(text);
            after_reference = false;
        } else {
            format.push('$');
            format.push_str(&module.module_type);
            after_reference = true;
        }
    }
    format
}

fn write_section(out: &mut String, module: &ModuleInstance) {
    let section = quote::key(&module.module_type);
    let _ = writeln!(out, "[{}]", section);
    let _ = writeln!(out, "{} = {}", DISABLED_KEY, module.disabled);

    let mut tables = Vec::new();
    for (key, value) in &module.properties {
        if key == DISABLED_KEY {
            continue;
        }
        let key_text = quote::key(key);
        match value {
            PropertyValue::String(s) => {
                let _ = writeln!(out, "{} = {}", key_text, quote::string(s));
            }
            PropertyValue::Number(n) => {
                let _ = writeln!(out, "{} = {}", key_text, quote::number(*n));
            }
            PropertyValue::Boolean(b) => {
                let _ = writeln!(out, "{} = {}", key_text, b);
            }
            PropertyValue::StringMap(map) => tables.push((key_text, map)),
        }
    }

    // Sub-tables must follow every plain key of the section.
    for (key_text, map) in tables {
        let _ = writeln!(out, "\n[{}.{}]", section, key_text);
        for (entry, value) in map {
            let _ = writeln!(out, "{} = {}", quote::key(entry), quote::string(value));
        }
    }
}
