//! Whole-prompt preview.
//!
//! [`render_prompt`] walks a module list the way a shell would draw it:
//! disabled modules are skipped, `line_break` starts a new line, free text
//! is rendered as-is and registry modules render their format string with
//! variables taken from the caller's [`Bindings`].
//!
//! Variable values for a registry module come from, in order:
//!
//! 1. for the prompt character, its `success_symbol` property
//! 2. a non-empty string property with the variable's name (so `$symbol`
//!    reads the `symbol` property)
//! 3. the binding supplied for that module type
//! 4. otherwise empty
//!
//! Configuration wins over supplied data: a configured `symbol` is shown
//! even when the bindings carry one.
//!
//! ```rust
//! use promptcraft_render::preview::{render_prompt, sample_bindings};
//! use promptcraft_render::{format::plain_text, ModuleInstance, ModuleRegistry, Theme};
//!
//! let registry = ModuleRegistry::builtin();
//! let modules = vec![
//!     ModuleInstance::from_definition(registry.get("git_branch").unwrap()),
//!     ModuleInstance::line_break(),
//!     ModuleInstance::from_definition(registry.get("character").unwrap()),
//! ];
//!
//! let lines = render_prompt(&modules, &registry, Theme::default_theme(), &sample_bindings());
//! assert_eq!(lines.len(), 2);
//! assert_eq!(plain_text(&lines[0]), "on \u{e0a0} main ");
//! assert_eq!(plain_text(&lines[1]), "❯ ");
//! ```

use std::collections::BTreeMap;

use crate::format::{render, Segment, Variables};
use crate::module::{ModuleInstance, FORMAT_KEY, STYLE_KEY};
use crate::registry::{ModuleDefinition, ModuleRegistry};
use crate::theme::Theme;

/// Variable bindings per module type.
pub type Bindings = BTreeMap<String, Variables>;

/// One rendered prompt line.
pub type Line = Vec<Segment>;

const CHARACTER_MODULE: &str = "character";
const SUCCESS_SYMBOL_KEY: &str = "success_symbol";
const FALLBACK_SYMBOL: &str = "❯";

/// Renders a module list into prompt lines. There is always at least one
/// line.
pub fn render_prompt(
    modules: &[ModuleInstance],
    registry: &ModuleRegistry,
    theme: &Theme,
    bindings: &Bindings,
) -> Vec<Line> {
    let mut lines = vec![Line::new()];

    for module in modules.iter().filter(|module| !module.disabled) {
        if module.is_line_break() {
            lines.push(Line::new());
            continue;
        }

        let segments = if module.is_text() {
            let text = module.string_property(FORMAT_KEY).unwrap_or_default();
            render(text, &Variables::new(), "", theme)
        } else {
            let Ok(definition) = registry.get(&module.module_type) else {
                tracing::debug!(module = %module.module_type, "skipping unregistered module");
                continue;
            };
            render_module(module, definition, theme, bindings)
        };

        if let Some(line) = lines.last_mut() {
            line.extend(segments);
        }
    }

    lines
}

fn render_module(
    module: &ModuleInstance,
    definition: &ModuleDefinition,
    theme: &Theme,
    bindings: &Bindings,
) -> Vec<Segment> {
    let format = module
        .string_property(FORMAT_KEY)
        .or_else(|| definition.default_format())
        .unwrap_or_default();
    let style = module
        .string_property(STYLE_KEY)
        .or_else(|| definition.default_style())
        .unwrap_or_default();

    render(format, &module_variables(module, definition, bindings), style, theme)
}

/// Resolves the variables one module renders with.
pub fn module_variables(
    module: &ModuleInstance,
    definition: &ModuleDefinition,
    bindings: &Bindings,
) -> Variables {
    let supplied = bindings.get(&module.module_type);
    let mut vars = supplied.cloned().unwrap_or_default();

    for variable in definition.variables() {
        let name = variable.trim_start_matches('$');

        if module.module_type == CHARACTER_MODULE && name == "symbol" {
            let symbol = module
                .string_property(SUCCESS_SYMBOL_KEY)
                .filter(|s| !s.is_empty())
                .or_else(|| {
                    definition
                        .default_props()
                        .get(SUCCESS_SYMBOL_KEY)
                        .and_then(|value| value.as_str())
                })
                .unwrap_or(FALLBACK_SYMBOL);
            vars.insert(name, symbol);
            continue;
        }

        match module.string_property(name).filter(|s| !s.is_empty()) {
            Some(value) => vars.insert(name, value),
            None if vars.get(name).is_some() => {}
            None => vars.insert(name, ""),
        }
    }

    vars
}

/// Plausible values for every built-in module, for previews without a
/// live shell.
pub fn sample_bindings() -> Bindings {
    let sample = |pairs: &[(&str, &str)]| pairs.iter().copied().collect::<Variables>();

    [
        (
            "directory",
            sample(&[("path", "~/projects/promptcraft"), ("read_only", "🔒")]),
        ),
        ("git_branch", sample(&[("symbol", "\u{e0a0} "), ("branch", "main")])),
        (
            "git_status",
            sample(&[("all_status", "!"), ("ahead_behind", "⇡1")]),
        ),
        ("nodejs", sample(&[("symbol", "\u{e718} "), ("version", "v18.16.0")])),
        ("rust", sample(&[("symbol", "\u{e7a8} "), ("version", "1.70.0")])),
        (
            "python",
            sample(&[
                ("symbol", "🐍 "),
                ("version", "3.11.3"),
                ("virtualenv", "venv"),
                ("pyenv_prefix", ""),
            ]),
        ),
        (
            "docker_context",
            sample(&[("symbol", "\u{f308} "), ("context", "default")]),
        ),
        (
            "aws",
            sample(&[
                ("symbol", "☁️  "),
                ("profile", "dev-account"),
                ("region", "us-east-1"),
            ]),
        ),
        ("cmd_duration", sample(&[("duration", "2s")])),
    ]
    .into_iter()
    .map(|(module, vars)| (module.to_string(), vars))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::plain_text;
    use crate::module::Properties;

    fn registry() -> ModuleRegistry {
        ModuleRegistry::builtin()
    }

    fn instance(module_type: &str) -> ModuleInstance {
        ModuleInstance::from_definition(registry().get(module_type).unwrap())
    }

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|line| plain_text(line)).collect()
    }

    #[test]
    fn test_empty_list_one_empty_line() {
        let lines = render_prompt(&[], &registry(), Theme::default_theme(), &Bindings::new());
        assert_eq!(lines, vec![Line::new()]);
    }

    #[test]
    fn test_disabled_modules_skipped() {
        let modules = vec![
            instance("cmd_duration").with_disabled(true),
            ModuleInstance::line_break().with_disabled(true),
            ModuleInstance::text("> "),
        ];
        let lines = render_prompt(
            &modules,
            &registry(),
            Theme::default_theme(),
            &sample_bindings(),
        );
        assert_eq!(text_of(&lines), vec!["> "]);
    }

    #[test]
    fn test_unregistered_module_skipped() {
        let modules = vec![
            ModuleInstance::new("kubernetes", Properties::new()),
            ModuleInstance::text("x"),
        ];
        let lines = render_prompt(&modules, &registry(), Theme::default_theme(), &Bindings::new());
        assert_eq!(text_of(&lines), vec!["x"]);
    }

    #[test]
    fn test_full_prompt() {
        let modules = vec![
            instance("directory"),
            instance("git_branch"),
            instance("python"),
            ModuleInstance::line_break(),
            instance("character"),
        ];
        let lines = render_prompt(
            &modules,
            &registry(),
            Theme::default_theme(),
            &sample_bindings(),
        );
        assert_eq!(
            text_of(&lines),
            vec![
                "~/projects/promptcraft🔒 on \u{e0a0} main via 🐍 3.11.3(venv) ",
                "❯ ",
            ]
        );
    }

    #[test]
    fn test_module_style_applied() {
        let modules = vec![instance("cmd_duration").with_property("style", "bold blue")];
        let lines = render_prompt(
            &modules,
            &registry(),
            Theme::default_theme(),
            &sample_bindings(),
        );
        let duration = &lines[0][1];
        assert_eq!(duration.text, "2s");
        assert_eq!(duration.style.foreground.as_deref(), Some("#3b82f6"));
        assert_eq!(duration.style.bold, Some(true));
    }

    #[test]
    fn test_unbound_optional_groups_vanish() {
        let modules = vec![instance("git_status"), instance("rust")];
        let lines = render_prompt(&modules, &registry(), Theme::default_theme(), &Bindings::new());
        // rust keeps its symbol property, git_status has nothing to show.
        assert_eq!(text_of(&lines), vec!["via \u{e7a8} "]);
    }

    // =========================================================================
    // module_variables tests
    // =========================================================================

    #[test]
    fn test_character_symbol_from_success_symbol() {
        let registry = registry();
        let def = registry.get("character").unwrap();
        let module = ModuleInstance::from_definition(def).with_property("success_symbol", "[λ](red)");
        let mut bindings = Bindings::new();
        bindings.insert("character".into(), Variables::new().with("symbol", "ignored"));

        let vars = module_variables(&module, def, &bindings);
        assert_eq!(vars.get("symbol"), Some("[λ](red)"));
    }

    #[test]
    fn test_character_symbol_falls_back_to_default() {
        let registry = registry();
        let def = registry.get("character").unwrap();
        let module = ModuleInstance::new("character", Properties::new());
        let vars = module_variables(&module, def, &Bindings::new());
        assert_eq!(vars.get("symbol"), Some("[❯](green bold)"));
    }

    #[test]
    fn test_property_beats_binding() {
        let registry = registry();
        let def = registry.get("git_branch").unwrap();
        let module = ModuleInstance::from_definition(def).with_property("symbol", "🌱 ");
        let mut bindings = Bindings::new();
        bindings.insert("git_branch".into(), Variables::new().with("symbol", "*"));

        let vars = module_variables(&module, def, &bindings);
        assert_eq!(vars.get("symbol"), Some("🌱 "));
        assert_eq!(vars.get("branch"), Some(""));
    }

    #[test]
    fn test_binding_used_when_property_empty() {
        let registry = registry();
        let def = registry.get("git_branch").unwrap();
        let module = ModuleInstance::from_definition(def).with_property("symbol", "");
        let mut bindings = Bindings::new();
        bindings.insert("git_branch".into(), Variables::new().with("symbol", "*"));

        let vars = module_variables(&module, def, &bindings);
        assert_eq!(vars.get("symbol"), Some("*"));
    }

    #[test]
    fn test_configured_symbol_shows_in_preview() {
        let modules = vec![instance("git_branch").with_property("symbol", "🌱 ")];
        let lines = render_prompt(
            &modules,
            &registry(),
            Theme::default_theme(),
            &sample_bindings(),
        );
        assert_eq!(text_of(&lines), vec!["on 🌱 main "]);
    }

    #[test]
    fn test_property_fills_unbound_variable() {
        let registry = registry();
        let def = registry.get("directory").unwrap();
        let module = ModuleInstance::from_definition(def);
        let vars = module_variables(&module, def, &Bindings::new());
        assert_eq!(vars.get("read_only"), Some("🔒"));
        assert_eq!(vars.get("path"), Some(""));
    }

    #[test]
    fn test_extra_bindings_pass_through() {
        let registry = registry();
        let def = registry.get("cmd_duration").unwrap();
        let module = ModuleInstance::from_definition(def);
        let mut bindings = Bindings::new();
        bindings.insert("cmd_duration".into(), Variables::new().with("extra", "x"));
        let vars = module_variables(&module, def, &bindings);
        assert_eq!(vars.get("extra"), Some("x"));
    }
}
