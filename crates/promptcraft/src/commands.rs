//! Subcommand implementations.
//!
//! Each command returns the text to print. File access happens here and
//! nowhere else; the `*_text` helpers take already-read input so they can
//! be tested without touching the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use promptcraft_render::ansi::{paint_lines, ColorChoice};
use promptcraft_render::config::{self, palette_fragment, GlobalConfig};
use promptcraft_render::preview::{render_prompt, sample_bindings, Bindings};
use promptcraft_render::theme::builtin_themes;
use promptcraft_render::{import_base16_or_24, ModuleRegistry, Theme};

/// Where the preview theme comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    Default,
    Builtin(String),
    File(PathBuf),
}

impl ThemeSource {
    pub fn from_args(name: Option<String>, file: Option<PathBuf>) -> Self {
        match (name, file) {
            (_, Some(path)) => ThemeSource::File(path),
            (Some(name), None) => ThemeSource::Builtin(name),
            (None, None) => ThemeSource::Default,
        }
    }

    fn load(&self) -> Result<Theme> {
        match self {
            ThemeSource::Default => Ok(Theme::default_theme().clone()),
            ThemeSource::Builtin(name) => find_builtin_theme(name),
            ThemeSource::File(path) => {
                let yaml = read(path)?;
                import_base16_or_24(&yaml)
                    .with_context(|| format!("cannot import theme {}", path.display()))
            }
        }
    }
}

pub fn preview(
    config_path: &Path,
    theme: &ThemeSource,
    overrides: &[String],
    color: ColorChoice,
) -> Result<String> {
    let text = read(config_path)?;
    let theme = theme.load()?;
    tracing::debug!(theme = theme.name(), "preview theme");
    preview_text(&text, theme, overrides, color)
        .with_context(|| format!("cannot preview {}", config_path.display()))
}

pub fn normalize(config_path: &Path) -> Result<String> {
    let text = read(config_path)?;
    normalize_text(&text).with_context(|| format!("cannot normalize {}", config_path.display()))
}

pub fn palette(theme_path: &Path) -> Result<String> {
    let yaml = read(theme_path)?;
    palette_text(&yaml).with_context(|| format!("cannot import theme {}", theme_path.display()))
}

pub fn list() -> String {
    let mut out = String::from("Themes:\n");
    for theme in builtin_themes() {
        out.push_str(&format!("  {}\n", theme.name()));
    }
    out.push_str("\nModules:\n");
    for def in ModuleRegistry::builtin().iter() {
        out.push_str(&format!("  {:<16} {}\n", def.name(), def.description()));
    }
    out
}

fn preview_text(
    text: &str,
    theme: Theme,
    overrides: &[String],
    color: ColorChoice,
) -> Result<String> {
    let registry = ModuleRegistry::builtin();
    let parsed = config::parse(text, &registry)?;
    let theme = with_config_palette(theme, &parsed.globals);

    let mut bindings = sample_bindings();
    for raw in overrides {
        apply_override(&mut bindings, raw)?;
    }

    let lines = render_prompt(parsed.modules.as_slice(), &registry, &theme, &bindings);
    Ok(paint_lines(&lines, color))
}

fn normalize_text(text: &str) -> Result<String> {
    let parsed = config::parse(text, &ModuleRegistry::builtin())?;
    Ok(config::generate(parsed.modules.as_slice(), &parsed.globals))
}

fn palette_text(yaml: &str) -> Result<String> {
    let theme = import_base16_or_24(yaml)?;
    let mut globals = GlobalConfig::default();
    if !globals.embed_theme_palette(&theme) {
        bail!("theme {:?} has no palette", theme.name());
    }
    Ok(palette_fragment(&globals))
}

/// Lets a configuration's active palette feed color names when the chosen
/// theme brings no palette of its own.
fn with_config_palette(theme: Theme, globals: &GlobalConfig) -> Theme {
    if theme.palette().is_some() {
        return theme;
    }
    let active = globals
        .palette
        .as_deref()
        .and_then(|name| globals.palettes.get(name));
    match active {
        Some(colors) => theme.with_palette(colors.clone()),
        None => theme,
    }
}

fn find_builtin_theme(name: &str) -> Result<Theme> {
    let themes = builtin_themes();
    if let Some(theme) = themes
        .iter()
        .find(|theme| theme.name().eq_ignore_ascii_case(name))
    {
        return Ok(theme.clone());
    }
    let known: Vec<_> = themes.iter().map(Theme::name).collect();
    bail!("unknown theme {:?} (available: {})", name, known.join(", "))
}

/// Applies one `module.$var=value` override. The `$` is optional.
fn apply_override(bindings: &mut Bindings, raw: &str) -> Result<()> {
    let Some((target, value)) = raw.split_once('=') else {
        bail!("invalid --set {:?}: expected MODULE.$VAR=VALUE", raw);
    };
    let Some((module, variable)) = target.split_once('.') else {
        bail!("invalid --set {:?}: expected MODULE.$VAR=VALUE", raw);
    };
    let variable = variable.trim_start_matches('$');
    if module.is_empty() || variable.is_empty() {
        bail!("invalid --set {:?}: empty module or variable name", raw);
    }
    bindings
        .entry(module.to_string())
        .or_default()
        .insert(variable, value);
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
format = """
$directory$git_branch$line_break$character"""

[directory]
format = "[$path]($style) "
style = "bold cyan"
"#;

    // =========================================================================
    // Overrides
    // =========================================================================

    #[test]
    fn test_apply_override_with_and_without_dollar() {
        let mut bindings = Bindings::new();
        apply_override(&mut bindings, "directory.$path=~/src").unwrap();
        apply_override(&mut bindings, "git_branch.branch=a=b").unwrap();

        assert_eq!(bindings["directory"].get("path"), Some("~/src"));
        assert_eq!(bindings["git_branch"].get("branch"), Some("a=b"));
    }

    #[test]
    fn test_apply_override_rejects_malformed() {
        let mut bindings = Bindings::new();
        assert!(apply_override(&mut bindings, "directory").is_err());
        assert!(apply_override(&mut bindings, "directory=x").is_err());
        assert!(apply_override(&mut bindings, ".$path=x").is_err());
        assert!(apply_override(&mut bindings, "directory.$=x").is_err());
        assert!(bindings.is_empty());
    }

    // =========================================================================
    // Commands on text
    // =========================================================================

    #[test]
    fn test_preview_text_uses_sample_data_and_overrides() {
        let output = preview_text(
            CONFIG,
            Theme::default_theme().clone(),
            &["directory.$path=/tmp/x".to_string()],
            ColorChoice::Never,
        )
        .unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("/tmp/x "), "{}", output);
        assert!(lines[0].contains("main"));
        assert_eq!(lines[1], "❯ ");
    }

    #[test]
    fn test_preview_text_rejects_invalid_config() {
        let result = preview_text(
            "format = \"",
            Theme::default_theme().clone(),
            &[],
            ColorChoice::Never,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_text_is_stable() {
        let first = normalize_text(CONFIG).unwrap();
        let second = normalize_text(&first).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("# Prompt configuration\n"));
    }

    #[test]
    fn test_palette_text() {
        let yaml = "name: \"Ocean\"\npalette:\n".to_string()
            + &(0..16)
                .map(|i| format!("  base0{:X}: \"{:02x}{:02x}{:02x}\"\n", i, i, i, i))
                .collect::<String>();
        let fragment = palette_text(&yaml).unwrap();
        assert!(fragment.starts_with("palette = 'ocean'\n"));
        assert!(fragment.contains("[palettes.ocean]\n"));
        assert!(fragment.contains("base0F = '#0f0f0f'\n"));
    }

    #[test]
    fn test_config_palette_feeds_default_theme() {
        let mut globals = GlobalConfig::default();
        let mut colors = std::collections::BTreeMap::new();
        colors.insert("rosewater".to_string(), "#f5e0dc".to_string());
        globals.palettes.insert("mocha".to_string(), colors);
        globals.palette = Some("mocha".to_string());

        let theme = with_config_palette(Theme::default_theme().clone(), &globals);
        assert_eq!(
            promptcraft_render::resolve_color("rosewater", &theme),
            "#f5e0dc"
        );
    }

    // =========================================================================
    // Themes and files
    // =========================================================================

    #[test]
    fn test_builtin_theme_lookup_is_case_insensitive() {
        let theme = find_builtin_theme("tokyo night").unwrap();
        assert_eq!(theme.name(), "Tokyo Night");

        let err = find_builtin_theme("Solarized").unwrap_err();
        assert!(err.to_string().contains("Dracula"));
    }

    #[test]
    fn test_commands_read_files() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("prompt.toml");
        fs::write(&config_path, CONFIG).unwrap();

        let normalized = normalize(&config_path).unwrap();
        assert!(normalized.contains("[directory]\n"));

        let missing = temp_dir.path().join("missing.toml");
        let err = normalize(&missing).unwrap_err();
        assert!(format!("{:#}", err).contains("cannot read"));
    }

    #[test]
    fn test_list_mentions_themes_and_modules() {
        let out = list();
        assert!(out.contains("Catppuccin Mocha"));
        assert!(out.contains("git_branch"));
    }
}
