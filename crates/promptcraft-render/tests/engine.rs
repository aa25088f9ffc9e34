//! End-to-end tests for format-string rendering.

use promptcraft_render::format::plain_text;
use promptcraft_render::{
    render, ParsedStyle, Segment, Theme, ThemeColors, Variables, MAX_DEPTH,
};

fn theme() -> &'static Theme {
    Theme::default_theme()
}

#[test]
fn test_optional_group_unbound_is_empty() {
    let segments = render("(on [$branch]($style))", &Variables::new(), "bold", theme());
    assert!(segments.is_empty());
}

#[test]
fn test_optional_group_bound_renders_with_base_style() {
    let vars = Variables::new().with("$branch", "main");
    let segments = render("(on [$branch]($style))", &vars, "bold purple", theme());
    assert_eq!(
        segments,
        vec![
            Segment::plain("on "),
            Segment::styled("main", ParsedStyle::new().bold().fg("#a855f7")),
        ]
    );
}

#[test]
fn test_escaped_brackets() {
    let segments = render("\\[literal\\]", &Variables::new(), "", theme());
    assert_eq!(segments, vec![Segment::plain("[literal]")]);
}

#[test]
fn test_nested_style_precedence() {
    let segments = render("[[x](red)](bold)", &Variables::new(), "", theme());
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].style.bold, Some(true));
    assert_eq!(segments[0].style.foreground.as_deref(), Some("#ef4444"));
}

#[test]
fn test_recursion_cap_terminates() {
    let depth = MAX_DEPTH * 5;
    let template = format!("{}deep{}", "[".repeat(depth), "](italic)".repeat(depth));
    let segments = render(&template, &Variables::new(), "", theme());
    assert_eq!(segments.len(), 1);
    assert!(segments[0].text.contains("deep"));
    assert!(segments[0].text.starts_with('['));
    assert_eq!(segments[0].style.italic, Some(true));
}

#[test]
fn test_deeply_nested_groups_render() {
    let depth = 10_000;
    let template = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let segments = render(&template, &Variables::new(), "", theme());
    assert_eq!(segments, vec![Segment::plain("x")]);
}

#[test]
fn test_rendering_is_pure() {
    let vars = Variables::new().with("duration", "12s");
    let a = render("took [$duration]($style) ", &vars, "yellow bold", theme());
    let b = render("took [$duration]($style) ", &vars, "yellow bold", theme());
    assert_eq!(a, b);
}

#[test]
fn test_powerline_segments_with_palette() {
    let theme = Theme::new("pl", ThemeColors::uniform("#000000"))
        .with_palette([("surface0", "313244"), ("blue", "ffffff")]);
    let vars = Variables::new().with("path", "~/src");
    let segments = render(
        "[\u{e0b6}](surface0)[ $path ](bg:surface0 fg:blue)[\u{e0b4}](fg:surface0)",
        &vars,
        "",
        &theme,
    );

    assert_eq!(plain_text(&segments), "\u{e0b6} ~/src \u{e0b4}");
    let path = &segments[1];
    assert_eq!(path.style.background.as_deref(), Some("#313244"));
    // Named slots win over same-named palette keys.
    assert_eq!(path.style.foreground.as_deref(), Some("#000000"));
}

#[test]
fn test_unknown_colors_pass_through() {
    let segments = render("[x](fg:bright-purple bg:)", &Variables::new(), "", theme());
    assert_eq!(
        segments[0].style,
        ParsedStyle::new().fg("bright-purple").bg("inherit")
    );
}

#[test]
fn test_segments_serialize_for_presentation_layer() {
    let segments = render("a[b](bold)", &Variables::new(), "", theme());
    let yaml = serde_yaml::to_string(&segments).unwrap();
    let back: Vec<Segment> = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, segments);
    assert!(!yaml.contains("foreground"));
}
