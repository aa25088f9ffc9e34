//! Terminal output for rendered segments.
//!
//! Hex colors are mapped to the nearest ANSI-256 entry, ANSI names
//! (`red`, `bright_blue`, ...) to their ANSI colors. Colors a terminal cannot
//! show, such as `inherit` or an unknown passthrough name, are dropped.

use crate::format::Segment;
use crate::preview::Line;

/// Whether escape codes are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Follow the terminal (`console`'s detection, `NO_COLOR`, `CLICOLOR`).
    #[default]
    Auto,
    Always,
    Never,
}

/// Paints segments into one string.
pub fn paint(segments: &[Segment], choice: ColorChoice) -> String {
    segments
        .iter()
        .map(|segment| {
            let mut style = segment.style.to_console_style();
            match choice {
                ColorChoice::Auto => {}
                ColorChoice::Always => style = style.force_styling(true),
                ColorChoice::Never => return segment.text.clone(),
            }
            style.apply_to(&segment.text).to_string()
        })
        .collect()
}

/// Paints prompt lines, joined with newlines.
pub fn paint_lines(lines: &[Line], choice: ColorChoice) -> String {
    lines
        .iter()
        .map(|line| paint(line, choice))
        .collect::<Vec<_>>()
        .join("\n")
}
