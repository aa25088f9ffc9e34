//! Format-string engine.
//!
//! A format string mixes literal text with a few constructs:
//!
//! | Syntax              | Meaning                                          |
//! |---------------------|--------------------------------------------------|
//! | `$name`             | variable, replaced by its binding (or nothing)   |
//! | `$style`            | the module's base style string                   |
//! | `(...)`             | optional group, dropped when its variables are empty |
//! | `[content](style)`  | style block, nests                               |
//! | `\X`                | literal `X` (for `\[`, `\]`, `\(`, `\)`, `\$`)   |
//!
//! [`render`] runs three passes in a fixed order:
//!
//! 1. optional groups are resolved against the bindings
//! 2. variables are substituted in a single non-recursive pass
//! 3. the result is parsed into [`Segment`]s, each carrying a
//!    [`ParsedStyle`]
//!
//! Inner style blocks override their enclosing block field by field. Block
//! nesting deeper than [`MAX_DEPTH`] is returned as literal text.
//!
//! Rendering never fails: unbalanced brackets and parentheses are literal.
//!
//! # Example
//!
//! ```rust
//! use promptcraft_render::{render, Theme, Variables};
//!
//! let theme = Theme::default_theme();
//! let template = "(on [$branch]($style))";
//!
//! assert!(render(template, &Variables::new(), "purple bold", theme).is_empty());
//!
//! let vars = Variables::new().with("branch", "main");
//! let segments = render(template, &vars, "purple bold", theme);
//! assert_eq!(segments[0].text, "on ");
//! assert_eq!(segments[1].text, "main");
//! assert_eq!(segments[1].style.bold, Some(true));
//! ```
//!
//! ## See Also
//!
//! - [`crate::style`]: how style strings and colors are resolved
//! - [`crate::preview`]: renders a whole module list

mod blocks;
pub(crate) mod cursor;
mod groups;
mod substitute;
mod variables;

use serde::{Deserialize, Serialize};

use crate::style::ParsedStyle;
use crate::theme::Theme;

pub use variables::Variables;

/// Deepest style-block nesting that is still parsed.
pub const MAX_DEPTH: usize = 10;

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    #[serde(default, skip_serializing_if = "ParsedStyle::is_empty")]
    pub style: ParsedStyle,
}

impl Segment {
    /// Creates an unstyled segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: ParsedStyle::default(),
        }
    }

    /// Creates a styled segment.
    pub fn styled(text: impl Into<String>, style: ParsedStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Renders a format string into styled segments.
pub fn render(
    template: &str,
    variables: &Variables,
    base_style: &str,
    theme: &Theme,
) -> Vec<Segment> {
    if template.is_empty() {
        return Vec::new();
    }

    let resolved = groups::resolve_groups(template, variables);
    let substituted = substitute::substitute(&resolved, variables, base_style);
    blocks::parse_blocks(&substituted, theme, 0)
}

/// Concatenates segment text, dropping styles.
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(|segment| segment.text.as_str()).collect()
}
