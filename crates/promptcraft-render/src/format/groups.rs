//! Optional groups: `(...)` sections rendered only when they have content.
//!
//! A group is kept when it references no variables at all, or when at least
//! one variable it references is bound to a non-empty value. Kept groups lose
//! their parentheses; dropped groups vanish entirely. The decision reads the
//! raw group text and the bindings, never the substituted output.
//!
//! A `(` directly after an unescaped `]` is the style delimiter of a
//! `[content](style)` block and is left alone. Escapes are copied through
//! untouched so the structural pass can still see them.

use super::cursor::Cursor;
use super::Variables;

/// What an open `(` turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paren {
    Group,
    Style,
}

/// One open parenthesis and the resolved text since it.
#[derive(Debug)]
struct Frame {
    paren: Paren,
    text: String,
    has_refs: bool,
    any_bound: bool,
}

impl Frame {
    fn new(paren: Paren) -> Self {
        Self {
            paren,
            text: String::new(),
            has_refs: false,
            any_bound: false,
        }
    }

    fn is_visible(&self) -> bool {
        !self.has_refs || self.any_bound
    }
}

/// Resolves every optional group in `src`, innermost groups included.
///
/// Single pass over an explicit stack of open parentheses, so nesting depth
/// costs heap, not call stack. A `(` left open at the end is literal.
pub(crate) fn resolve_groups(src: &str, vars: &Variables) -> String {
    let mut root = String::with_capacity(src.len());
    let mut open: Vec<Frame> = Vec::new();
    let mut cursor = Cursor::new(src);
    let mut after_bracket = false;

    while let Some(c) = cursor.bump() {
        match c {
            '\\' => {
                let out = current(&mut open, &mut root);
                out.push('\\');
                if let Some(escaped) = cursor.bump() {
                    out.push(escaped);
                }
            }
            '$' => {
                let name = cursor.eat_identifier();
                if let (Some(frame), false) = (open.last_mut(), name.is_empty()) {
                    frame.has_refs = true;
                    frame.any_bound |= vars.is_bound(name);
                }
                let out = current(&mut open, &mut root);
                out.push('$');
                out.push_str(name);
            }
            '(' => open.push(Frame::new(if after_bracket {
                Paren::Style
            } else {
                Paren::Group
            })),
            ')' => match open.pop() {
                Some(frame) => close(frame, &mut open, &mut root),
                None => root.push(')'),
            },
            _ => current(&mut open, &mut root).push(c),
        }
        after_bracket = c == ']';
    }

    // Unclosed parentheses are literal; their contents stay resolved.
    while let Some(frame) = open.pop() {
        let out = absorb(&frame, &mut open, &mut root);
        out.push('(');
        out.push_str(&frame.text);
    }

    root
}

fn current<'a>(open: &'a mut [Frame], root: &'a mut String) -> &'a mut String {
    match open.last_mut() {
        Some(frame) => &mut frame.text,
        None => root,
    }
}

/// Hands the child's reference state to its parent, whose raw content
/// includes the child, and returns the parent's output.
fn absorb<'a>(child: &Frame, open: &'a mut [Frame], root: &'a mut String) -> &'a mut String {
    match open.last_mut() {
        Some(parent) => {
            parent.has_refs |= child.has_refs;
            parent.any_bound |= child.any_bound;
            &mut parent.text
        }
        None => root,
    }
}

fn close(frame: Frame, open: &mut [Frame], root: &mut String) {
    let out = absorb(&frame, open, root);
    match frame.paren {
        Paren::Style => {
            out.push('(');
            out.push_str(&frame.text);
            out.push(')');
        }
        Paren::Group if frame.is_visible() => out.push_str(&frame.text),
        Paren::Group => tracing::debug!(group = %frame.text, "dropped optional group"),
    }
}
