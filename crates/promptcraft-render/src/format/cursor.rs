//! Character cursor shared by the format-string passes.
//!
//! All positions are byte offsets into the source string. The syntax
//! characters (`\`, `$`, `[`, `]`, `(`, `)`) are ASCII, so every offset the
//! cursor hands out lies on a char boundary.

/// Forward-only cursor over a string slice.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Current byte offset.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Jumps to `pos`, which must be a char boundary at or after the
    /// current position.
    pub(crate) fn seek(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos && self.src.is_char_boundary(pos));
        self.pos = pos;
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next character.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes a run of identifier characters (`[A-Za-z0-9_]`) and returns
    /// it. The result is empty when the cursor is not on one.
    pub(crate) fn eat_identifier(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest
            .find(|c: char| !is_identifier_char(c))
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }
}

pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Finds the `close` that balances an `open` already consumed just before
/// `start`. Nested pairs are counted and `\`-escaped characters skipped.
pub(crate) fn find_matching(src: &str, start: usize, open: char, close: char) -> Option<usize> {
    let mut depth = 1usize;
    let mut chars = src[start..].char_indices();
    while let Some((offset, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(start + offset);
            }
        }
    }
    None
}

/// Finds the first unescaped `target` at or after `start`.
pub(crate) fn find_unescaped(src: &str, start: usize, target: char) -> Option<usize> {
    let mut chars = src[start..].char_indices();
    while let Some((offset, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == target {
            return Some(start + offset);
        }
    }
    None
}
