//! Structural pass: splits substituted text into styled segments.

use super::cursor::{find_matching, find_unescaped, Cursor};
use super::{Segment, MAX_DEPTH};
use crate::style::parse_style_string;
use crate::theme::Theme;

/// Byte ranges of one `[content](style)` block, relative to the source.
struct StyleBlock {
    content: (usize, usize),
    style: (usize, usize),
    end: usize,
}

/// Matches a style block whose `[` sits just before `start`.
fn match_style_block(src: &str, start: usize) -> Option<StyleBlock> {
    let close = find_matching(src, start, '[', ']')?;
    let style_start = close + 1;
    if !src[style_start..].starts_with('(') {
        return None;
    }
    let style_end = find_unescaped(src, style_start + 1, ')')?;
    Some(StyleBlock {
        content: (start, close),
        style: (style_start + 1, style_end),
        end: style_end + 1,
    })
}

pub(crate) fn parse_blocks(src: &str, theme: &Theme, depth: usize) -> Vec<Segment> {
    if depth > MAX_DEPTH {
        tracing::debug!(depth, "style block nesting cap reached");
        return if src.is_empty() {
            Vec::new()
        } else {
            vec![Segment::plain(src)]
        };
    }

    let mut segments = Vec::new();
    let mut buffer = String::new();
    let mut cursor = Cursor::new(src);

    while let Some(c) = cursor.bump() {
        match c {
            '\\' => buffer.push(cursor.bump().unwrap_or('\\')),
            '[' => match match_style_block(src, cursor.pos()) {
                Some(block) => {
                    flush(&mut buffer, &mut segments);
                    let style = parse_style_string(&src[block.style.0..block.style.1], theme);
                    let content = &src[block.content.0..block.content.1];
                    segments.extend(
                        parse_blocks(content, theme, depth + 1)
                            .into_iter()
                            .map(|inner| Segment {
                                style: style.merge(&inner.style),
                                text: inner.text,
                            }),
                    );
                    cursor.seek(block.end);
                }
                None => buffer.push('['),
            },
            _ => buffer.push(c),
        }
    }

    flush(&mut buffer, &mut segments);
    segments
}

fn flush(buffer: &mut String, segments: &mut Vec<Segment>) {
    if !buffer.is_empty() {
        segments.push(Segment::plain(std::mem::take(buffer)));
    }
}
