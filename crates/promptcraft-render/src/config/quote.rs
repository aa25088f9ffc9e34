//! TOML text helpers for the generator.

/// True for keys TOML accepts unquoted.
fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Characters a literal string may not hold.
fn needs_escaping(c: char, multiline: bool) -> bool {
    match c {
        '\t' => false,
        '\n' => !multiline,
        c => c.is_control(),
    }
}

/// Escapes text for a basic (`"`) string body.
fn escape_basic(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Formats a key, quoting it when it is not bare.
pub(crate) fn key(key: &str) -> String {
    if is_bare_key(key) {
        key.to_string()
    } else {
        format!("\"{}\"", escape_basic(key))
    }
}

/// Formats a single-line string value.
///
/// Literal `'...'` strings keep backslashes readable, which matters for
/// format strings full of `\(` escapes. Text a literal string cannot hold
/// falls back to an escaped basic string.
pub(crate) fn string(s: &str) -> String {
    if s.contains('\'') || s.chars().any(|c| needs_escaping(c, false)) {
        format!("\"{}\"", escape_basic(s))
    } else {
        format!("'{}'", s)
    }
}

/// Formats a multi-line block value. The newline after the opening
/// delimiter is trimmed by TOML readers, so the value reads back unchanged.
pub(crate) fn block(s: &str) -> String {
    if s.contains("'''") || s.ends_with('\'') || s.chars().any(|c| needs_escaping(c, true)) {
        format!("\"\"\"\n{}\"\"\"", escape_basic(s))
    } else {
        format!("'''\n{}'''", s)
    }
}

/// Formats a number, integrally when it has no fraction.
pub(crate) fn number(n: f64) -> String {
    if n.is_nan() {
        "nan".to_string()
    } else if n == f64::INFINITY {
        "inf".to_string()
    } else if n == f64::NEG_INFINITY {
        "-inf".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else if n.fract() == 0.0 {
        format!("{:?}", n)
    } else {
        format!("{}", n)
    }
}
