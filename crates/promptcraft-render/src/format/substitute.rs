//! Variable substitution: one left-to-right pass.
//!
//! `$style` becomes the base style string and every other `$identifier`
//! becomes its bound value, or nothing when unbound. Inserted values are
//! never rescanned, so a value containing `$name` stays as written. Escapes
//! are copied through for the structural pass.

use super::cursor::Cursor;
use super::Variables;

const STYLE_VARIABLE: &str = "style";

pub(crate) fn substitute(src: &str, vars: &Variables, base_style: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut cursor = Cursor::new(src);

    while let Some(c) = cursor.bump() {
        match c {
            '\\' => {
                out.push('\\');
                if let Some(escaped) = cursor.bump() {
                    out.push(escaped);
                }
            }
            '$' => match cursor.eat_identifier() {
                "" => out.push('$'),
                STYLE_VARIABLE => out.push_str(base_style),
                name => out.push_str(vars.get(name).unwrap_or_default()),
            },
            _ => out.push(c),
        }
    }

    out
}
