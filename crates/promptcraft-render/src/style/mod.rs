//! Style strings and color resolution.
//!
//! [`parse_style_string`] turns `"bold red bg:base00"` into a [`ParsedStyle`],
//! resolving each color token with [`resolve_color`] against a
//! [`Theme`](crate::Theme). Nothing here fails: unknown colors pass through
//! as literal names and empty color tokens become `inherit`.
//!
//! ## See Also
//!
//! - [`crate::format`]: applies parsed styles to `[content](style)` blocks
//! - [`crate::ansi`]: paints parsed styles onto a terminal

mod color;
mod parsed;

pub use color::{resolve_color, rgb_to_ansi256, ColorDef, INHERIT};
pub use parsed::{parse_style_string, ParsedStyle};
