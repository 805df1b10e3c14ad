//! Mapping from abstract row classes to terminal colors.

use crate::models::row::RowClass;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// The core classifies rows; only this layer knows what a class looks
/// like on a terminal.
pub fn colour_for_class(class: RowClass) -> Option<Colour> {
    match class {
        RowClass::Today => Some(Colour::Green),
        RowClass::Weekend => Some(Colour::Fixed(245)),
        RowClass::Normal => None,
    }
}

pub fn paint_for_class(class: RowClass, s: &str) -> String {
    match colour_for_class(class) {
        Some(c) => c.paint(s).to_string(),
        None => s.to_string(),
    }
}

/// Strip ANSI escapes before measuring display widths.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}
