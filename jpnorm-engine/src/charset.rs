//! Character catalogues exposed for callers' own filtering.
//!
//! None of these are consulted by [`crate::normalize`].

use std::collections::HashSet;

use crate::tables::{FULLWIDTH_DIGITS, PARENTHESIZED_IDEOGRAPHS, UNICODE_PUNCTUATION};

/// Full-width and ASCII digits known to the fold table.
pub fn digit_characters() -> HashSet<String> {
    FULLWIDTH_DIGITS
        .iter()
        .flat_map(|&(wide, ascii)| [wide.to_string(), ascii.to_string()])
        .collect()
}

/// [`digit_characters`] plus every parenthesized ideograph and its expansion.
pub fn digit_and_parenthesized_ideograph_characters() -> HashSet<String> {
    let mut set = digit_characters();
    for &(glyph, expansion) in PARENTHESIZED_IDEOGRAPHS {
        set.insert(glyph.to_string());
        set.insert(expansion.to_string());
    }
    set
}

/// Fixed punctuation catalogue.
pub fn unicode_punctuation_set() -> HashSet<String> {
    UNICODE_PUNCTUATION.iter().map(|s| s.to_string()).collect()
}
