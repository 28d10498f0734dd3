//! Character classification used by the normalization pass.

use crate::tables::{HYPHENS, LONG_VOWEL_MARKS, SPACES, TILDES};

/// Unicode blocks treated as "wide" script for space collapsing.
const CJK_RANGES: [std::ops::Range<u32>; 5] = [
    0x4E00..0xA000, // CJK unified ideographs
    0x3040..0x30A0, // Hiragana
    0x30A0..0x3100, // Katakana
    0x3001..0x3040, // CJK symbols and punctuation
    0xFF00..0xFFF4, // Half-width and full-width forms
];

/// Which rewrite rule a character falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII space or ideographic space
    Space,
    /// One of the dash/hyphen variants
    Hyphen,
    /// One of the long-vowel mark look-alikes
    LongVowel,
    /// One of the tilde/wave-dash variants
    Tilde,
    /// Everything else: folded, composed or passed through
    Other,
}

/// Classify `c` by the variant sets, in rule precedence order.
pub fn classify(c: char) -> CharClass {
    if SPACES.contains(&c) {
        CharClass::Space
    } else if HYPHENS.contains(&c) {
        CharClass::Hyphen
    } else if LONG_VOWEL_MARKS.contains(&c) {
        CharClass::LongVowel
    } else if TILDES.contains(&c) {
        CharClass::Tilde
    } else {
        CharClass::Other
    }
}

/// Whether `c` is in one of the CJK-adjacent blocks.
///
/// Intentionally coarse: hiragana, katakana, ideographs, CJK punctuation and
/// the whole half/full-width forms block all count.
#[inline]
pub fn is_cjk(c: char) -> bool {
    let cp = c as u32;
    CJK_RANGES.iter().any(|r| r.contains(&cp))
}
