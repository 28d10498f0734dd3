//! Cross-check the hand-curated width tables against NFKC.
//!
//! Only the half/full-width forms block is compared: entries outside it
//! (`”` → `"`, `¥` → `\`, `゛` → `ﾞ`, ...) are deliberate departures from NFKC.

use jpnorm_engine::tables::{FULLWIDTH_ASCII, FULLWIDTH_DIGITS, HALFWIDTH_KANA};
use unicode_normalization::UnicodeNormalization;

fn nfkc(c: char) -> String {
    c.to_string().nfkc().collect()
}

fn in_width_forms(c: char) -> bool {
    ('\u{FF00}'..='\u{FFEF}').contains(&c)
}

#[test]
fn test_fullwidth_ascii_matches_nfkc() {
    for &(wide, ascii) in FULLWIDTH_ASCII.iter().filter(|(k, _)| in_width_forms(*k)) {
        assert_eq!(nfkc(wide), ascii.to_string(), "mismatch for {wide}");
    }
}

#[test]
fn test_fullwidth_digits_match_nfkc() {
    for &(wide, digit) in FULLWIDTH_DIGITS {
        assert_eq!(nfkc(wide), digit.to_string(), "mismatch for {wide}");
    }
}

#[test]
fn test_halfwidth_kana_matches_nfkc() {
    for &(narrow, wide) in HALFWIDTH_KANA.iter().filter(|(k, _)| in_width_forms(*k)) {
        assert_eq!(nfkc(narrow), wide.to_string(), "mismatch for {narrow}");
    }
}

#[test]
fn test_every_fullwidth_letter_is_covered() {
    let keys: Vec<char> = FULLWIDTH_ASCII.iter().map(|(k, _)| *k).collect();
    for c in ('Ａ'..='Ｚ').chain('ａ'..='ｚ') {
        assert!(keys.contains(&c), "{c} missing from FULLWIDTH_ASCII");
    }
}
