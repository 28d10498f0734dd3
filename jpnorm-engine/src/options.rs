//! Normalization options

use serde::{Deserialize, Serialize};

/// What to do with tilde and wave-dash variants.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TildeMode {
    /// Drop every tilde variant
    #[default]
    Remove,
    /// Leave tilde variants untouched
    Ignore,
    /// Rewrite to ASCII `~`
    Normalize,
    /// Rewrite to full-width `〜`
    Zenkaku,
}

/// Options for [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Collapse spaces next to CJK text and between space runs
    pub remove_space: bool,
    /// Tilde handling
    pub tilde: TildeMode,
    /// Keep at most this many consecutive copies of a repeated unit (0 = off)
    pub repeat: usize,
    /// Longest unit, in characters, the repeat shortener looks for
    pub max_repeat_unit_len: usize,
    /// Expand `㈱` and friends to `(株)`
    pub parenthesized_ideographs: bool,
    /// Inputs longer than this many bytes are rejected
    pub max_input_bytes: usize,
    /// Fail on invalid UTF-8 instead of normalizing the valid prefix
    pub strict_encoding: bool,
}

impl NormalizeOptions {
    /// Default unit length bound for the repeat shortener.
    pub const DEFAULT_MAX_REPEAT_UNIT_LEN: usize = 8;
    /// Default input ceiling (1 GiB).
    pub const DEFAULT_MAX_INPUT_BYTES: usize = 1 << 30;
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            remove_space: true,
            tilde: TildeMode::Remove,
            repeat: 0,
            max_repeat_unit_len: Self::DEFAULT_MAX_REPEAT_UNIT_LEN,
            parenthesized_ideographs: false,
            max_input_bytes: Self::DEFAULT_MAX_INPUT_BYTES,
            strict_encoding: false,
        }
    }
}

/// Options for [`crate::normalize_for_dedup`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupOptions {
    /// Placeholder meant to replace digits. Accepted but not applied yet:
    /// the substitution rules are undecided.
    pub digit_placeholder: Option<String>,
}

impl DedupOptions {
    /// The fixed option set the dedup wrapper normalizes with.
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            remove_space: true,
            tilde: TildeMode::Remove,
            repeat: 8,
            max_repeat_unit_len: 8,
            parenthesized_ideographs: true,
            ..NormalizeOptions::default()
        }
    }
}
