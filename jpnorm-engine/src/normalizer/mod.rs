//! Normalization entry points

mod buffer;
mod pass;

use tracing::debug;

use crate::error::{NormalizeError, Result};
use crate::options::{DedupOptions, NormalizeOptions};
use crate::repeat::shorten_glyphs;
use crate::utf8;
use pass::Rewriter;

/// Normalize UTF-8 `text` according to `options`.
///
/// Runs the single-pass rewrite, then the repeat shortener when
/// `options.repeat > 0`. Empty input yields `Ok("")`.
///
/// # Errors
///
/// - [`NormalizeError::InputTooLarge`] when `text` exceeds `options.max_input_bytes`.
/// - [`NormalizeError::InvalidEncoding`] on malformed UTF-8, only with
///   `options.strict_encoding`; otherwise the valid prefix is normalized.
/// - [`NormalizeError::MalformedSequence`] when a merge has nothing to merge with.
pub fn normalize(text: impl AsRef<[u8]>, options: &NormalizeOptions) -> Result<String> {
    let bytes = text.as_ref();
    if bytes.len() > options.max_input_bytes {
        return Err(NormalizeError::InputTooLarge {
            len: bytes.len(),
            max: options.max_input_bytes,
        });
    }

    let decoded = utf8::decode(bytes);
    if let Some(err) = &decoded.error {
        if options.strict_encoding {
            return Err(err.clone());
        }
        debug!(%err, "normalizing the valid prefix only");
    }

    let mut pass = Rewriter::new(options, decoded.text.len());
    for (position, c) in decoded.chars().enumerate() {
        pass.push(position, c)?;
    }

    let mut glyphs = pass.finish();
    shorten_glyphs(&mut glyphs, options.repeat, options.max_repeat_unit_len);
    Ok(glyphs.into_iter().collect())
}

/// Normalize for near-duplicate detection: spaces and tildes removed,
/// parenthesized ideographs expanded, runs capped at 8 copies of units up
/// to 8 characters.
pub fn normalize_for_dedup(text: impl AsRef<[u8]>, options: &DedupOptions) -> Result<String> {
    if let Some(placeholder) = &options.digit_placeholder {
        debug!(
            placeholder = placeholder.as_str(),
            "digit_placeholder is accepted but not applied"
        );
    }
    normalize(text, &options.normalize_options())
}
