//! UTF-8 decoding and encoding at the byte boundary of the normalizer.
//!
//! Decoding never fails outright: it stops at the first malformed or
//! truncated sequence and hands back the valid prefix together with the
//! reason it stopped. The caller decides whether that is fatal.

use crate::error::{EncodeError, EncodingErrorKind, NormalizeError};

/// Result of decoding a byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<'a> {
    /// Longest valid UTF-8 prefix of the input
    pub text: &'a str,
    /// Why decoding stopped early, if it did
    pub error: Option<NormalizeError>,
}

impl<'a> Decoded<'a> {
    /// Whether the whole input decoded cleanly
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// The decoded scalar values, in order
    pub fn chars(&self) -> std::str::Chars<'a> {
        self.text.chars()
    }
}

/// Decode `bytes`, stopping at the first bad byte.
pub fn decode(bytes: &[u8]) -> Decoded<'_> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Decoded { text, error: None },
        Err(e) => {
            let offset = e.valid_up_to();
            // `error_len() == None` means the input ended mid-sequence.
            let kind = match e.error_len() {
                None => EncodingErrorKind::Truncated,
                Some(_) => EncodingErrorKind::Invalid,
            };
            Decoded {
                text: std::str::from_utf8(&bytes[..offset]).unwrap_or_default(),
                error: Some(NormalizeError::InvalidEncoding { offset, kind }),
            }
        }
    }
}

/// Append the UTF-8 encoding of `value` to `out`, returning the byte length (1-4).
pub fn encode(value: u32, out: &mut Vec<u8>) -> Result<usize, EncodeError> {
    let c = match char::from_u32(value) {
        Some(c) => c,
        None if (0xD800..=0xDFFF).contains(&value) => return Err(EncodeError::Surrogate(value)),
        None => return Err(EncodeError::OutOfRange(value)),
    };
    let mut buf = [0u8; 4];
    let encoded = c.encode_utf8(&mut buf);
    out.extend_from_slice(encoded.as_bytes());
    Ok(encoded.len())
}
