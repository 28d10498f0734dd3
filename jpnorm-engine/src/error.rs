//! Error types for normalization

/// Why UTF-8 decoding stopped before the end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingErrorKind {
    /// A lead byte announced more bytes than the input has left.
    Truncated,
    /// Bad lead byte, bad continuation byte, overlong form or encoded surrogate.
    Invalid,
}

impl std::fmt::Display for EncodingErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Truncated => f.write_str("truncated multi-byte sequence"),
            Self::Invalid => f.write_str("invalid byte sequence"),
        }
    }
}

/// Errors that can occur during normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("invalid UTF-8 at byte {offset}: {kind}")]
    InvalidEncoding {
        offset: usize,
        kind: EncodingErrorKind,
    },

    #[error("input is {len} bytes, limit is {max}")]
    InputTooLarge { len: usize, max: usize },

    #[error("malformed sequence at character {position}: nothing to merge with")]
    MalformedSequence { position: usize },
}

/// Errors returned by [`crate::utf8::encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("codepoint U+{0:X} is above U+10FFFF")]
    OutOfRange(u32),

    #[error("codepoint U+{0:X} is a surrogate")]
    Surrogate(u32),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
