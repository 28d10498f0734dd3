pub mod charset;
pub mod classify;
pub mod error;
pub mod normalizer;
pub mod options;
pub mod repeat;
pub mod tables;
pub mod utf8;

pub use charset::{
    digit_and_parenthesized_ideograph_characters, digit_characters, unicode_punctuation_set,
};
pub use classify::{CharClass, classify, is_cjk};
pub use error::{EncodeError, EncodingErrorKind, NormalizeError};
pub use normalizer::{normalize, normalize_for_dedup};
pub use options::{DedupOptions, NormalizeOptions, TildeMode};
pub use repeat::shorten_repeat;
