//! Line tokenizing, word normalization and bucket hashing.

pub mod hash;
pub mod normalize;
pub mod tokenizer;

pub use hash::hash_code;
pub use normalize::{load_token, strip_word};
pub use tokenizer::{LineCursor, Tokens};

/// Longest line accepted, including its trailing newline.
pub const MAX_LINE_LEN: usize = 1047;

/// Longest raw token accepted.
pub const MAX_WORD_LEN: usize = 127;

/// A line keeps yielding tokens while at least this many bytes remain.
pub const MIN_LINE_REMAINDER: usize = 3;

/// Normalized words shorter than this are discarded.
pub const MIN_WORD_LEN: usize = 3;
