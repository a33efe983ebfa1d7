//! Stop-word filter
//!
//! A fixed, process-wide set of words that never take part in counting.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Words excluded from frequency counting
pub const STOP_WORDS: [&str; 6] = ["a", "an", "and", "or", "the", "but"];

// Built once on first lookup, read-only afterwards
static STOP_WORD_SET: Lazy<HashSet<&'static [u8]>> =
    Lazy::new(|| STOP_WORDS.into_iter().map(str::as_bytes).collect());

/// Check whether a token is a stop word.
///
/// Matching is exact and case-sensitive: `"The"` is not a stop word.
pub fn is_stopword(token: &[u8]) -> bool {
    STOP_WORD_SET.contains(token)
}
