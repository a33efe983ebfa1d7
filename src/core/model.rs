//! Word Frequency Model
//!
//! Shared types passed between the tokenizer, the aggregator and the renderer.

use serde::Serialize;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// One whitespace-delimited word, taken verbatim from the input.
///
/// Kept as raw bytes: input files need not be valid UTF-8.
pub type Token = Vec<u8>;

/// Tokens of one input file in source order, duplicates retained
pub type RunningText = Vec<Token>;

/// Word to occurrence count, iterated in ascending byte order
pub type FreqMap = BTreeMap<Token, usize>;

/// A single report entry for the structured formats
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Collect a frequency map into report entries, keeping key order.
///
/// Words that are not valid UTF-8 are decoded lossily here, and only here.
pub fn to_word_counts(freqs: &FreqMap) -> Vec<WordCount> {
    freqs
        .iter()
        .map(|(word, count)| WordCount::new(String::from_utf8_lossy(word), *count))
        .collect()
}

/// Totals describing a single counting pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountSummary {
    /// Tokens read from the input
    pub total_tokens: usize,
    /// Tokens dropped because they are stop words
    pub stopwords_skipped: usize,
    /// Sum of all counts in the frequency map
    pub counted_tokens: usize,
    /// Number of keys in the frequency map
    pub distinct_words: usize,
}

impl CountSummary {
    /// Every token is either counted or skipped as a stop word
    pub fn is_consistent(&self) -> bool {
        self.counted_tokens + self.stopwords_skipped == self.total_tokens
    }
}

/// Failure to obtain the text of an input file.
///
/// Never reaches the user: the tokenizer degrades it to an empty running text.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
