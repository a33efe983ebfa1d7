//! Count flow - Word frequencies for one input file
//!
//! Reads the running text, drops stop words, tallies the rest and writes
//! the report.

use anyhow::Result;
use log::debug;
use std::io::Write;
use std::path::Path;

use crate::core::model::{CountSummary, FreqMap, RunningText};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::stopwords::is_stopword;
use crate::core::tokenizer::read_words;

/// Tally every token that is not a stop word
pub fn count_words(words: &RunningText) -> FreqMap {
    let mut freqs = FreqMap::new();
    for word in words.iter().filter(|w| !is_stopword(w)) {
        *freqs.entry(word.clone()).or_insert(0) += 1;
    }
    freqs
}

/// Totals for one counting pass
pub fn summarize(words: &RunningText, freqs: &FreqMap) -> CountSummary {
    CountSummary {
        total_tokens: words.len(),
        stopwords_skipped: words.iter().filter(|w| is_stopword(w)).count(),
        counted_tokens: freqs.values().sum(),
        distinct_words: freqs.len(),
    }
}

/// Read, count and report a single file
pub fn run_count<W: Write>(path: &Path, config: RenderConfig, writer: W) -> Result<()> {
    let words = read_words(path);
    let freqs = count_words(&words);

    let summary = summarize(&words, &freqs);
    debug_assert!(summary.is_consistent(), "{:?}", summary);
    debug!(
        "{}: {} tokens, {} stop words skipped, {} distinct words",
        path.display(),
        summary.total_tokens,
        summary.stopwords_skipped,
        summary.distinct_words
    );

    let renderer = Renderer::with_config(config);
    renderer.render_to(&freqs, writer)?;
    debug!("rendered {} entries as {:?}", freqs.len(), config.format);

    Ok(())
}
