//! Renderer module
//!
//! Renders a frequency map to different output formats: text, jsonl, json, md

use crate::core::model::{to_word_counts, FreqMap};
use std::io::{self, Write};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `word count` lines
    #[default]
    Text,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for frequency maps
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a frequency map to bytes.
    ///
    /// The text format writes words back byte for byte; the other formats
    /// decode invalid UTF-8 lossily.
    pub fn render(&self, freqs: &FreqMap) -> Vec<u8> {
        match self.config.format {
            OutputFormat::Text => self.render_text(freqs),
            OutputFormat::Jsonl => self.render_jsonl(freqs).into_bytes(),
            OutputFormat::Json => self.render_json(freqs).into_bytes(),
            OutputFormat::Markdown => self.render_markdown(freqs).into_bytes(),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, freqs: &FreqMap, mut writer: W) -> io::Result<()> {
        if self.config.format == OutputFormat::Text {
            // One entry at a time; buffering is up to the writer
            for (word, count) in freqs {
                writer.write_all(word)?;
                writeln!(writer, " {}", count)?;
            }
        } else {
            writer.write_all(&self.render(freqs))?;
        }
        writer.flush()
    }

    /// Render as `word count` lines
    fn render_text(&self, freqs: &FreqMap) -> Vec<u8> {
        let mut output = Vec::new();
        for (word, count) in freqs {
            output.extend_from_slice(word);
            output.extend_from_slice(format!(" {}\n", count).as_bytes());
        }
        output
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, freqs: &FreqMap) -> String {
        to_word_counts(freqs)
            .iter()
            .filter_map(|entry| {
                if self.config.pretty {
                    serde_json::to_string_pretty(entry).ok()
                } else {
                    serde_json::to_string(entry).ok()
                }
            })
            .map(|line| line + "\n")
            .collect()
    }

    /// Render as a single JSON array
    fn render_json(&self, freqs: &FreqMap) -> String {
        let entries = to_word_counts(freqs);
        let json = if self.config.pretty {
            serde_json::to_string_pretty(&entries)
        } else {
            serde_json::to_string(&entries)
        };
        json.unwrap_or_else(|_| "[]".to_string()) + "\n"
    }

    /// Render as a Markdown table
    fn render_markdown(&self, freqs: &FreqMap) -> String {
        let mut output = String::from("| Word | Count |\n|------|-------|\n");
        for entry in to_word_counts(freqs) {
            output.push_str(&format!(
                "| {} | {} |\n",
                escape_md_cell(&entry.word),
                entry.count
            ));
        }
        output
    }
}

/// Escape characters that would break a Markdown table cell
fn escape_md_cell(s: &str) -> String {
    s.replace('\\', "\\\\").replace('|', "\\|")
}
