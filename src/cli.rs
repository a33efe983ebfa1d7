//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::core::render::{OutputFormat, RenderConfig};

/// Printed when the input path is missing or more than one is given
pub const USAGE_MESSAGE: &str = "Need a filename!";

/// wordbag - count word frequencies in a text file, skipping stop words.
#[derive(Parser, Debug)]
#[command(name = "wordbag")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordbag reads one text file, splits it on whitespace and counts how often
each word occurs. The stop words a, an, and, or, the, but are skipped.

Words are compared exactly: case and punctuation are kept, so "Run" and "run"
are counted separately. The report lists one word per line in ascending order:

    cat 1
    mat 1

A file that cannot be opened produces an empty report.

Examples:
    wordbag input.txt
    wordbag input.txt > output.txt
    wordbag --format jsonl input.txt
"#
)]
pub struct Cli {
    /// Input text file.
    #[arg(value_name = "FILE", num_args = 0..)]
    pub files: Vec<PathBuf>,

    /// Output format (text/jsonl/json/md).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        value_parser = ["text", "jsonl", "json", "md"],
        long_help = "Select the report format.\n\n\
Supported values:\n\
- text (default): `word count` per line\n\
- jsonl: one {\"word\",\"count\"} object per line\n\
- json: a single JSON array\n\
- md: a Markdown table"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        long_help = "Pretty-print JSON and JSONL output with indentation.\n\n\
Has no effect on text/md formats."
    )]
    pub pretty: bool,

    /// Quiet mode (no diagnostics).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (more diagnostics on stderr).
    #[arg(
        short,
        long,
        long_help = "Print diagnostics to stderr, such as token totals and why an input\n\
file was treated as empty. The report on stdout is unchanged."
    )]
    pub verbose: bool,
}

/// The report needs exactly one input path
pub fn has_single_input(count: usize) -> bool {
    count == 1
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    if !has_single_input(cli.files.len()) {
        eprintln!("{}", USAGE_MESSAGE);
        return Ok(ExitCode::from(1));
    }

    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let stdout = io::stdout();
    crate::flows::count::run_count(&cli.files[0], render_config, stdout.lock())?;

    Ok(ExitCode::SUCCESS)
}
