//! wordbag - Count word frequencies in a text file
//!
//! wordbag provides:
//! - Whitespace tokenization of a single input file
//! - Filtering of a fixed set of stop words
//! - A sorted word/count report (text/jsonl/json/md)

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod core;
mod flows;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    crate::core::logging::init(crate::core::logging::LogLevel::from_flags(
        cli.quiet,
        cli.verbose,
    ));
    cli::run(cli)
}
