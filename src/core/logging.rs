//! Logging initialization
//!
//! Diagnostics go to stderr so stdout carries only the report.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Verbosity selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// No diagnostics at all
    Quiet,
    /// Warnings and errors only
    #[default]
    Normal,
    /// Everything down to debug records
    Verbose,
}

impl LogLevel {
    /// Resolve `--quiet` / `--verbose`; quiet wins if both are set
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Quiet => LevelFilter::Off,
            LogLevel::Normal => LevelFilter::Warn,
            LogLevel::Verbose => LevelFilter::Debug,
        }
    }
}

/// Install the stderr logger. Calling it twice keeps the first logger.
pub fn init(level: LogLevel) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    let _ = TermLogger::init(
        level.filter(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
