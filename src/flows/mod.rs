//! Flows module - End-to-end operations built from the core pieces
//!
//! Provides:
//! - count: Read a file, count non-stop words and render the report

pub mod count;
