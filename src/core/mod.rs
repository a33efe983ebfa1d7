//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Word frequency model (tokens, frequency map, summaries)
//! - Whitespace tokenization of input files
//! - The fixed stop-word filter
//! - Rendering functions for different output formats
//! - Logging setup

pub mod logging;
pub mod model;
pub mod render;
pub mod stopwords;
pub mod tokenizer;
