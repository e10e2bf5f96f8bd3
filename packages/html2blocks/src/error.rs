//! Error types for the converter.
//!
//! The block conversion itself never fails: every element has a block
//! mapping or falls back to an HTML block. Errors only come from acquiring
//! input, the parser collaborator, and writing output.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input contained nothing but whitespace.
    #[error("No HTML content to process")]
    EmptyInput,

    /// Input file does not exist.
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// No input file given and nothing piped on stdin.
    #[error("No input provided. Use -i <file> or pipe HTML content")]
    NoInput,

    /// Neither an output file nor stdout was selected.
    #[error("No output method specified. Use -o <file> or --stdout")]
    NoOutput,

    /// Block namespace is not a valid identifier.
    #[error("Invalid block namespace: '{0}'. Expected lowercase letters, digits and dashes (e.g., core)")]
    InvalidNamespace(String),

    /// Parser reported recoverable errors while running in strict mode.
    #[error("HTML parsing reported {count} error(s), first: {first}")]
    HtmlParse { count: usize, first: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
