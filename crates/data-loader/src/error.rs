//! Error types for the data-loader crate.
//!
//! Only whole-collection problems are errors here. A single malformed
//! candidate is repaired by the normalizer and never surfaces as an error.

use thiserror::Error;

/// Errors that can occur while loading a candidate collection
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the input
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The input was not valid JSON
    #[error("JSON error at line {line}, column {column}: {reason}")]
    ParseError {
        line: usize,
        column: usize,
        reason: String,
    },

    /// The top-level JSON value was something other than an array of records
    #[error("Expected a JSON array of candidates but found {found}")]
    NotAnArray { found: &'static str },
}

impl From<serde_json::Error> for DataLoadError {
    fn from(err: serde_json::Error) -> Self {
        DataLoadError::ParseError {
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
