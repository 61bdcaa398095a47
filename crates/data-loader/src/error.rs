//! Error types for the data-loader crate.
//!
//! Every variant is fatal for a catalog load: there is no per-row recovery,
//! the first malformed line aborts the whole file.

use thiserror::Error;

use crate::types::MovieId;

/// Errors that can occur while loading and parsing the movie catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the catalog couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A load option or decoded value was invalid
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A line carried more columns than the catalog declares
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Two records share the same movie identifier
    #[error("Duplicate movie id: {id}")]
    DuplicateMovie { id: MovieId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
