//! Error types for the keymap pipeline.
//!
//! Every failure in the pipeline is fatal. Variants carry enough context
//! (file, row, column, offending text) for the user to find the bad input.

use crate::firmware::resolver::ResolutionReport;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading, extracting, resolving and writing a keymap.
#[derive(Debug, Error)]
pub enum KeymapError {
    /// A file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON for the expected schema.
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        /// Configuration file
        path: PathBuf,
        /// Underlying decoder error
        #[source]
        source: serde_json::Error,
    },

    /// The configuration decoded but violates a structural rule.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A layer drawing disagrees with the reference drawing at a non-blank cell.
    #[error(
        "character mismatch in {file} at line {row}, character {column}: expected '{expected}', found '{found}'"
    )]
    Mismatch {
        /// Layer file containing the mismatch
        file: String,
        /// 0-based row
        row: usize,
        /// 0-based column
        column: usize,
        /// Character in the reference drawing
        expected: char,
        /// Character in the layer drawing
        found: char,
    },

    /// A digit run in the template could not be parsed as a key index.
    #[error("malformed key index '{text}' at line {row}, character {column}")]
    MalformedIndex {
        /// 0-based row
        row: usize,
        /// 0-based column of the first digit
        column: usize,
        /// The digit run
        text: String,
    },

    /// A key index in the template is not below the configured key count.
    #[error(
        "key index {index} at line {row}, character {column} exceeds number_of_keys ({number_of_keys})"
    )]
    KeyIndexOutOfRange {
        /// Parsed key index
        index: usize,
        /// 0-based row
        row: usize,
        /// 0-based column of the first digit
        column: usize,
        /// Configured key count
        number_of_keys: usize,
    },

    /// Strict mode: one or more symbols could not be resolved.
    #[error("{} unresolved symbol(s):\n{}", .0.len(), .0.format_message())]
    Unresolved(ResolutionReport),
}

impl KeymapError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, KeymapError>;
