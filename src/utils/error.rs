//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a log file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not open or read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while decoding a log line.
///
/// Every variant carries the 1-based line number so the operator can
/// locate the offending record. The first malformed line fails the
/// whole operation - there is no skipping and no partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected 5 colon-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: URL field {url:?} has no host segment")]
    MissingHost { line: usize, url: String },

    #[error("line {line}: invalid response size {value:?}")]
    InvalidResponseSize { line: usize, value: String },
}

impl ParseError {
    /// 1-based number of the line that failed to decode
    pub fn line_number(&self) -> usize {
        match self {
            Self::FieldCount { line, .. } => *line,
            Self::MissingHost { line, .. } => *line,
            Self::InvalidResponseSize { line, .. } => *line,
        }
    }
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("invalid output path: {0}")]
    InvalidPath(String),
}
