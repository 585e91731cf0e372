//! Unified error types for the logsift workspace.
//!
//! Every fallible operation returns [`Result`]; the CLI binary is the only
//! place where an error is converted into a process exit code.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LogsiftError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The input log file does not exist.
    #[error("input not found: {path}")]
    InputNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// A log line did not match the expected access-log format.
    ///
    /// Only raised in strict mode; lenient runs count such lines instead.
    #[error("line {line_no} does not match format:\n{line}")]
    MalformedLine {
        /// 1-based line number within the input file.
        line_no: usize,
        /// The offending raw line.
        line: String,
    },

    /// A timestamp value could not be parsed.
    #[error("invalid timestamp \"{value}\": {source}")]
    Timestamp {
        /// The raw timestamp text.
        value: String,
        /// Underlying chrono parse error.
        source: chrono::format::ParseError,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// CSV serialization failed.
    #[error("CSV error: {source}")]
    Csv {
        /// Underlying CSV error.
        #[from]
        source: csv::Error,
    },
}

impl LogsiftError {
    /// Process exit code associated with this error.
    ///
    /// Missing input exits with 2 and a strict-mode format violation with 3,
    /// matching the tool's documented contract; everything else exits with 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 2,
            Self::MalformedLine { .. } => 3,
            _ => 1,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LogsiftError>;
