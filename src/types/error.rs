//! Error types for the transaction reporter
//!
//! This module defines the structural failures that can abort a report.
//! Data-quality problems inside individual records are not errors: an amount
//! that fails coercion is absorbed into the `invalid_amounts` counter instead.
//!
//! # Error Categories
//!
//! - **File problems**: the input path cannot be opened or has no header row
//! - **Processing problems**: I/O or CSV decoding failures mid-stream
//! - **Output problems**: the rendered report cannot be serialised or written

use thiserror::Error;

/// Result type alias for reporter operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Main error type for the transaction reporter
///
/// Every variant aborts the whole pass; no partial report is ever returned
/// alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// The input path does not exist or cannot be opened
    #[error("file not found: {path} ({reason})")]
    NotFound {
        /// The path that could not be opened
        path: String,
        /// Underlying reason reported by the OS
        reason: String,
    },

    /// The input has no header row (zero bytes / no rows)
    #[error("no header row in input: {path}")]
    EmptyInput {
        /// The path that was empty
        path: String,
    },

    /// I/O error while reading the input mid-stream
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV decoding error while streaming records
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The rendered report could not be serialised or written
    #[error("output error: {message}")]
    Output {
        /// Description of the output failure
        message: String,
    },
}

impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return ReportError::Io {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        ReportError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::Output {
            message: error.to_string(),
        }
    }
}

impl ReportError {
    /// Create a NotFound error
    pub fn not_found(path: &str, reason: &str) -> Self {
        ReportError::NotFound {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an EmptyInput error
    pub fn empty_input(path: &str) -> Self {
        ReportError::EmptyInput {
            path: path.to_string(),
        }
    }

    /// Whether this is a problem with the input file itself
    ///
    /// File problems happen before any record is produced; everything else
    /// is a processing problem surfaced during or after the pass.
    pub fn is_file_problem(&self) -> bool {
        matches!(
            self,
            ReportError::NotFound { .. } | ReportError::EmptyInput { .. }
        )
    }
}
