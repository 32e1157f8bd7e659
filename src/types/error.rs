//! Error types for the item exporter
//!
//! This module defines all error types that can occur during an export run.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Fatal startup errors**: missing file, parse failures, row-count
//!   mismatches, invalid endpoint URLs, runtime construction failures.
//!   These abort the run before any upload.
//! - **Per-record upload errors**: captured in worker reports and logged;
//!   they never abort a worker or the run.

use thiserror::Error;

/// Main error type for the item exporter
///
/// Fatal variants propagate to `main` and terminate the run; the `Upload`
/// variant is recorded per record and only surfaces in logs and the final
/// summary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// Input file could not be opened
    ///
    /// This is a fatal error that prevents the run from starting.
    #[error("Failed to open file '{path}': {message}")]
    FileOpen {
        /// The path that could not be opened
        path: String,
        /// Description of the underlying failure
        message: String,
    },

    /// I/O error occurred while reading the input file
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing or row conversion error
    ///
    /// Malformed rows are fatal: the load is aborted before any upload.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The file's actual row count disagrees with the expected count
    ///
    /// Raised after the load pass when an expected count is given; fatal in
    /// both directions (too few and too many rows).
    #[error("Expected {expected} rows but file contains {actual}")]
    RowCountMismatch {
        /// Row count the caller declared
        expected: usize,
        /// Row count actually read from the file
        actual: usize,
    },

    /// Endpoint URL could not be parsed
    #[error("Invalid endpoint URL '{url}': {message}")]
    InvalidUrl {
        /// The offending URL string
        url: String,
        /// Description of the parse failure
        message: String,
    },

    /// Async runtime could not be constructed
    #[error("Failed to create runtime: {message}")]
    Runtime {
        /// Description of the runtime construction failure
        message: String,
    },

    /// A single document failed to send
    ///
    /// This is the only recoverable category: the failure is recorded in the
    /// worker's report and the upload loop continues with the next document.
    #[error("Upload failed: {message}")]
    Upload {
        /// Description of the send failure
        message: String,
    },
}

// Conversion from io::Error to ExportError
impl From<std::io::Error> for ExportError {
    fn from(error: std::io::Error) -> Self {
        ExportError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ExportError
impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        ExportError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

// Conversion from reqwest::Error to ExportError
impl From<reqwest::Error> for ExportError {
    fn from(error: reqwest::Error) -> Self {
        ExportError::Upload {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ExportError {
    /// Create a FileOpen error
    pub fn file_open(path: &str, message: &str) -> Self {
        ExportError::FileOpen {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a Parse error
    pub fn parse(line: Option<u64>, message: &str) -> Self {
        ExportError::Parse {
            line,
            message: message.to_string(),
        }
    }

    /// Create a RowCountMismatch error
    pub fn row_count_mismatch(expected: usize, actual: usize) -> Self {
        ExportError::RowCountMismatch { expected, actual }
    }

    /// Create an InvalidUrl error
    pub fn invalid_url(url: &str, message: &str) -> Self {
        ExportError::InvalidUrl {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a Runtime error
    pub fn runtime(message: &str) -> Self {
        ExportError::Runtime {
            message: message.to_string(),
        }
    }

    /// Create an Upload error
    pub fn upload(message: &str) -> Self {
        ExportError::Upload {
            message: message.to_string(),
        }
    }
}
