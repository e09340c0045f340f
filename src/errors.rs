//! Error types for submission formatting.
//!
//! Every failure aborts the whole run: there is no partial-success mode, and
//! the submission file is only touched once all rows have been built.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for submitfmt operations
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Filename count and prediction row count disagree
    #[error("Shape mismatch: {filenames} filenames but {predictions} prediction rows")]
    ShapeMismatch { filenames: usize, predictions: usize },

    /// A filename does not encode an integer identifier
    #[error("Cannot extract id from '{filename}': {reason}")]
    Parse { filename: String, reason: String },

    /// A probability that cannot be clipped
    #[error("Invalid probability {value} in prediction row {row}")]
    InvalidProbability { row: usize, value: f64 },

    /// Malformed line in an input file
    #[error("Invalid input in {}:{line}: {message}", .path.display())]
    Input {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// File system related errors
    #[error("File system error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SubmissionError {
    /// Create a parse error for a filename
    pub fn parse(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            filename: filename.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error with path context
    pub fn io_with_path(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            source,
        }
    }

    /// Create an input error pointing at a line of an input file
    pub fn input(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the user can fix this by correcting inputs or configuration.
    ///
    /// I/O failures may be environmental (disk full, permissions), so they
    /// are not counted.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Result type alias for submitfmt operations
pub type Result<T> = std::result::Result<T, SubmissionError>;
