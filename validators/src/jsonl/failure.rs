//! Failures reported by the JSONL validator.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// A problem found while validating one file.
///
/// The `Display` form is the exact report line, without the `- ` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonlFailure {
    /// Nothing exists at the path.
    #[error("{path}: MISSING")]
    Missing {
        /// Path as given.
        path: Utf8PathBuf,
    },

    /// The path names a directory.
    #[error("{path}: is a directory (expected file)")]
    IsDirectory {
        /// Path as given.
        path: Utf8PathBuf,
    },

    /// The file exists but could not be read.
    #[error("{path}: ERROR could not read: {reason}")]
    Unreadable {
        /// Path as given.
        path: Utf8PathBuf,
        /// I/O error message.
        reason: String,
    },

    /// The file is not UTF-8. Its lines were not checked.
    #[error("{path}: ERROR not valid UTF-8: {reason}")]
    NotUtf8 {
        /// Path as given.
        path: Utf8PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// A line is not a single valid JSON value.
    #[error("{path}:{line}: JSON decode error: {message} (col {column})")]
    InvalidJson {
        /// Path as given.
        path: Utf8PathBuf,
        /// 1-based line number.
        line: usize,
        /// 1-based column within the trimmed line.
        column: usize,
        /// Parser message without position information.
        message: String,
    },
}

impl JsonlFailure {
    /// The file the failure belongs to.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::Missing { path }
            | Self::IsDirectory { path }
            | Self::Unreadable { path, .. }
            | Self::NotUtf8 { path, .. }
            | Self::InvalidJson { path, .. } => path,
        }
    }

    /// The offending line, for line-level failures.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidJson { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Why a single line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSyntaxError {
    /// 1-based column of the error.
    pub column: usize,
    /// Parser message without the trailing position.
    pub message: String,
}

impl From<serde_json::Error> for JsonSyntaxError {
    fn from(err: serde_json::Error) -> Self {
        let column = err.column();
        let rendered = err.to_string();
        let position = format!(" at line {} column {column}", err.line());
        let message = rendered
            .strip_suffix(position.as_str())
            .unwrap_or(&rendered)
            .to_owned();
        Self { column, message }
    }
}
