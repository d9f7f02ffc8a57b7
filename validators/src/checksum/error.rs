//! Error types for manifest loading and digest validation.
//!
//! Everything here is fatal to a verification run: the verifier reports it on
//! stderr and exits without checking any entry. Per-entry problems are
//! [`ChecksumFailure`](super::verify::ChecksumFailure)s instead.

use camino::Utf8PathBuf;
use thiserror::Error;

/// The manifest exists but cannot be turned into a list of entries.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// A non-comment line has fewer than two whitespace-separated fields.
    #[error("Invalid line {line} in {path}: {raw:?}")]
    InvalidLine {
        /// Manifest path.
        path: Utf8PathBuf,
        /// 1-based line number.
        line: usize,
        /// The offending line as written.
        raw: String,
    },

    /// Only blank and comment lines were found.
    #[error("No checksums found in {path}")]
    NoChecksums {
        /// Manifest path.
        path: Utf8PathBuf,
    },

    /// The manifest bytes are not UTF-8.
    #[error("{path} is not valid UTF-8: {reason}")]
    NotUtf8 {
        /// Manifest path.
        path: Utf8PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// The manifest could not be read.
    #[error("could not read {path}: {source}")]
    Read {
        /// Manifest path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Fatal errors raised before any entry is verified.
#[derive(Debug, Error)]
pub enum ChecksumError {
    /// The manifest path does not exist.
    #[error("checksums file not found: {path}")]
    ManifestNotFound {
        /// The path as resolved against the working directory.
        path: Utf8PathBuf,
    },

    /// The manifest could not be read or parsed.
    #[error("failed to parse {path}: {source}")]
    ManifestParse {
        /// The manifest path.
        path: Utf8PathBuf,
        /// The parse failure.
        #[source]
        source: ManifestError,
    },
}

/// A string is not a well-formed hex-encoded SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid SHA-256 digest: {reason}")]
pub struct DigestError {
    /// Description of the validation failure.
    pub reason: String,
}

/// Result type alias using [`ChecksumError`].
pub type Result<T> = std::result::Result<T, ChecksumError>;
