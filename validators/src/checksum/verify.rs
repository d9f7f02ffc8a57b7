//! Per-entry checksum verification.
//!
//! Entries are checked in manifest order. Each one is contained, checked for
//! existence, then hashed; the first problem found for an entry becomes its
//! failure and the run moves on to the next entry.

use super::containment::resolve_within;
use super::digest::compute_sha256;
use super::error::Result;
use super::manifest::{ChecksumEntry, Manifest, load_manifest};
use super::sha256_digest::Sha256Digest;
use camino::{Utf8Path, Utf8PathBuf};
use datacheck_common::{ExitStatus, FailureReport, Spacing};
use log::{debug, trace};
use thiserror::Error;

/// Header line of the failure report.
pub const REPORT_HEADER: &str = "CHECKSUM VERIFICATION FAILED:";

/// Why a single manifest entry did not verify.
///
/// Every variant carries the path exactly as the manifest wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumFailure {
    /// The path resolves outside the manifest directory. Nothing was read.
    #[error("{path}: ERROR path escapes base directory")]
    PathEscape {
        /// Path as listed.
        path: Utf8PathBuf,
    },

    /// Nothing exists at the path.
    #[error("{path}: MISSING")]
    Missing {
        /// Path as listed.
        path: Utf8PathBuf,
    },

    /// The path names a directory.
    #[error("{path}: is a directory (expected file)")]
    IsDirectory {
        /// Path as listed.
        path: Utf8PathBuf,
    },

    /// The file exists but reading it failed.
    #[error("{path}: ERROR could not read: {reason}")]
    Unreadable {
        /// Path as listed.
        path: Utf8PathBuf,
        /// I/O error message.
        reason: String,
    },

    /// The computed digest differs from the listed one.
    #[error("{path}: BAD CHECKSUM\n  expected: {expected}\n  actual:   {actual}")]
    Mismatch {
        /// Path as listed.
        path: Utf8PathBuf,
        /// Digest from the manifest, lowercased.
        expected: String,
        /// Digest of the file on disk.
        actual: Sha256Digest,
    },
}

impl ChecksumFailure {
    /// The path as listed in the manifest.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::PathEscape { path }
            | Self::Missing { path }
            | Self::IsDirectory { path }
            | Self::Unreadable { path, .. }
            | Self::Mismatch { path, .. } => path,
        }
    }
}

/// Result of verifying every entry of a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    manifest_name: String,
    checked: usize,
    failures: Vec<ChecksumFailure>,
}

impl VerificationOutcome {
    /// Number of entries checked.
    #[must_use]
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Failures in manifest order.
    #[must_use]
    pub fn failures(&self) -> &[ChecksumFailure] {
        &self.failures
    }

    /// Returns `true` when every entry verified.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Exit status for this outcome.
    #[must_use]
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::for_failures(self.failures.len())
    }

    /// The one-line success summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "OK: verified {} file(s) from {}",
            self.checked, self.manifest_name
        )
    }

    /// The consolidated failure report, one block per failure.
    #[must_use]
    pub fn report(&self) -> FailureReport {
        FailureReport::from_failures(REPORT_HEADER, Spacing::Separated, &self.failures)
    }
}

/// Verify one entry against files under `base_dir`.
///
/// # Errors
///
/// Returns the first [`ChecksumFailure`] that applies to the entry.
pub fn verify_entry(
    base_dir: &Utf8Path,
    entry: &ChecksumEntry,
) -> std::result::Result<(), ChecksumFailure> {
    let listed = entry.relative_path();
    let target = resolve_within(base_dir, listed).map_err(|escape| {
        debug!("{listed}: {escape}");
        ChecksumFailure::PathEscape {
            path: listed.to_owned(),
        }
    })?;
    if !target.exists() {
        return Err(ChecksumFailure::Missing {
            path: listed.to_owned(),
        });
    }
    if target.is_dir() {
        return Err(ChecksumFailure::IsDirectory {
            path: listed.to_owned(),
        });
    }

    trace!("hashing {target}");
    let actual = compute_sha256(&target).map_err(|err| ChecksumFailure::Unreadable {
        path: listed.to_owned(),
        reason: err.to_string(),
    })?;
    if actual.matches(entry.expected()) {
        debug!("{listed}: ok");
        Ok(())
    } else {
        Err(ChecksumFailure::Mismatch {
            path: listed.to_owned(),
            expected: entry.expected().to_owned(),
            actual,
        })
    }
}

/// Verify every entry of a loaded manifest, in manifest order.
#[must_use]
pub fn verify_manifest(manifest: &Manifest) -> VerificationOutcome {
    let failures = manifest
        .entries()
        .iter()
        .filter_map(|entry| verify_entry(manifest.base_dir(), entry).err())
        .collect();
    VerificationOutcome {
        manifest_name: manifest.file_name().to_owned(),
        checked: manifest.entries().len(),
        failures,
    }
}

/// Load the manifest at `path` and verify it.
///
/// # Errors
///
/// Returns a [`ChecksumError`](super::error::ChecksumError) when the manifest
/// is missing or cannot be parsed. Entry failures are part of the outcome.
pub fn verify_checksums(path: &Utf8Path) -> Result<VerificationOutcome> {
    let manifest = load_manifest(path)?;
    Ok(verify_manifest(&manifest))
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
