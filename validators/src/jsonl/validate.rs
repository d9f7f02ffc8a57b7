//! File and line validation for JSONL input.

use super::failure::{JsonSyntaxError, JsonlFailure};
use crate::display_path::normalise;
use camino::Utf8Path;
use datacheck_common::{ExitStatus, FailureReport, Spacing, split_lines};
use log::{debug, trace};
use serde::de::IgnoredAny;
use std::fs;

/// Header line of the failure report.
pub const REPORT_HEADER: &str = "JSONL VALIDATION FAILED:";

/// Result of validating a set of files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonlOutcome {
    files: usize,
    failures: Vec<JsonlFailure>,
}

impl JsonlOutcome {
    /// Number of paths validated.
    #[must_use]
    pub fn files(&self) -> usize {
        self.files
    }

    /// Failures in argument order, then line order.
    #[must_use]
    pub fn failures(&self) -> &[JsonlFailure] {
        &self.failures
    }

    /// Returns `true` when no failures were found.
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
        format!("OK: validated {} file(s)", self.files)
    }

    /// The consolidated failure report, one line per failure.
    #[must_use]
    pub fn report(&self) -> FailureReport {
        FailureReport::from_failures(REPORT_HEADER, Spacing::Compact, &self.failures)
    }
}

/// Validate every path in order and collect all failures.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use datacheck::jsonl::validate_paths;
///
/// let outcome = validate_paths(&[Utf8Path::new("/no/such/file.jsonl")]);
/// assert_eq!(outcome.files(), 1);
/// assert_eq!(outcome.failures()[0].to_string(), "/no/such/file.jsonl: MISSING");
/// ```
#[must_use]
pub fn validate_paths<P: AsRef<Utf8Path>>(paths: &[P]) -> JsonlOutcome {
    let failures = paths
        .iter()
        .flat_map(|path| validate_file(path.as_ref()))
        .collect();
    JsonlOutcome {
        files: paths.len(),
        failures,
    }
}

/// Validate one file.
///
/// Missing paths, directories, unreadable files, and non-UTF-8 files yield a
/// single failure; otherwise each malformed line yields one. Failures name the
/// path with its spelling normalised.
#[must_use]
pub fn validate_file(path: &Utf8Path) -> Vec<JsonlFailure> {
    let shown = normalise(path);
    if !path.exists() {
        return vec![JsonlFailure::Missing { path: shown }];
    }
    if path.is_dir() {
        return vec![JsonlFailure::IsDirectory { path: shown }];
    }

    debug!("validating {path}");
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            return vec![JsonlFailure::Unreadable {
                path: shown,
                reason: err.to_string(),
            }];
        }
    };
    match String::from_utf8(bytes) {
        Ok(text) => validate_text(&shown, &text),
        Err(err) => vec![JsonlFailure::NotUtf8 {
            path: shown,
            reason: err.utf8_error().to_string(),
        }],
    }
}

/// Validate already-decoded text, attributing failures to `path`.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use datacheck::jsonl::validate_text;
///
/// let failures = validate_text(Utf8Path::new("a.jsonl"), "{\"a\":1}\nnot json\n");
/// assert_eq!(failures.len(), 1);
/// assert_eq!(failures[0].line(), Some(2));
/// ```
#[must_use]
pub fn validate_text(path: &Utf8Path, text: &str) -> Vec<JsonlFailure> {
    let failures: Vec<JsonlFailure> = split_lines(text)
        .enumerate()
        .filter_map(|(index, raw)| {
            validate_line(raw)
                .err()
                .map(|JsonSyntaxError { column, message }| JsonlFailure::InvalidJson {
                    path: path.to_owned(),
                    line: index + 1,
                    column,
                    message,
                })
        })
        .collect();
    trace!("{path}: {} invalid line(s)", failures.len());
    failures
}

/// Check that one line holds exactly one JSON value.
///
/// Surrounding whitespace is ignored and blank lines always pass.
///
/// # Errors
///
/// Returns the parser's message and column when the trimmed line is not a
/// single JSON value.
pub fn validate_line(raw: &str) -> Result<(), JsonSyntaxError> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(());
    }
    serde_json::from_str::<IgnoredAny>(line)
        .map(|IgnoredAny| ())
        .map_err(JsonSyntaxError::from)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
