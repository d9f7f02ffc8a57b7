//! Consolidated failure reports.
//!
//! Both validators collect every failure before printing anything, then emit
//! one batch: a header line, a blank line, and one `- ` prefixed entry per
//! failure.

use std::fmt;
use std::io::{self, Write};

/// Layout of entries within a [`FailureReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Spacing {
    /// One line per entry.
    #[default]
    Compact,
    /// Every entry is followed by a blank line. Suits multi-line entries.
    Separated,
}

/// A batch of failure messages under a single header.
///
/// # Examples
///
/// ```
/// use datacheck_common::{FailureReport, Spacing};
///
/// let report = FailureReport::from_failures(
///     "JSONL VALIDATION FAILED:",
///     Spacing::Compact,
///     ["a.jsonl: MISSING"],
/// );
/// assert_eq!(
///     report.to_string(),
///     "JSONL VALIDATION FAILED:\n\n- a.jsonl: MISSING\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    header: String,
    spacing: Spacing,
    entries: Vec<String>,
}

impl FailureReport {
    fn new(header: impl Into<String>, spacing: Spacing) -> Self {
        Self {
            header: header.into(),
            spacing,
            entries: Vec::new(),
        }
    }

    /// Create a report holding the rendered form of each failure.
    #[must_use]
    pub fn from_failures<I, T>(header: impl Into<String>, spacing: Spacing, failures: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        let mut report = Self::new(header, spacing);
        report.extend(failures);
        report
    }

    /// Write the rendered report to `out`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying writer.
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl<T: fmt::Display> Extend<T> for FailureReport {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|failure| failure.to_string()));
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f)?;
        for entry in &self.entries {
            writeln!(f, "- {entry}")?;
            if self.spacing == Spacing::Separated {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
