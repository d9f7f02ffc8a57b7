//! Process exit statuses shared by both validators.

use std::fmt;
use std::process::ExitCode;

/// Outcome of a validator run, mapped onto a process exit code.
///
/// # Examples
///
/// ```
/// use datacheck_common::ExitStatus;
///
/// assert_eq!(ExitStatus::for_failures(0).code(), 0);
/// assert_eq!(ExitStatus::for_failures(3).code(), 1);
/// assert_eq!(ExitStatus::Usage.code(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitStatus {
    /// Every target passed.
    Success,
    /// At least one content-level check failed.
    ValidationFailed,
    /// Bad invocation or an input the tool could not even start on.
    Usage,
}

impl ExitStatus {
    /// Choose between success and validation failure from a failure count.
    #[must_use]
    pub const fn for_failures(count: usize) -> Self {
        if count == 0 {
            Self::Success
        } else {
            Self::ValidationFailed
        }
    }

    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::ValidationFailed => 1,
            Self::Usage => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::ValidationFailed => write!(f, "validation failed"),
            Self::Usage => write!(f, "usage error"),
        }
    }
}
