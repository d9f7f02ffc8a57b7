//! Shared plumbing for the datacheck command-line validators.
//!
//! Holds the pieces both tools share: the consolidated failure report, the
//! exit status vocabulary, line splitting, and logger initialisation. No
//! validation logic lives here.

pub mod exit_status;
pub mod lines;
pub mod logging;
pub mod report;

pub use exit_status::ExitStatus;
pub use lines::{SplitLines, split_lines};
pub use report::{FailureReport, Spacing};
