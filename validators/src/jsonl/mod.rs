//! Line-by-line JSON syntax validation for `.jsonl` files.
//!
//! Every non-blank line must hold exactly one JSON value. No schema is
//! enforced. Validation never stops early: all failures across all lines and
//! files are collected and reported together.
//!
//! # Sub-modules
//!
//! - [`failure`] — Failure variants and their report lines.
//! - [`validate`] — File and line validation.

pub mod failure;
pub mod validate;

pub use failure::{JsonSyntaxError, JsonlFailure};
pub use validate::{
    JsonlOutcome, REPORT_HEADER, validate_file, validate_line, validate_paths, validate_text,
};
