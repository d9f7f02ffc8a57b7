//! Command-line validators for newline-delimited JSON files and SHA-256
//! checksum manifests.
//!
//! The crate backs two independent binaries, `validate-jsonl` and
//! `verify-checksums`. Both collect every failure before reporting and share
//! the same exit status convention: `0` when everything passes, `1` when any
//! check fails, and `2` for usage or fatal input errors.
//!
//! # Modules
//!
//! - [`checksum`] - Manifest parsing, path containment, and digest verification
//! - [`cli`] - Command-line argument definitions for both binaries
//! - [`display_path`] - Path spelling used in failure messages
//! - [`jsonl`] - Line-by-line JSON syntax validation

pub mod checksum;
pub mod cli;
pub mod display_path;
pub mod jsonl;
