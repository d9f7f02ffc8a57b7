//! SHA-256 checksum manifest verification.
//!
//! A manifest uses the `sha256sum` text layout: one `<digest> <path>` pair per
//! line, with blank lines and `#` comments ignored. Paths are relative to the
//! manifest's own directory and may not resolve outside it.
//!
//! # Sub-modules
//!
//! - [`containment`] — Resolution of manifest paths against the base directory.
//! - [`digest`] — Streaming SHA-256 computation.
//! - [`error`] — Fatal manifest errors and digest validation errors.
//! - [`manifest`] — Manifest parsing (`Manifest`, `ChecksumEntry`).
//! - [`sha256_digest`] — SHA-256 digest newtype (`Sha256Digest`).
//! - [`verify`] — Per-entry verification and failure reporting.

pub mod containment;
pub mod digest;
pub mod error;
pub mod manifest;
pub mod sha256_digest;
pub mod verify;

pub use error::{ChecksumError, ManifestError};
pub use manifest::{ChecksumEntry, Manifest, load_manifest, parse_manifest};
pub use verify::{
    ChecksumFailure, REPORT_HEADER, VerificationOutcome, verify_checksums, verify_entry,
    verify_manifest,
};
