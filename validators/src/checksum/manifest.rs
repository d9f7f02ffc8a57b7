//! Checksum manifest parsing.
//!
//! Accepts the `sha256sum` text layout (`<digest>  <path>`, one or more
//! spaces), skipping blank lines and `#` comments. The digest is lowercased;
//! everything after it is the relative path, so paths containing spaces
//! survive as long as their words are separated by single spaces.

use super::error::{ChecksumError, ManifestError, Result};
use super::sha256_digest::Sha256Digest;
use crate::display_path::normalise;
use camino::{Utf8Path, Utf8PathBuf};
use datacheck_common::split_lines;
use log::{debug, warn};
use std::fs;
use std::io;

/// One `<digest> <path>` pair from a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChecksumEntry {
    expected: String,
    relative_path: Utf8PathBuf,
}

impl ChecksumEntry {
    /// Create an entry, lowercasing the digest and normalising the path's
    /// spelling.
    #[must_use]
    pub fn new(expected: &str, relative_path: impl AsRef<Utf8Path>) -> Self {
        Self {
            expected: expected.to_ascii_lowercase(),
            relative_path: normalise(relative_path.as_ref()),
        }
    }

    /// The expected digest, lowercased.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The path as listed in the manifest.
    #[must_use]
    pub fn relative_path(&self) -> &Utf8Path {
        &self.relative_path
    }
}

/// A parsed manifest together with the directory its paths are relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: Utf8PathBuf,
    base_dir: Utf8PathBuf,
    entries: Vec<ChecksumEntry>,
}

impl Manifest {
    /// Build a manifest from its canonical path and parsed entries.
    #[must_use]
    pub fn new(path: Utf8PathBuf, entries: Vec<ChecksumEntry>) -> Self {
        let base_dir = path.parent().map(Utf8Path::to_path_buf).unwrap_or_default();
        Self {
            path,
            base_dir,
            entries,
        }
    }

    /// Canonical manifest path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Directory that entry paths are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }

    /// Entries in manifest order.
    #[must_use]
    pub fn entries(&self) -> &[ChecksumEntry] {
        &self.entries
    }

    /// Final component of the manifest path.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path.file_name().unwrap_or(self.path.as_str())
    }
}

/// Parse manifest text into entries.
///
/// `manifest_path` is only used in error messages.
///
/// # Errors
///
/// Returns [`ManifestError::InvalidLine`] for a non-comment line with fewer
/// than two fields, and [`ManifestError::NoChecksums`] when no entries remain.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use datacheck::checksum::parse_manifest;
///
/// let text = "# release files\nABC123  data/file one.bin\n";
/// let entries = parse_manifest(text, Utf8Path::new("CHECKSUMS.sha256")).unwrap();
/// assert_eq!(entries[0].expected(), "abc123");
/// assert_eq!(entries[0].relative_path(), "data/file one.bin");
/// ```
pub fn parse_manifest(
    text: &str,
    manifest_path: &Utf8Path,
) -> std::result::Result<Vec<ChecksumEntry>, ManifestError> {
    let mut entries = Vec::new();
    for (index, raw) in split_lines(text).enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let entry = parse_entry(line).ok_or_else(|| ManifestError::InvalidLine {
            path: manifest_path.to_owned(),
            line: index + 1,
            raw: raw.to_owned(),
        })?;
        if let Err(err) = entry.expected().parse::<Sha256Digest>() {
            warn!(
                "{manifest_path}:{}: {err}; {} can never verify",
                index + 1,
                entry.relative_path()
            );
        }
        entries.push(entry);
    }
    if entries.is_empty() {
        return Err(ManifestError::NoChecksums {
            path: manifest_path.to_owned(),
        });
    }
    Ok(entries)
}

/// Split one non-blank, non-comment line into digest and path.
fn parse_entry(line: &str) -> Option<ChecksumEntry> {
    let mut fields = line.split_whitespace();
    let digest = fields.next()?;
    let path_words: Vec<&str> = fields.collect();
    if path_words.is_empty() {
        return None;
    }
    Some(ChecksumEntry::new(digest, path_words.join(" ")))
}

/// Locate, read, and parse the manifest at `path`.
///
/// The path is canonicalised so that entry paths resolve against the real
/// directory holding the manifest.
///
/// # Errors
///
/// Returns [`ChecksumError::ManifestNotFound`] when nothing exists at `path`
/// and [`ChecksumError::ManifestParse`] when it cannot be read, is not UTF-8,
/// or fails [`parse_manifest`].
pub fn load_manifest(path: &Utf8Path) -> Result<Manifest> {
    let canonical = match path.canonicalize_utf8() {
        Ok(canonical) => canonical,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ChecksumError::ManifestNotFound {
                path: absolute(path),
            });
        }
        Err(source) => {
            return Err(parse_error(
                absolute(path),
                |path| ManifestError::Read { path, source },
            ));
        }
    };
    debug!("loading manifest {canonical}");

    let bytes = fs::read(&canonical).map_err(|source| {
        parse_error(canonical.clone(), |path| ManifestError::Read { path, source })
    })?;
    let text = String::from_utf8(bytes).map_err(|err| {
        parse_error(canonical.clone(), |path| ManifestError::NotUtf8 {
            path,
            reason: err.utf8_error().to_string(),
        })
    })?;
    let entries = parse_manifest(&text, &canonical).map_err(|source| {
        ChecksumError::ManifestParse {
            path: canonical.clone(),
            source,
        }
    })?;
    debug!("{canonical}: {} entries", entries.len());
    Ok(Manifest::new(canonical, entries))
}

fn parse_error(
    path: Utf8PathBuf,
    cause: impl FnOnce(Utf8PathBuf) -> ManifestError,
) -> ChecksumError {
    ChecksumError::ManifestParse {
        source: cause(path.clone()),
        path,
    }
}

/// Best-effort absolute form of `path` for messages.
fn absolute(path: &Utf8Path) -> Utf8PathBuf {
    std::path::absolute(path)
        .ok()
        .and_then(|absolute| Utf8PathBuf::from_path_buf(absolute).ok())
        .unwrap_or_else(|| path.to_owned())
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
