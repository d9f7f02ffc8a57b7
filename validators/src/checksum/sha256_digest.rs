//! SHA-256 digest value.
//!
//! Computed digests are kept as raw bytes and rendered as lowercase hex.
//! Manifest digests stay as text until compared, because a malformed digest
//! is a per-entry mismatch rather than a fatal error.

use super::error::DigestError;
use std::fmt;
use std::str::FromStr;

/// Number of bytes in a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// A SHA-256 digest.
///
/// # Examples
///
/// ```
/// use datacheck::checksum::sha256_digest::Sha256Digest;
///
/// let digest: Sha256Digest = "AB".repeat(32).parse().unwrap();
/// assert_eq!(digest.to_string(), "ab".repeat(32));
/// assert!(digest.matches(&"Ab".repeat(32)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha256Digest([u8; DIGEST_LEN]);

impl Sha256Digest {
    /// Wrap raw hasher output.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns `true` when `hex` spells this digest, in either case.
    ///
    /// Text that is not a well-formed digest never matches.
    #[must_use]
    pub fn matches(&self, hex: &str) -> bool {
        hex.parse::<Self>().is_ok_and(|other| other == *self)
    }
}

impl FromStr for Sha256Digest {
    type Err = DigestError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.len() != DIGEST_LEN * 2 {
            return Err(DigestError {
                reason: format!("expected {} hex characters, got {}", DIGEST_LEN * 2, text.len()),
            });
        }
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(text, &mut bytes).map_err(|err| DigestError {
            reason: err.to_string(),
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
