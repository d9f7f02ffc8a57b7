//! Streaming SHA-256 computation over files.

use super::sha256_digest::Sha256Digest;
use camino::Utf8Path;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read};

/// Read buffer size. Any size produces the same digest.
const CHUNK_SIZE: usize = 1024 * 1024;

/// Compute the SHA-256 digest of a file, reading it in fixed-size chunks.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn compute_sha256(path: &Utf8Path) -> io::Result<Sha256Digest> {
    let file = fs::File::open(path)?;
    sha256_reader(file)
}

/// Compute the SHA-256 digest of everything `reader` yields.
///
/// # Errors
///
/// Propagates read errors other than [`io::ErrorKind::Interrupted`].
pub fn sha256_reader(mut reader: impl Read) -> io::Result<Sha256Digest> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        hasher.update(buffer.get(..bytes_read).unwrap_or_default());
    }
    Ok(Sha256Digest::from_bytes(hasher.finalize().into()))
}
