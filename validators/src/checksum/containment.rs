//! Resolution of manifest paths against the manifest directory.
//!
//! A manifest is untrusted input: entries such as `../../etc/passwd`, absolute
//! paths, or symlinks pointing elsewhere must not cause files outside the
//! manifest's directory to be read.

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// A manifest path resolves outside the base directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{resolved} lies outside {base_dir}")]
pub struct PathEscape {
    /// Fully resolved target path.
    pub resolved: Utf8PathBuf,
    /// The directory the target was required to stay within.
    pub base_dir: Utf8PathBuf,
}

/// Symlinks followed while resolving one path before giving up.
const MAX_SYMLINK_HOPS: usize = 40;

/// Resolve `relative` against `base_dir` and require the result to stay
/// within `base_dir`.
///
/// `base_dir` must already be canonical. Symlinks are followed whether or not
/// their targets exist, and `.`/`..` are applied as each component is
/// resolved. A path whose symlinks cannot be read or that loops is treated as
/// escaping.
///
/// # Errors
///
/// Returns [`PathEscape`] when the resolved path is not `base_dir` or a
/// descendant of it.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use datacheck::checksum::containment::resolve_within;
///
/// let base = Utf8Path::new("/definitely/not/present");
/// assert!(resolve_within(base, Utf8Path::new("data/file.bin")).is_ok());
/// assert!(resolve_within(base, Utf8Path::new("../../etc/passwd")).is_err());
/// ```
pub fn resolve_within(
    base_dir: &Utf8Path,
    relative: &Utf8Path,
) -> Result<Utf8PathBuf, PathEscape> {
    let joined = base_dir.join(relative);
    match resolve(&joined) {
        Some(resolved) if resolved.starts_with(base_dir) => Ok(resolved),
        resolved => Err(PathEscape {
            resolved: resolved.unwrap_or(joined),
            base_dir: base_dir.to_owned(),
        }),
    }
}

/// Resolve `path` the way a non-strict `realpath` would.
///
/// Returns `None` when a symlink cannot be read or the hop budget runs out.
fn resolve(path: &Utf8Path) -> Option<Utf8PathBuf> {
    if let Ok(canonical) = path.canonicalize_utf8() {
        return Some(canonical);
    }
    let mut hops = 0;
    follow(Utf8PathBuf::new(), path, &mut hops)
}

/// Append the components of `path` to the already resolved `resolved`,
/// replacing each symlink by its resolved target.
fn follow(mut resolved: Utf8PathBuf, path: &Utf8Path, hops: &mut usize) -> Option<Utf8PathBuf> {
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                resolved.pop();
            }
            Utf8Component::Normal(name) => {
                let candidate = resolved.join(name);
                if !is_symlink(&candidate) {
                    resolved = candidate;
                    continue;
                }
                *hops += 1;
                if *hops > MAX_SYMLINK_HOPS {
                    return None;
                }
                let target = candidate.read_link_utf8().ok()?;
                resolved = follow(resolved, &target, hops)?;
            }
            root => resolved.push(root),
        }
    }
    Some(resolved)
}

fn is_symlink(path: &Utf8Path) -> bool {
    path.symlink_metadata()
        .is_ok_and(|metadata| metadata.file_type().is_symlink())
}
