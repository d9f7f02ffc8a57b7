//! Path spelling used in reports.

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Normalise how `path` is written without touching the filesystem.
///
/// Repeated separators, `.` components and trailing separators are dropped.
/// `..` is kept, since removing it lexically can change which file is meant.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use datacheck::display_path::normalise;
///
/// assert_eq!(normalise(Utf8Path::new("./data//a/./b.txt")), "data/a/b.txt");
/// assert_eq!(normalise(Utf8Path::new("../x/")), "../x");
/// assert_eq!(normalise(Utf8Path::new("./")), ".");
/// ```
#[must_use]
pub fn normalise(path: &Utf8Path) -> Utf8PathBuf {
    let normalised: Utf8PathBuf = path
        .components()
        .filter(|component| *component != Utf8Component::CurDir)
        .collect();
    if normalised.as_str().is_empty() {
        Utf8PathBuf::from(".")
    } else {
        normalised
    }
}
