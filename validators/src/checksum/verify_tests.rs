//! Tests for entry and manifest verification.

use super::*;
use rstest::{fixture, rstest};
use std::fs;
use tempfile::TempDir;

const HELLO_SHA256: &str = "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03";
const OTHER_SHA256: &str = "0000000000000000000000000000000000000000000000000000000000000000";

struct Workspace {
    _dir: TempDir,
    base: Utf8PathBuf,
}

impl Workspace {
    fn write(&self, relative: &str, contents: &[u8]) {
        let path = self.base.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, contents).expect("write file");
    }

    fn manifest(&self, text: &str) -> Utf8PathBuf {
        let path = self.base.join("CHECKSUMS.sha256");
        fs::write(&path, text).expect("write manifest");
        path
    }
}

#[fixture]
fn workspace() -> Workspace {
    let dir = tempfile::tempdir().expect("temp dir");
    let base = Utf8Path::from_path(dir.path())
        .expect("utf8 temp path")
        .canonicalize_utf8()
        .expect("canonical temp path");
    Workspace { _dir: dir, base }
}

#[rstest]
fn matching_entry_verifies(workspace: Workspace) {
    workspace.write("hello.txt", b"hello\n");
    let entry = ChecksumEntry::new(HELLO_SHA256, "hello.txt");
    assert_eq!(verify_entry(&workspace.base, &entry), Ok(()));
}

#[rstest]
fn uppercase_manifest_digest_matches(workspace: Workspace) {
    workspace.write("hello.txt", b"hello\n");
    let entry = ChecksumEntry::new(&HELLO_SHA256.to_ascii_uppercase(), "hello.txt");
    assert_eq!(verify_entry(&workspace.base, &entry), Ok(()));
}

#[rstest]
fn mismatch_reports_both_digests(workspace: Workspace) {
    workspace.write("hello.txt", b"hello\n");
    let entry = ChecksumEntry::new(OTHER_SHA256, "hello.txt");

    let failure = verify_entry(&workspace.base, &entry).expect_err("digest differs");
    assert_eq!(
        failure.to_string(),
        format!("hello.txt: BAD CHECKSUM\n  expected: {OTHER_SHA256}\n  actual:   {HELLO_SHA256}")
    );
}

#[rstest]
fn missing_file_is_reported(workspace: Workspace) {
    let entry = ChecksumEntry::new(HELLO_SHA256, "missing.txt");
    let failure = verify_entry(&workspace.base, &entry).expect_err("file is absent");
    assert_eq!(failure.to_string(), "missing.txt: MISSING");
}

#[rstest]
fn directory_is_reported(workspace: Workspace) {
    fs::create_dir(workspace.base.join("data")).expect("create dir");
    let entry = ChecksumEntry::new(HELLO_SHA256, "data");
    let failure = verify_entry(&workspace.base, &entry).expect_err("directory");
    assert!(matches!(failure, ChecksumFailure::IsDirectory { .. }));
}

#[rstest]
#[case::parent("../../etc/passwd")]
#[case::absolute("/etc/passwd")]
fn escaping_path_is_reported_without_hashing(workspace: Workspace, #[case] listed: &str) {
    let entry = ChecksumEntry::new(HELLO_SHA256, listed);
    let failure = verify_entry(&workspace.base, &entry).expect_err("escapes base");
    assert_eq!(
        failure,
        ChecksumFailure::PathEscape {
            path: Utf8PathBuf::from(listed)
        }
    );
    assert_eq!(failure.to_string(), format!("{listed}: ERROR path escapes base directory"));
}

#[rstest]
fn escape_wins_over_missing(workspace: Workspace) {
    let entry = ChecksumEntry::new(HELLO_SHA256, "../does-not-exist.bin");
    let failure = verify_entry(&workspace.base, &entry).expect_err("escapes base");
    assert!(matches!(failure, ChecksumFailure::PathEscape { .. }));
}

#[rstest]
fn failures_follow_manifest_order(workspace: Workspace) {
    workspace.write("hello.txt", b"hello\n");
    workspace.write("sub dir/hello copy.txt", b"hello\n");
    let path = workspace.manifest(&format!(
        "# fixture\n{OTHER_SHA256}  hello.txt\n{HELLO_SHA256}  sub dir/hello copy.txt\n\
         {HELLO_SHA256}  missing.txt\n{HELLO_SHA256}  ../outside.txt\n"
    ));

    let outcome = verify_checksums(&path).expect("manifest loads");
    assert_eq!(outcome.checked(), 4);
    assert_eq!(outcome.exit_status(), ExitStatus::ValidationFailed);
    let listed: Vec<&str> = outcome.failures().iter().map(|f| f.path().as_str()).collect();
    assert_eq!(listed, ["hello.txt", "missing.txt", "../outside.txt"]);
}

#[rstest]
fn success_summary_names_manifest(workspace: Workspace) {
    workspace.write("hello.txt", b"hello\n");
    let path = workspace.manifest(&format!("{HELLO_SHA256}  hello.txt\n"));

    let outcome = verify_checksums(&path).expect("manifest loads");
    assert!(outcome.is_success());
    assert_eq!(outcome.exit_status(), ExitStatus::Success);
    assert_eq!(outcome.summary(), "OK: verified 1 file(s) from CHECKSUMS.sha256");
}

#[rstest]
fn report_separates_blocks(workspace: Workspace) {
    let path = workspace.manifest(&format!("{HELLO_SHA256}  a.txt\n{HELLO_SHA256}  b.txt\n"));

    let outcome = verify_checksums(&path).expect("manifest loads");
    assert_eq!(
        outcome.report().to_string(),
        "CHECKSUM VERIFICATION FAILED:\n\n- a.txt: MISSING\n\n- b.txt: MISSING\n\n"
    );
}

#[rstest]
fn verification_is_idempotent(workspace: Workspace) {
    workspace.write("hello.txt", b"hello\n");
    let path = workspace.manifest(&format!(
        "{HELLO_SHA256}  hello.txt\n{OTHER_SHA256}  hello.txt\n"
    ));

    let first = verify_checksums(&path).expect("manifest loads");
    let second = verify_checksums(&path).expect("manifest loads");
    assert_eq!(first, second);
}

#[test]
fn unreadable_entry_renders_cause() {
    let failure = ChecksumFailure::Unreadable {
        path: Utf8PathBuf::from("data/locked.bin"),
        reason: "Permission denied (os error 13)".to_owned(),
    };
    assert_eq!(
        failure.to_string(),
        "data/locked.bin: ERROR could not read: Permission denied (os error 13)"
    );
    assert_eq!(failure.path(), "data/locked.bin");
}
