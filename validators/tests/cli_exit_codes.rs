//! End-to-end tests for the `validate-jsonl` and `verify-checksums` binaries.
//!
//! These invoke the compiled binaries and check exit codes and which stream
//! each message lands on.

use rstest::{fixture, rstest};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const HELLO_SHA256: &str = "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03";

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("temp dir")
}

fn validate_jsonl(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_validate-jsonl"))
        .args(args)
        .output()
        .expect("failed to run validate-jsonl")
}

fn verify_checksums(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_verify-checksums"))
        .args(args)
        .output()
        .expect("failed to run verify-checksums")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[rstest]
fn jsonl_valid_file_exits_zero(temp_dir: TempDir) {
    let file = temp_dir.path().join("ok.jsonl");
    fs::write(&file, "{\"a\":1}\n{\"b\":2}\n").expect("write");

    let output = validate_jsonl(&[&file]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "OK: validated 1 file(s)\n");
}

#[rstest]
fn jsonl_malformed_line_exits_one(temp_dir: TempDir) {
    let file = temp_dir.path().join("bad.jsonl");
    fs::write(&file, "{\"a\":1}\nnot json\n").expect("write");

    let output = validate_jsonl(&[&file]);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.starts_with("JSONL VALIDATION FAILED:\n\n- "));
    assert!(text.contains(&format!("{}:2: JSON decode error: ", file.display())));
    assert_eq!(text.lines().filter(|line| line.starts_with("- ")).count(), 1);
}

#[rstest]
fn jsonl_counts_every_file(temp_dir: TempDir) {
    let first = temp_dir.path().join("a.jsonl");
    let second = temp_dir.path().join("b.jsonl");
    fs::write(&first, "[]\n").expect("write");
    fs::write(&second, "\n\n").expect("write");

    let output = validate_jsonl(&[&first, &second]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "OK: validated 2 file(s)\n");
}

#[test]
fn jsonl_without_arguments_is_usage_error() {
    let output = validate_jsonl(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Usage"));
}

#[rstest]
fn checksums_verified_exits_zero(temp_dir: TempDir) {
    fs::write(temp_dir.path().join("hello.txt"), "hello\n").expect("write");
    let manifest = temp_dir.path().join("CHECKSUMS.sha256");
    fs::write(&manifest, format!("# release\n{HELLO_SHA256}  hello.txt\n")).expect("write");

    let output = verify_checksums(&[&manifest]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "OK: verified 1 file(s) from CHECKSUMS.sha256\n");
}

#[rstest]
fn checksums_mismatch_exits_one(temp_dir: TempDir) {
    fs::write(temp_dir.path().join("data.bin"), "changed\n").expect("write");
    let manifest = temp_dir.path().join("CHECKSUMS.sha256");
    fs::write(&manifest, format!("{HELLO_SHA256}  data.bin\n")).expect("write");

    let output = verify_checksums(&[&manifest]);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.starts_with("CHECKSUM VERIFICATION FAILED:\n\n- data.bin: BAD CHECKSUM\n"));
    assert!(text.contains(&format!("  expected: {HELLO_SHA256}\n")));
    assert!(text.contains("  actual:   "));
}

#[rstest]
fn checksums_missing_file_exits_one(temp_dir: TempDir) {
    let manifest = temp_dir.path().join("CHECKSUMS.sha256");
    fs::write(&manifest, format!("{HELLO_SHA256}  missing.txt\n")).expect("write");

    let output = verify_checksums(&[&manifest]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("- missing.txt: MISSING\n"));
}

#[rstest]
fn checksums_comment_only_manifest_exits_two(temp_dir: TempDir) {
    let manifest = temp_dir.path().join("CHECKSUMS.sha256");
    fs::write(&manifest, "# nothing\n\n").expect("write");

    let output = verify_checksums(&[&manifest]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("No checksums found in"));
}

#[rstest]
fn checksums_missing_manifest_exits_two(temp_dir: TempDir) {
    let manifest = temp_dir.path().join("absent.sha256");

    let output = verify_checksums(&[&manifest]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ERROR: checksums file not found: "));
}

#[rstest]
fn checksums_wrong_argument_count_exits_two(temp_dir: TempDir) {
    let first = temp_dir.path().join("a.sha256");
    let second = temp_dir.path().join("b.sha256");

    assert_eq!(verify_checksums(&[]).status.code(), Some(2));
    assert_eq!(verify_checksums(&[&first, &second]).status.code(), Some(2));
}

#[rstest]
fn checksums_output_is_idempotent(temp_dir: TempDir) {
    fs::write(temp_dir.path().join("hello.txt"), "hello\n").expect("write");
    let manifest = temp_dir.path().join("CHECKSUMS.sha256");
    fs::write(
        &manifest,
        format!("{HELLO_SHA256}  hello.txt\n{HELLO_SHA256}  ../escape.txt\n"),
    )
    .expect("write");

    let first = verify_checksums(&[&manifest]);
    let second = verify_checksums(&[&manifest]);
    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}
