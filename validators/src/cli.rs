//! CLI argument definitions for the datacheck binaries.
//!
//! Kept apart from the entrypoints so that parsing can be tested without
//! spawning processes. clap reports usage errors on stderr with exit status
//! 2, which is the usage status both tools document.

use camino::Utf8PathBuf;
use clap::Parser;

/// Check that every non-blank line of each file is a single valid JSON value.
#[derive(Parser, Debug)]
#[command(name = "validate-jsonl")]
#[command(version, about)]
#[command(long_about = concat!(
    "Check that every non-blank line of each file is a single valid JSON value.\n\n",
    "Files must be UTF-8. No schema is enforced. All files are checked before ",
    "anything is reported, and every failure is listed.",
))]
#[command(after_help = concat!(
    "EXIT STATUS:\n",
    "  0  every file is valid\n",
    "  1  a file is missing, a directory, not UTF-8, or holds invalid JSON\n",
    "  2  usage error\n\n",
    "EXAMPLES:\n",
    "  $ validate-jsonl data/train.jsonl data/test.jsonl",
))]
pub struct JsonlCli {
    /// JSONL files to validate.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<Utf8PathBuf>,

    /// Increase log output on stderr (repeatable: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Verify files against a SHA-256 checksum manifest.
#[derive(Parser, Debug)]
#[command(name = "verify-checksums")]
#[command(version, about)]
#[command(long_about = concat!(
    "Verify files against a SHA-256 checksum manifest.\n\n",
    "The manifest lists one `<sha256>  <relative/path>` pair per line, as written ",
    "by sha256sum. Blank lines and lines starting with '#' are ignored. Paths are ",
    "resolved against the manifest's directory and may not escape it.",
))]
#[command(after_help = concat!(
    "EXIT STATUS:\n",
    "  0  every listed file matches\n",
    "  1  a listed file is missing, escapes the manifest directory, or mismatches\n",
    "  2  usage error, or the manifest is missing or unparsable\n\n",
    "EXAMPLES:\n",
    "  $ verify-checksums release/CHECKSUMS.sha256",
))]
pub struct ChecksumCli {
    /// Path to the checksum manifest.
    #[arg(value_name = "MANIFEST")]
    pub manifest: Utf8PathBuf,

    /// Increase log output on stderr (repeatable: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
