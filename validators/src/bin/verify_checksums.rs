//! `verify-checksums` entrypoint.
//!
//! Loads the manifest named on the command line, verifies every entry, and
//! prints either a one-line summary or the consolidated failure report on
//! stdout. Fatal manifest errors go to stderr with exit status 2.

use clap::Parser;
use datacheck::checksum::verify_checksums;
use datacheck::cli::ChecksumCli;
use datacheck_common::{ExitStatus, logging};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = ChecksumCli::parse();
    logging::init(cli.verbose);
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    let run_result = run(&cli, &mut stdout, &mut stderr);
    exit_status_for_run_result(run_result, &mut stderr).into()
}

fn run(
    cli: &ChecksumCli,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> io::Result<ExitStatus> {
    let outcome = match verify_checksums(&cli.manifest) {
        Ok(outcome) => outcome,
        Err(err) => {
            writeln!(stderr, "ERROR: {err}")?;
            return Ok(ExitStatus::Usage);
        }
    };
    if outcome.is_success() {
        writeln!(stdout, "{}", outcome.summary())?;
    } else {
        outcome.report().write_to(stdout)?;
    }
    stdout.flush()?;
    Ok(outcome.exit_status())
}

fn exit_status_for_run_result(
    result: io::Result<ExitStatus>,
    stderr: &mut dyn Write,
) -> ExitStatus {
    match result {
        Ok(status) => status,
        Err(err) => {
            if writeln!(stderr, "error: failed to write report: {err}").is_err() {
                // Nowhere left to report to.
            }
            ExitStatus::ValidationFailed
        }
    }
}
