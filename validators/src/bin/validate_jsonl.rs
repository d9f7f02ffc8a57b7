//! `validate-jsonl` entrypoint.
//!
//! Validates every file named on the command line and prints either a
//! one-line summary or the consolidated failure report on stdout.

use clap::Parser;
use datacheck::cli::JsonlCli;
use datacheck::jsonl::validate_paths;
use datacheck_common::{ExitStatus, logging};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = JsonlCli::parse();
    logging::init(cli.verbose);
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    let run_result = run(&cli, &mut stdout);
    exit_status_for_run_result(run_result, &mut stderr).into()
}

fn run(cli: &JsonlCli, stdout: &mut dyn Write) -> io::Result<ExitStatus> {
    let outcome = validate_paths(&cli.files);
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
