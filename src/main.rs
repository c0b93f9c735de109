//! gen-slaves: render per-worker Kubernetes configurations for the CI fleet.
//!
//! This is the main entry point for the `gen-slaves` CLI. It parses
//! arguments, installs logging, dispatches to the command handler, and maps
//! errors to exit codes. Any failure is fatal: one diagnostic line is logged
//! and the process exits non-zero.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fleet;
pub mod generator;
mod logging;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use error::GenError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Structured fields for the fatal diagnostic: failing stage and worker.
fn diagnostic_fields(err: &GenError) -> (Option<&'static str>, Option<&str>) {
    (err.stage().map(|stage| stage.as_str()), err.target())
}

/// Log the fatal diagnostic, with stage and worker as fields when known.
fn report(err: &GenError) {
    match diagnostic_fields(err) {
        (Some(stage), Some(worker)) => tracing::error!(stage, worker, "{}", err),
        (None, Some(worker)) => tracing::error!(worker, "{}", err),
        _ => tracing::error!("{}", err),
    }
}
