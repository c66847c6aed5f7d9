//! Cookiecutter: a k-mer based read filtration and extraction tool.
//!
//! This is the main entry point for the `cookiecutter` CLI. It sets up
//! logging, parses arguments, dispatches to the appropriate command handler,
//! and maps errors to exit codes. Failures of the launched tools are logged
//! and never change the exit code.

use cookiecutter::cli::Cli;
use cookiecutter::{commands, exit_codes};
use env_logger::Env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
