//! psh-autoupdate: Platform.sh update-environment maintenance.
//!
//! This is the main entry point for the `psh-autoupdate` CLI. It parses
//! arguments, installs the log subscriber, dispatches to the command handler,
//! and maps errors to exit codes.

mod cli;
mod commands;

use cli::Cli;
use psh_autoupdate::exit_codes;
use psh_autoupdate::report::{init_tracing, report_error};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            report_error(err.event(), err.message());
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
