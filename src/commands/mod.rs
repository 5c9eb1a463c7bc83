//! Command implementations for psh-autoupdate.
//!
//! Routes parsed CLI commands to their handlers.

mod check;
mod run;

use crate::cli::Command;
use psh_autoupdate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run::cmd_run(args),
        Command::Check(args) => check::cmd_check(args),
    }
}
