//! Precondition checks run before any remote command.
//!
//! Reports:
//! - whether the Platform.sh CLI executable can be found
//! - whether `PLATFORMSH_CLI_TOKEN` is set so the CLI can authenticate

use crate::config::CLI_TOKEN_ENV;
use crate::error::{AutoUpdateError, Result};

pub const CLI_CHECK_EVENT: &str = "Checking for the Platform.sh CLI tool";
pub const TOKEN_CHECK_EVENT: &str = "Checking for the Platform.sh CLI API token";
pub const PREFLIGHT_EVENT: &str = "Checking preconditions";

/// Outcome of a single precondition check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightCheck {
    pub event: String,
    pub passed: bool,
    pub message: String,
}

/// Result of running every precondition check.
#[derive(Debug, Clone, Default)]
pub struct PreflightReport {
    pub checks: Vec<PreflightCheck>,
}

impl PreflightReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Convert the first failed check into a precondition error.
    pub fn into_result(self) -> Result<()> {
        match self.checks.into_iter().find(|c| !c.passed) {
            Some(check) => Err(AutoUpdateError::precondition(check.event, check.message)),
            None => Ok(()),
        }
    }

    /// Summarize failures without repeating the messages [`print`](Self::print) shows.
    pub fn summary(&self) -> Result<()> {
        if self.passed() {
            return Ok(());
        }
        let failed = self.checks.iter().filter(|c| !c.passed).count();
        Err(AutoUpdateError::precondition(
            PREFLIGHT_EVENT,
            format!("{} of {} checks failed", failed, self.checks.len()),
        ))
    }

    /// Print a one-line status per check.
    pub fn print(&self) {
        for check in &self.checks {
            let marker = if check.passed { "ok" } else { "FAIL" };
            println!("[{}] {}", marker, check.event);
            if !check.passed {
                for line in check.message.lines() {
                    println!("       {}", line);
                }
            }
        }
    }
}

/// Check that `program` resolves to an executable, either on `PATH` or as a path.
pub fn check_cli_installed(program: &str) -> PreflightCheck {
    match which::which(program) {
        Ok(path) => PreflightCheck {
            event: CLI_CHECK_EVENT.to_string(),
            passed: true,
            message: format!("The Platform.sh CLI tool is installed at {}.", path.display()),
        },
        Err(_) => PreflightCheck {
            event: CLI_CHECK_EVENT.to_string(),
            passed: false,
            message: format!(
                "The Platform.sh CLI tool ('{}') is not installed.\n\
                 Add its installation to the build hook of your .platform.app.yaml.\n\
                 See https://github.com/platformsh/cli#installation for more information.",
                program
            ),
        },
    }
}

/// Check that the API token is present and non-empty.
pub fn check_cli_token<F>(lookup: F) -> PreflightCheck
where
    F: Fn(&str) -> Option<String>,
{
    let present = lookup(CLI_TOKEN_ENV).is_some_and(|v| !v.trim().is_empty());

    PreflightCheck {
        event: TOKEN_CHECK_EVENT.to_string(),
        passed: present,
        message: if present {
            "Platform.sh CLI API token is available.".to_string()
        } else {
            format!(
                "Create an environment variable '{}' containing a valid Platform.sh API token\n\
                 before Platform.sh CLI commands can run.",
                CLI_TOKEN_ENV
            )
        },
    }
}

/// Run all checks against the given CLI program and variable lookup.
pub fn run_preflight<F>(program: &str, lookup: F) -> PreflightReport
where
    F: Fn(&str) -> Option<String>,
{
    PreflightReport {
        checks: vec![check_cli_installed(program), check_cli_token(lookup)],
    }
}
