//! CLI argument parsing for psh-autoupdate.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{Parser, Subcommand};

/// Keep a Platform.sh update environment in sync with production and run an
/// update source operation against it.
///
/// Intended to be run from a cron job inside a Platform.sh application
/// container, with PLATFORMSH_CLI_TOKEN set.
#[derive(Parser, Debug)]
#[command(name = "psh-autoupdate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log every Platform.sh CLI command that is run.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the update workflow.
    ///
    /// Ensures the update environment exists and is a direct child of
    /// production, syncs its code, runs the source operation, and deactivates
    /// it again.
    Run(RunArgs),

    /// Check that the Platform.sh CLI and its API token are available.
    Check(CheckArgs),
}

/// Arguments for the `run` command.
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Update environment name (overrides PSH_SOP_UPDATE_BRANCH).
    #[arg(long)]
    pub update_branch: Option<String>,

    /// Source operation name (overrides PSH_SOP_NAME).
    #[arg(long)]
    pub source_operation: Option<String>,

    /// Platform.sh CLI executable (overrides PSH_CLI_BIN).
    #[arg(long)]
    pub cli: Option<String>,

    /// Print the run report as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Skip the CLI and API token checks.
    #[arg(long)]
    pub skip_preflight: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug, Default)]
pub struct CheckArgs {
    /// Platform.sh CLI executable (overrides PSH_CLI_BIN).
    #[arg(long)]
    pub cli: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
