//! Run configuration for psh-autoupdate.
//!
//! Configuration is resolved once at the start of a run, from environment
//! variables with defaults, and then passed by reference through every
//! workflow step. Nothing downstream reads the process environment.

use crate::platform::DEFAULT_CLI_PROGRAM;

/// Environment variable naming the update branch.
pub const UPDATE_BRANCH_ENV: &str = "PSH_SOP_UPDATE_BRANCH";

/// Environment variable naming the source operation to run.
pub const SOURCE_OPERATION_ENV: &str = "PSH_SOP_NAME";

/// Environment variable overriding the Platform.sh CLI executable.
pub const CLI_PROGRAM_ENV: &str = "PSH_CLI_BIN";

/// Environment variable holding the Platform.sh API token.
pub const CLI_TOKEN_ENV: &str = "PLATFORMSH_CLI_TOKEN";

pub const DEFAULT_UPDATE_BRANCH: &str = "update";
pub const DEFAULT_SOURCE_OPERATION: &str = "auto-update";

/// Immutable settings for one workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Environment to create, sync and run the source operation against.
    pub update_branch: String,
    /// Name of the source operation to invoke.
    pub source_operation: String,
    /// Platform.sh CLI executable.
    pub cli_program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            update_branch: DEFAULT_UPDATE_BRANCH.to_string(),
            source_operation: DEFAULT_SOURCE_OPERATION.to_string(),
            cli_program: DEFAULT_CLI_PROGRAM.to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Unset, empty and whitespace-only values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            update_branch: get(UPDATE_BRANCH_ENV, DEFAULT_UPDATE_BRANCH),
            source_operation: get(SOURCE_OPERATION_ENV, DEFAULT_SOURCE_OPERATION),
            cli_program: get(CLI_PROGRAM_ENV, DEFAULT_CLI_PROGRAM),
        }
    }

    /// Apply command-line overrides on top of the resolved values.
    pub fn with_overrides(
        mut self,
        update_branch: Option<String>,
        source_operation: Option<String>,
        cli_program: Option<String>,
    ) -> Self {
        if let Some(branch) = update_branch {
            self.update_branch = branch;
        }
        if let Some(operation) = source_operation {
            self.source_operation = operation;
        }
        if let Some(program) = cli_program {
            self.cli_program = program;
        }
        self
    }
}
