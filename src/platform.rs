//! Platform.sh CLI command surface.
//!
//! Builds the command lines for the eight remote operations the update
//! workflow needs. Arguments are shell-quoted so branch and operation names
//! reach the CLI verbatim.

/// Default name of the Platform.sh CLI executable.
pub const DEFAULT_CLI_PROGRAM: &str = "platform";

/// Command builder for one Platform.sh CLI executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCli {
    program: String,
}

impl Default for PlatformCli {
    fn default() -> Self {
        Self::new(DEFAULT_CLI_PROGRAM)
    }
}

impl PlatformCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, args: &[&str]) -> String {
        let mut words = Vec::with_capacity(args.len() + 1);
        words.push(self.program.as_str());
        words.extend_from_slice(args);
        shell_words::join(words)
    }

    /// Lists production-type environments, one name per line.
    pub fn list_production_environments(&self) -> String {
        self.command(&["environment:list", "--type", "production", "--pipe"])
    }

    /// Prints the status of an environment. Fails when it does not exist.
    pub fn environment_status(&self, environment: &str) -> String {
        self.command(&["environment:info", "status", "-e", environment])
    }

    /// Prints the parent of an environment.
    pub fn environment_parent(&self, environment: &str) -> String {
        self.command(&["environment:info", "parent", "-e", environment])
    }

    /// Branches `environment` off `parent` without cloning the parent's data.
    pub fn create_branch(&self, environment: &str, parent: &str) -> String {
        self.command(&[
            "environment:branch",
            environment,
            parent,
            "--no-clone-parent",
            "--force",
            "--wait",
        ])
    }

    pub fn activate_environment(&self, environment: &str) -> String {
        self.command(&["environment:activate", environment, "--wait", "--yes"])
    }

    /// Syncs code from the parent into `environment`.
    pub fn sync_code(&self, environment: &str) -> String {
        self.command(&["sync", "-e", environment, "--yes", "--wait", "code"])
    }

    pub fn run_source_operation(&self, operation: &str, environment: &str) -> String {
        self.command(&[
            "source-operation:run",
            operation,
            "--environment",
            environment,
            "--wait",
        ])
    }

    /// Deletes the environment but keeps its git branch, leaving it inactive.
    pub fn deactivate_environment(&self, environment: &str) -> String {
        self.command(&[
            "environment:delete",
            environment,
            "--no-delete-branch",
            "--no-wait",
            "--yes",
        ])
    }
}
