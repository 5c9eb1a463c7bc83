//! External command runner.
//!
//! Wraps a single invocation of an external command-line tool with captured
//! stdout/stderr. Non-zero exits are not errors here: every outcome, including
//! a command that could not be spawned at all, is normalized into a
//! [`CommandResult`] so callers branch on `success` uniformly.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Outcome of one external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// True iff the process exited with status zero.
    pub success: bool,
    /// Trimmed stdout on success; trimmed stderr (or stdout if stderr was empty) on failure.
    pub output: String,
}

impl CommandResult {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
        }
    }

    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }

    fn from_output(output: &Output) -> Self {
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if output.status.success() {
            Self::ok(stdout)
        } else if stderr.is_empty() {
            Self::failed(stdout)
        } else {
            Self::failed(stderr)
        }
    }

    /// Returns output lines, or an empty vector if there is no output.
    pub fn lines(&self) -> Vec<&str> {
        if self.output.is_empty() {
            Vec::new()
        } else {
            self.output.lines().collect()
        }
    }
}

/// Executes a fully-formed command line.
///
/// Implementations must never panic or return early on failure; the workflow
/// relies on `CommandResult::success` alone.
pub trait CommandRunner {
    fn run(&self, command: &str) -> CommandResult;
}

/// Runs commands as child processes.
///
/// The command line is split with shell quoting rules and executed directly,
/// without an intermediate shell.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    cwd: Option<PathBuf>,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every command in `cwd` instead of the caller's working directory.
    pub fn with_cwd<P: AsRef<Path>>(mut self, cwd: P) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> CommandResult {
        let args = match shell_words::split(command) {
            Ok(args) => args,
            Err(e) => {
                return CommandResult::failed(format!(
                    "failed to parse command '{}': {}",
                    command, e
                ));
            }
        };

        let Some((program, rest)) = args.split_first() else {
            return CommandResult::failed("command is empty");
        };

        tracing::debug!(command, "running command");

        let mut cmd = Command::new(program);
        cmd.args(rest);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        let result = match cmd.output() {
            Ok(output) => CommandResult::from_output(&output),
            Err(e) => CommandResult::failed(format!("failed to execute {}: {}", program, e)),
        };

        tracing::debug!(command, success = result.success, "command finished");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_success_captures_stdout() {
        let result = ShellRunner::new().run("sh -c 'echo hello'");
        assert!(result.success);
        assert_eq!(result.output, "hello");
    }

    #[test]
    fn test_run_failure_captures_stderr() {
        let result = ShellRunner::new().run("sh -c 'echo out; echo oops >&2; exit 3'");
        assert!(!result.success);
        assert_eq!(result.output, "oops");
    }

    #[test]
    fn test_run_failure_without_stderr_falls_back_to_stdout() {
        let result = ShellRunner::new().run("sh -c 'echo only-stdout; exit 1'");
        assert!(!result.success);
        assert_eq!(result.output, "only-stdout");
    }

    #[test]
    fn test_run_missing_program_is_a_failed_result() {
        let result = ShellRunner::new().run("definitely-not-a-real-program-xyz --flag");
        assert!(!result.success);
        assert!(result.output.contains("failed to execute"));
    }

    #[test]
    fn test_run_unbalanced_quotes_is_a_failed_result() {
        let result = ShellRunner::new().run("echo 'unterminated");
        assert!(!result.success);
        assert!(result.output.contains("failed to parse command"));
    }

    #[test]
    fn test_run_empty_command() {
        let result = ShellRunner::new().run("   ");
        assert!(!result.success);
        assert_eq!(result.output, "command is empty");
    }

    #[test]
    fn test_run_with_cwd_override() {
        let temp_dir = TempDir::new().unwrap();
        let result = ShellRunner::new().with_cwd(temp_dir.path()).run("pwd");
        assert!(result.success);
        let expected = temp_dir.path().canonicalize().unwrap();
        let actual = std::path::PathBuf::from(&result.output).canonicalize().unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_quoted_arguments_are_not_split() {
        let result = ShellRunner::new().run("printf %s 'two words'");
        assert!(result.success);
        assert_eq!(result.output, "two words");
    }

    #[test]
    fn test_lines() {
        let result = CommandResult::ok("main\nstaging");
        assert_eq!(result.lines(), vec!["main", "staging"]);
        assert!(CommandResult::ok("").lines().is_empty());
    }
}
