//! The update branch maintenance workflow.
//!
//! One linear pass per invocation:
//!
//! 1. Discover the single production environment
//! 2. Query the update branch status and decide create / activate / sync
//! 3. Create or activate the branch if needed
//! 4. After create or activate, verify the branch's parent is production
//! 5. Sync code from production
//! 6. Run the source operation
//! 7. Deactivate the environment (failure here is only a warning)
//!
//! Any failure in steps 1-6 halts the run. Nothing is retried and nothing is
//! rolled back: a branch created before a failed sync stays in place.

mod outcome;
mod status;


pub use outcome::{RunReport, Step, Warning, WorkflowTargets};
pub use status::{BranchAction, BranchStatus};

use crate::config::Config;
use crate::error::{AutoUpdateError, Result};
use crate::platform::PlatformCli;
use crate::report::{log_info, report_error, report_warning};
use crate::runner::CommandRunner;
use chrono::Utc;

const DISCOVERY_EVENT: &str = "Retrieving production environments";

/// Drives the workflow through a [`CommandRunner`].
pub struct UpdateWorkflow<'a, R: CommandRunner> {
    runner: &'a R,
    config: &'a Config,
    cli: PlatformCli,
}

impl<'a, R: CommandRunner> UpdateWorkflow<'a, R> {
    pub fn new(runner: &'a R, config: &'a Config) -> Self {
        Self {
            runner,
            config,
            cli: PlatformCli::new(config.cli_program.clone()),
        }
    }

    /// Run the workflow, reporting any failure, and return whether it succeeded.
    pub fn trigger_auto_update(&self) -> bool {
        match self.run() {
            Ok(report) => {
                log_info(&format!(
                    "Source operation '{}' completed on '{}'.",
                    report.targets.source_operation, report.targets.update_branch
                ));
                true
            }
            Err(err) => report_error(err.event(), err.message()),
        }
    }

    /// Run the workflow and return a report of what was done.
    pub fn run(&self) -> Result<RunReport> {
        let started_at = Utc::now();
        let mut steps = Vec::new();

        let production_branch = self.discover_production_branch()?;
        steps.push(Step::DiscoverProduction);

        let targets = WorkflowTargets {
            update_branch: self.config.update_branch.clone(),
            production_branch,
            source_operation: self.config.source_operation.clone(),
        };

        let action = self.determine_branch_action(&targets.update_branch)?;
        steps.push(Step::QueryStatus);
        tracing::debug!(branch = %targets.update_branch, %action, "determined branch action");

        match action {
            BranchAction::Create => {
                self.create_branch(&targets)?;
                steps.push(Step::CreateBranch);
            }
            BranchAction::Activate => {
                self.activate_branch(&targets.update_branch)?;
                steps.push(Step::ActivateBranch);
            }
            BranchAction::Sync => {}
        }

        if action.requires_ancestry_check() {
            self.validate_ancestry(&targets)?;
            steps.push(Step::ValidateAncestry);
        }

        self.sync_code(&targets)?;
        steps.push(Step::SyncCode);

        self.run_source_operation(&targets)?;
        steps.push(Step::RunSourceOperation);

        let mut warnings = Vec::new();
        if let Err(warning) = self.deactivate(&targets.update_branch) {
            report_warning(&warning.event, &warning.message);
            warnings.push(warning);
        }
        steps.push(Step::Deactivate);

        Ok(RunReport {
            targets,
            action,
            steps,
            warnings,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Find the one production environment.
    pub fn discover_production_branch(&self) -> Result<String> {
        let result = self
            .runner
            .run(&self.cli.list_production_environments());

        if !result.success || result.output.trim().is_empty() {
            let mut message = "Unable to retrieve the list of production type environments \
                               for this project. Please open a support ticket."
                .to_string();
            if !result.output.trim().is_empty() {
                message.push_str(&format!("\n\n{}", result.output.trim()));
            }
            return Err(AutoUpdateError::discovery(DISCOVERY_EVENT, message));
        }

        let environments = result.lines();
        match environments.as_slice() {
            [single] => Ok(single.trim().to_string()),
            _ => Err(AutoUpdateError::discovery(
                DISCOVERY_EVENT,
                format!(
                    "More than one production environment was returned:\n{}",
                    result.output
                ),
            )),
        }
    }

    /// Probe the update branch and decide what to do with it.
    pub fn determine_branch_action(&self, update_branch: &str) -> Result<BranchAction> {
        let result = self.runner.run(&self.cli.environment_status(update_branch));
        let status = BranchStatus::from_result(&result, update_branch);

        BranchAction::for_status(&status).ok_or_else(|| {
            let detail = match status {
                BranchStatus::Error(detail) => detail,
                _ => result.output.clone(),
            };
            AutoUpdateError::discovery(
                format!("Checking status of environment {}", update_branch),
                format!(
                    "Unable to determine whether environment {} exists:\n{}",
                    update_branch, detail
                ),
            )
        })
    }

    fn create_branch(&self, targets: &WorkflowTargets) -> Result<()> {
        let event = format!("Creating environment {}", targets.update_branch);
        log_info(&format!("{}...", event));

        let result = self.runner.run(
            &self
                .cli
                .create_branch(&targets.update_branch, &targets.production_branch),
        );
        if !result.success {
            return Err(AutoUpdateError::mutation(
                format!("Failure {}", event),
                format!(
                    "Error while creating the environment {}. Check the activity log to see why \
                     creation failed.\n{}",
                    targets.update_branch, result.output
                ),
            ));
        }

        log_info("Environment created.");
        Ok(())
    }

    fn activate_branch(&self, update_branch: &str) -> Result<()> {
        log_info(&format!("Activating environment {}...", update_branch));

        let result = self.runner.run(&self.cli.activate_environment(update_branch));
        if !result.success {
            return Err(AutoUpdateError::mutation(
                format!("Activating environment {}", update_branch),
                format!(
                    "Error while activating the environment {}. Check the activity log to see why \
                     activation failed.\n{}",
                    update_branch, result.output
                ),
            ));
        }

        log_info("Environment activated.");
        Ok(())
    }

    /// Require the update branch to be a direct child of production.
    pub fn validate_ancestry(&self, targets: &WorkflowTargets) -> Result<()> {
        let result = self
            .runner
            .run(&self.cli.environment_parent(&targets.update_branch));
        let parent = result.output.trim();

        if !result.success || parent != targets.production_branch {
            let found = if !result.success {
                format!("The parent query failed: {}", parent)
            } else if parent.is_empty() {
                "Its parent is unknown".to_string()
            } else {
                format!("Its parent is {}", parent)
            };
            return Err(AutoUpdateError::consistency(
                format!(
                    "Update environment {} is not a direct descendant of {}",
                    targets.update_branch, targets.production_branch
                ),
                format!(
                    "The update environment {} is not a direct descendant of the production \
                     environment {}. {}. Only environments branched directly from production \
                     can be updated automatically.",
                    targets.update_branch, targets.production_branch, found
                ),
            ));
        }

        Ok(())
    }

    fn sync_code(&self, targets: &WorkflowTargets) -> Result<()> {
        log_info(&format!(
            "Syncing environment {} with {}...",
            targets.update_branch, targets.production_branch
        ));

        let result = self.runner.run(&self.cli.sync_code(&targets.update_branch));
        if !result.success {
            return Err(AutoUpdateError::mutation(
                format!(
                    "Failed to sync environment {} with {}",
                    targets.update_branch, targets.production_branch
                ),
                format!(
                    "Unable to sync the environment {} with {}. Examine the activity log to find \
                     out why.\n{}",
                    targets.update_branch, targets.production_branch, result.output
                ),
            ));
        }

        log_info("Syncing complete.");
        Ok(())
    }

    fn run_source_operation(&self, targets: &WorkflowTargets) -> Result<()> {
        log_info(&format!(
            "Running source operation '{}' against environment '{}'...",
            targets.source_operation, targets.update_branch
        ));

        let command = self
            .cli
            .run_source_operation(&targets.source_operation, &targets.update_branch);
        let result = self.runner.run(&command);
        if !result.success {
            return Err(AutoUpdateError::mutation(command, result.output));
        }

        log_info("Source operation completed.");
        Ok(())
    }

    /// Put the environment back to inactive, keeping its git branch.
    fn deactivate(&self, update_branch: &str) -> std::result::Result<(), Warning> {
        log_info(&format!("Deactivating environment {}", update_branch));

        let command = self.cli.deactivate_environment(update_branch);
        let result = self.runner.run(&command);
        if !result.success {
            return Err(Warning {
                event: command,
                message: result.output,
            });
        }

        log_info(&format!("Environment {} deactivated", update_branch));
        Ok(())
    }
}
