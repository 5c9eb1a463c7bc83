//! Run report for a completed update workflow.

use super::status::BranchAction;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Remote operations, in the order the workflow may perform them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    DiscoverProduction,
    QueryStatus,
    CreateBranch,
    ActivateBranch,
    ValidateAncestry,
    SyncCode,
    RunSourceOperation,
    Deactivate,
}

/// A reported problem that did not fail the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub event: String,
    pub message: String,
}

/// Names every step operates on, fixed once production is discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowTargets {
    pub update_branch: String,
    pub production_branch: String,
    pub source_operation: String,
}

/// Summary of a run that reached the end of the workflow.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    #[serde(flatten)]
    pub targets: WorkflowTargets,
    pub action: BranchAction,
    /// Steps that completed, plus a trailing `Deactivate` if it was attempted.
    pub steps: Vec<Step>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
