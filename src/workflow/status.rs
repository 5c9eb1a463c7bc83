//! Update branch state and the action it calls for.

use crate::runner::CommandResult;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// The CLI's answer for an environment that does not exist.
static NOT_FOUND_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\benvironment not found\b").expect("Invalid not-found regex")
});

/// Status probe failures that say nothing about whether the environment exists.
static PROBE_FAILURE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(invalid api token|\b(401|403) (unauthori[sz]ed|forbidden)\b|authentication (failed|required)|could not resolve host|connection (refused|timed out))",
    )
    .expect("Invalid probe failure regex")
});

/// Remote state of the update branch, as reported by the status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchStatus {
    /// The status query failed; the environment does not exist.
    NotFound,
    /// The environment exists but is not running.
    Inactive,
    /// The environment exists in some other state (e.g. "active").
    Active(String),
    /// The probe failed for a reason unrelated to existence, or answered nothing.
    Error(String),
}

impl BranchStatus {
    /// Interpret the result of the status query for `environment`.
    ///
    /// The environment name is removed from error text before it is matched,
    /// so a name like `forbidden-fruit` cannot look like an access failure.
    pub fn from_result(result: &CommandResult, environment: &str) -> Self {
        let output = result.output.trim();

        if !result.success {
            if NOT_FOUND_REGEX.is_match(output) {
                return BranchStatus::NotFound;
            }
            let without_name = if environment.is_empty() {
                output.to_string()
            } else {
                output.replace(environment, "")
            };
            if PROBE_FAILURE_REGEX.is_match(&without_name) {
                return BranchStatus::Error(output.to_string());
            }
            return BranchStatus::NotFound;
        }

        match output {
            "" => BranchStatus::Error("status query returned no output".to_string()),
            "inactive" => BranchStatus::Inactive,
            other => BranchStatus::Active(other.to_string()),
        }
    }
}

/// What must happen to the update branch before it can be synced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchAction {
    /// Branch it off production.
    Create,
    /// Reactivate the existing environment.
    Activate,
    /// Already active; go straight to the code sync.
    Sync,
}

impl BranchAction {
    /// Returns `None` for [`BranchStatus::Error`], which has no safe action.
    pub fn for_status(status: &BranchStatus) -> Option<Self> {
        match status {
            BranchStatus::NotFound => Some(BranchAction::Create),
            BranchStatus::Inactive => Some(BranchAction::Activate),
            BranchStatus::Active(_) => Some(BranchAction::Sync),
            BranchStatus::Error(_) => None,
        }
    }

    /// Create and activate bring a branch into service, so its parent is checked.
    pub fn requires_ancestry_check(self) -> bool {
        !matches!(self, BranchAction::Sync)
    }
}

impl std::fmt::Display for BranchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BranchAction::Create => write!(f, "create"),
            BranchAction::Activate => write!(f, "activate"),
            BranchAction::Sync => write!(f, "sync"),
        }
    }
}
