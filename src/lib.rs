//! psh-autoupdate: keeps a Platform.sh update environment in sync with
//! production and runs an update source operation against it.
//!
//! The workflow is a single linear pass of Platform.sh CLI invocations; see
//! [`workflow`] for the steps and [`workflow::UpdateWorkflow::trigger_auto_update`]
//! for the entry point.

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod platform;
pub mod preflight;
pub mod report;
pub mod runner;
pub mod workflow;

#[cfg(test)]
mod test_support;
