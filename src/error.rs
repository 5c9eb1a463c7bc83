//! Error types for psh-autoupdate.
//!
//! Every variant carries the human-readable event label of the step that
//! failed and a message that includes whatever error text the Platform.sh CLI
//! produced, so the error can be reported exactly once at the top level.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for update workflow operations.
#[derive(Error, Debug)]
pub enum AutoUpdateError {
    /// A required external tool or credential is missing.
    #[error("{event}: {message}")]
    Precondition { event: String, message: String },

    /// The production branch or the update branch state could not be determined.
    #[error("{event}: {message}")]
    Discovery { event: String, message: String },

    /// A remote create/activate/sync/source-operation/deactivate call failed.
    #[error("{event}: {message}")]
    Mutation { event: String, message: String },

    /// The update branch is not a direct child of the production branch.
    #[error("{event}: {message}")]
    Consistency { event: String, message: String },
}

impl AutoUpdateError {
    pub fn precondition(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Precondition {
            event: event.into(),
            message: message.into(),
        }
    }

    pub fn discovery(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Discovery {
            event: event.into(),
            message: message.into(),
        }
    }

    pub fn mutation(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Mutation {
            event: event.into(),
            message: message.into(),
        }
    }

    pub fn consistency(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Consistency {
            event: event.into(),
            message: message.into(),
        }
    }

    /// Event label of the step that failed.
    pub fn event(&self) -> &str {
        match self {
            Self::Precondition { event, .. }
            | Self::Discovery { event, .. }
            | Self::Mutation { event, .. }
            | Self::Consistency { event, .. } => event,
        }
    }

    /// Detailed message, including captured CLI output where available.
    pub fn message(&self) -> &str {
        match self {
            Self::Precondition { message, .. }
            | Self::Discovery { message, .. }
            | Self::Mutation { message, .. }
            | Self::Consistency { message, .. } => message,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Precondition { .. } => exit_codes::PRECONDITION_FAILURE,
            Self::Discovery { .. } => exit_codes::DISCOVERY_FAILURE,
            Self::Mutation { .. } => exit_codes::MUTATION_FAILURE,
            Self::Consistency { .. } => exit_codes::CONSISTENCY_FAILURE,
        }
    }
}

/// Result type alias for update workflow operations.
pub type Result<T> = std::result::Result<T, AutoUpdateError>;
