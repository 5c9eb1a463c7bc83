//! Exit code constants for the psh-autoupdate CLI.
//!
//! - 0: Success (including runs whose deactivation step only produced a warning)
//! - 1: Precondition failure (CLI tool or API token missing)
//! - 2: Discovery failure (production branch or update branch state unknown)
//! - 3: Mutation failure (create/activate/sync/source operation failed)
//! - 4: Consistency failure (update branch is not a child of production)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Precondition failure: the Platform.sh CLI or its API token is unavailable.
pub const PRECONDITION_FAILURE: i32 = 1;

/// Discovery failure: production branch could not be uniquely determined.
pub const DISCOVERY_FAILURE: i32 = 2;

/// Mutation failure: a remote create, activate, sync or source operation failed.
pub const MUTATION_FAILURE: i32 = 3;

/// Consistency failure: the update branch has the wrong parent.
pub const CONSISTENCY_FAILURE: i32 = 4;
