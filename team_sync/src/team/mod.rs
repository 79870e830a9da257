//! Team subsystem: persistence, live view, and decision logic.
//!
//! - [`repo`] — row-level upsert/delete statements.
//! - [`store`] — [`store::TeamStore`], the owning handle that publishes a
//!   fresh snapshot through a watch channel after every mutation.
//! - [`manager`] — [`manager::TeamManager`], the add/replace/remove state
//!   machine driving the store.

pub mod manager;
pub mod repo;
pub mod store;

use thiserror::Error;

pub use manager::{Candidate, SubmitOutcome, TeamManager};
pub use store::{TeamMember, TeamSnapshot, TeamStore};

/// Fixed number of team slots.
pub const TEAM_CAPACITY: usize = 6;

/// Errors produced by team operations.
#[derive(Debug, Error)]
pub enum TeamError {
    /// A slot index outside `[0, TEAM_CAPACITY)` was supplied.
    #[error("slot index {0} is out of range for a team of {TEAM_CAPACITY}")]
    SlotOutOfRange(usize),

    /// The operation is not valid in the manager's current state.
    #[error("operation not valid in the current manager state")]
    InvalidState,

    /// The underlying database rejected or failed the operation.
    #[error("database error: {0}")]
    Db(#[from] diesel::result::Error),
}
