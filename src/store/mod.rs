//! Snapshot provider seams.
//!
//! The engine owns no data. It reads chore and membership snapshots
//! through these traits and writes assignments back through them; the
//! implementations (a database layer, a service client, the bundled
//! [`InMemoryStore`]) own persistence entirely.
//!
//! Implementations return plain data in stable order: membership lists
//! in declared (join) order, chore lists in creation order. The engine's
//! determinism guarantees lean on that.

mod memory;

pub use memory::InMemoryStore;

use thiserror::Error;

use crate::models::{AssignmentPlan, Chore, Member};

/// Failure inside a provider implementation.
///
/// Providers fold their backend errors into this; the engine propagates
/// it unchanged — no retries, no rollback.
#[derive(Debug, Error)]
#[error("store error: {0}")]
pub struct StoreError(String);

impl StoreError {
    /// Creates a store error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Read/write access to chore snapshots.
pub trait ChoreStore {
    /// Fetches a single chore. `None` when the id is unknown.
    fn chore(&self, chore_id: &str) -> Result<Option<Chore>, StoreError>;

    /// Active chores of a household that currently have no assignee.
    fn unassigned_active_chores(&self, household_id: &str) -> Result<Vec<Chore>, StoreError>;

    /// All active chores of a household, assigned or not.
    fn active_chores(&self, household_id: &str) -> Result<Vec<Chore>, StoreError>;

    /// Persists a single assignment.
    fn assign(&self, chore_id: &str, member_id: &str) -> Result<(), StoreError>;

    /// Persists every pair in the plan as one bulk write.
    fn assign_bulk(&self, plan: &AssignmentPlan) -> Result<(), StoreError>;
}

/// Read access to household membership.
pub trait MemberDirectory {
    /// Members of a household in stable declared (join) order.
    ///
    /// An unknown household returns an empty list; the engine reports
    /// both as "no members".
    fn household_members(&self, household_id: &str) -> Result<Vec<Member>, StoreError>;
}
