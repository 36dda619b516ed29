//! The assignment engine.
//!
//! Pure planning functions plus the [`AssignmentEngine`] facade that
//! wires them to the snapshot providers. The facade resolves snapshots,
//! delegates to the algorithm modules, and persists committed outcomes;
//! it holds no household data between calls.
//!
//! # Modules
//!
//! - [`workload`]: per-member active-chore counting
//! - [`conflict`]: time-slot double-booking detection
//! - [`planner`]: fair bulk planning (shared by commit and preview)
//! - [`weekly`]: weekday-grouped planning for recurring chores
//! - [`rotation`]: round-robin advancement in roster order
//! - [`suggest`]: least-loaded member recommendation
//! - [`stats`]: plan quality metrics
//!
//! # Concurrency
//!
//! Every operation is a synchronous, single-pass computation over
//! snapshots. Preview and read operations are safe to run concurrently
//! with anything. Commit operations on the *same household* race with
//! each other (two callers can both read stale workloads, then both
//! persist); callers must serialize commits per household — a
//! per-household critical section or a version check before the bulk
//! write. That contract lives with the caller, not inside the engine.

pub mod conflict;
pub mod planner;
pub mod rotation;
pub mod stats;
pub mod suggest;
pub mod weekly;
pub mod workload;

pub use stats::PlanStats;
pub use weekly::PriorityOrder;

use thiserror::Error;
use tracing::debug;

use crate::models::{AssignmentPlan, Chore, Member, WorkloadTable};
use crate::store::{ChoreStore, MemberDirectory, StoreError};

/// Failure of a single engine operation.
///
/// A chore the planner cannot place is not a failure — it lands in
/// [`AssignmentPlan::skipped`] instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The referenced chore does not exist.
    #[error("chore '{0}' not found")]
    ChoreNotFound(String),
    /// The household is unknown or has no members.
    #[error("household '{0}' has no members")]
    NoMembers(String),
    /// No member can take the chore without a conflict.
    #[error("no conflict-free assignee for chore '{0}'")]
    NoCandidates(String),
    /// A provider failed; passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Engine tuning knobs.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Bucket priority policy for the weekly planner.
    pub weekly_priority: PriorityOrder,
}

impl EngineOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weekly planner's bucket priority policy.
    pub fn with_weekly_priority(mut self, order: PriorityOrder) -> Self {
        self.weekly_priority = order;
        self
    }
}

/// Facade over the planning algorithms and the snapshot providers.
///
/// # Example
///
/// ```
/// use chorewheel::engine::AssignmentEngine;
/// use chorewheel::models::{Chore, Member};
/// use chorewheel::store::InMemoryStore;
/// use chrono::{TimeZone, Utc, Weekday};
///
/// let store = InMemoryStore::new();
/// store.add_member(Member::new("alice", "h1"));
/// store.add_member(Member::new("bob", "h1"));
/// let created = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
/// store.add_chore(Chore::recurring("dishes", "h1", Weekday::Mon, created));
///
/// let engine = AssignmentEngine::new(store);
/// let plan = engine.auto_assign_all("h1").unwrap();
/// assert_eq!(plan.assignee_of("dishes"), Some("alice"));
/// ```
#[derive(Debug)]
pub struct AssignmentEngine<P> {
    provider: P,
    options: EngineOptions,
}

impl<P: ChoreStore + MemberDirectory> AssignmentEngine<P> {
    /// Creates an engine over a combined provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            options: EngineOptions::default(),
        }
    }

    /// Sets the engine options.
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Current per-member workload for a household.
    pub fn workload_stats(&self, household_id: &str) -> Result<WorkloadTable, EngineError> {
        let roster = self.roster(household_id)?;
        let active = self.provider.active_chores(household_id)?;
        Ok(workload::tally(&roster, &active))
    }

    /// Suggests the least-loaded member for a chore. Read-only.
    pub fn suggest_assignee(&self, chore_id: &str) -> Result<String, EngineError> {
        let chore = self.chore(chore_id)?;
        let roster = self.roster(&chore.household_id)?;
        let active = self.provider.active_chores(&chore.household_id)?;
        let table = workload::tally(&roster, &active);

        suggest::least_loaded(&roster, &table)
            .map(|m| m.id.clone())
            .ok_or_else(|| EngineError::NoMembers(chore.household_id.clone()))
    }

    /// Assigns one chore to the least-loaded conflict-free member and
    /// persists the result.
    ///
    /// Walks the balance order the way a single planner iteration would
    /// (cursor pinned at the front) and commits the first member the
    /// conflict detector accepts.
    pub fn assign_one(&self, chore_id: &str) -> Result<String, EngineError> {
        let chore = self.chore(chore_id)?;
        let roster = self.roster(&chore.household_id)?;
        let active = self.provider.active_chores(&chore.household_id)?;
        let table = workload::tally(&roster, &active);

        let candidates = table.balance_order(&roster);
        let member_id = candidates
            .iter()
            .find(|id| !conflict::would_conflict(&chore, id, &active, &[]))
            .ok_or_else(|| EngineError::NoCandidates(chore.id.clone()))?;

        debug!(chore = %chore.id, member = %member_id, "assigning single chore");
        self.provider.assign(&chore.id, member_id)?;
        Ok(member_id.clone())
    }

    /// Plans and persists assignments for every unassigned active chore.
    pub fn auto_assign_all(&self, household_id: &str) -> Result<AssignmentPlan, EngineError> {
        let plan = self.plan_for_household(household_id)?;
        self.provider.assign_bulk(&plan)?;
        Ok(plan)
    }

    /// Plans assignments without persisting anything.
    ///
    /// Shares the planning function with [`auto_assign_all`], so on an
    /// unchanged snapshot the preview matches the commit exactly.
    ///
    /// [`auto_assign_all`]: AssignmentEngine::auto_assign_all
    pub fn preview_auto_assign_all(
        &self,
        household_id: &str,
    ) -> Result<AssignmentPlan, EngineError> {
        self.plan_for_household(household_id)
    }

    /// Plans and persists weekday-grouped assignments for recurring
    /// chores.
    pub fn auto_assign_weekly(&self, household_id: &str) -> Result<AssignmentPlan, EngineError> {
        let roster = self.roster(household_id)?;
        let unassigned = self.provider.unassigned_active_chores(household_id)?;
        let active = self.provider.active_chores(household_id)?;
        let table = workload::tally(&roster, &active);

        let plan = weekly::plan_weekly(&unassigned, &roster, &table, self.options.weekly_priority);
        self.provider.assign_bulk(&plan)?;
        Ok(plan)
    }

    /// Moves a chore to the next member in roster order and persists the
    /// result.
    pub fn reassign_to_next(&self, chore_id: &str) -> Result<String, EngineError> {
        let chore = self.chore(chore_id)?;
        let roster = self.provider.household_members(&chore.household_id)?;
        let next = rotation::next_assignee(&chore, &roster)?;

        self.provider.assign(&chore.id, &next.id)?;
        Ok(next.id.clone())
    }

    fn plan_for_household(&self, household_id: &str) -> Result<AssignmentPlan, EngineError> {
        let roster = self.roster(household_id)?;
        let unassigned = self.provider.unassigned_active_chores(household_id)?;
        let active = self.provider.active_chores(household_id)?;
        let table = workload::tally(&roster, &active);

        Ok(planner::plan(&unassigned, &roster, &table, &active))
    }

    fn chore(&self, chore_id: &str) -> Result<Chore, EngineError> {
        self.provider
            .chore(chore_id)?
            .ok_or_else(|| EngineError::ChoreNotFound(chore_id.to_string()))
    }

    fn roster(&self, household_id: &str) -> Result<Vec<Member>, EngineError> {
        let roster = self.provider.household_members(household_id)?;
        if roster.is_empty() {
            return Err(EngineError::NoMembers(household_id.to_string()));
        }
        Ok(roster)
    }
}
