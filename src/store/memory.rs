//! In-memory snapshot provider.
//!
//! Backs the engine with plain vectors behind a mutex. Used by the test
//! suite and by embedding callers that keep household state in process;
//! anything durable implements the traits against its own storage.

use std::sync::Mutex;

use super::{ChoreStore, MemberDirectory, StoreError};
use crate::models::{AssignmentPlan, Chore, Member};

#[derive(Debug, Default)]
struct State {
    chores: Vec<Chore>,
    members: Vec<Member>,
}

/// Mutex-backed provider holding chores and members in insertion order.
///
/// Insertion order is the contract: members are listed in join order,
/// which is the roster order the rotation advancer cycles through.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a chore.
    pub fn add_chore(&self, chore: Chore) {
        self.lock_unpoisoned().chores.push(chore);
    }

    /// Adds a member. Join order is the order of these calls.
    pub fn add_member(&self, member: Member) {
        self.lock_unpoisoned().members.push(member);
    }

    fn lock_unpoisoned(&self) -> std::sync::MutexGuard<'_, State> {
        // A poisoned lock means a panic mid-push; the data itself is
        // still a consistent Vec, so recover the guard.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ChoreStore for InMemoryStore {
    fn chore(&self, chore_id: &str) -> Result<Option<Chore>, StoreError> {
        let state = self.lock_unpoisoned();
        Ok(state.chores.iter().find(|c| c.id == chore_id).cloned())
    }

    fn unassigned_active_chores(&self, household_id: &str) -> Result<Vec<Chore>, StoreError> {
        let state = self.lock_unpoisoned();
        Ok(state
            .chores
            .iter()
            .filter(|c| c.household_id == household_id && c.active && !c.is_assigned())
            .cloned()
            .collect())
    }

    fn active_chores(&self, household_id: &str) -> Result<Vec<Chore>, StoreError> {
        let state = self.lock_unpoisoned();
        Ok(state
            .chores
            .iter()
            .filter(|c| c.household_id == household_id && c.active)
            .cloned()
            .collect())
    }

    fn assign(&self, chore_id: &str, member_id: &str) -> Result<(), StoreError> {
        let mut state = self.lock_unpoisoned();
        let chore = state
            .chores
            .iter_mut()
            .find(|c| c.id == chore_id)
            .ok_or_else(|| StoreError::new(format!("unknown chore '{chore_id}'")))?;
        chore.assigned_to = Some(member_id.to_string());
        Ok(())
    }

    fn assign_bulk(&self, plan: &AssignmentPlan) -> Result<(), StoreError> {
        let mut state = self.lock_unpoisoned();
        for pair in &plan.assignments {
            let chore = state
                .chores
                .iter_mut()
                .find(|c| c.id == pair.chore_id)
                .ok_or_else(|| StoreError::new(format!("unknown chore '{}'", pair.chore_id)))?;
            chore.assigned_to = Some(pair.member_id.clone());
        }
        Ok(())
    }
}

impl MemberDirectory for InMemoryStore {
    fn household_members(&self, household_id: &str) -> Result<Vec<Member>, StoreError> {
        let state = self.lock_unpoisoned();
        Ok(state
            .members
            .iter()
            .filter(|m| m.household_id == household_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn due() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap()
    }

    fn sample_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.add_member(Member::new("alice", "h1"));
        store.add_member(Member::new("bob", "h1"));
        store.add_chore(Chore::one_time("c1", "h1", due()).with_assignee("alice"));
        store.add_chore(Chore::one_time("c2", "h1", due()));
        store.add_chore(Chore::one_time("c3", "h1", due()).inactive());
        store.add_chore(Chore::one_time("other", "h2", due()));
        store
    }

    #[test]
    fn test_chore_lookup() {
        let store = sample_store();
        assert_eq!(store.chore("c1").unwrap().unwrap().id, "c1");
        assert!(store.chore("nope").unwrap().is_none());
    }

    #[test]
    fn test_household_filters() {
        let store = sample_store();
        let active = store.active_chores("h1").unwrap();
        assert_eq!(active.len(), 2); // c3 inactive, "other" elsewhere

        let unassigned = store.unassigned_active_chores("h1").unwrap();
        assert_eq!(unassigned.len(), 1);
        assert_eq!(unassigned[0].id, "c2");
    }

    #[test]
    fn test_members_in_join_order() {
        let store = sample_store();
        let members = store.household_members("h1").unwrap();
        let ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["alice", "bob"]);
        assert!(store.household_members("h9").unwrap().is_empty());
    }

    #[test]
    fn test_assign_and_bulk() {
        let store = sample_store();
        store.assign("c2", "bob").unwrap();
        assert_eq!(
            store.chore("c2").unwrap().unwrap().assigned_to.as_deref(),
            Some("bob")
        );

        let mut plan = AssignmentPlan::new();
        plan.add_assignment("c1", "bob");
        store.assign_bulk(&plan).unwrap();
        assert_eq!(
            store.chore("c1").unwrap().unwrap().assigned_to.as_deref(),
            Some("bob")
        );

        plan.add_assignment("ghost", "bob");
        assert!(store.assign_bulk(&plan).is_err());
    }
}
