//! Assignment plan model.
//!
//! A plan is the output of one planning pass: the chore → member pairs
//! that would be (preview) or have been (commit) assigned, plus the
//! chores the pass could not place. A skipped chore is a normal outcome,
//! not an error — it simply stays unassigned until a later pass or a
//! manual assignment.

use serde::{Deserialize, Serialize};

/// A complete plan produced by one planning pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentPlan {
    /// Chore → member pairs placed by this pass.
    pub assignments: Vec<PlannedAssignment>,
    /// Chores the pass could not place without a conflict.
    pub skipped: Vec<SkippedChore>,
}

/// A single chore → member pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedAssignment {
    /// Assigned chore ID.
    pub chore_id: String,
    /// Receiving member ID.
    pub member_id: String,
}

/// A chore left unassigned by a planning pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedChore {
    /// The chore that could not be placed.
    pub chore_id: String,
    /// Human-readable reason.
    pub reason: String,
}

impl AssignmentPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a chore → member pair.
    pub fn add_assignment(&mut self, chore_id: impl Into<String>, member_id: impl Into<String>) {
        self.assignments.push(PlannedAssignment {
            chore_id: chore_id.into(),
            member_id: member_id.into(),
        });
    }

    /// Records a chore this pass could not place.
    pub fn add_skipped(&mut self, chore_id: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedChore {
            chore_id: chore_id.into(),
            reason: reason.into(),
        });
    }

    /// The member a chore is planned onto, if any.
    pub fn assignee_of(&self, chore_id: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.chore_id == chore_id)
            .map(|a| a.member_id.as_str())
    }

    /// All chore ids planned onto a member.
    pub fn chores_for(&self, member_id: &str) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.member_id == member_id)
            .map(|a| a.chore_id.as_str())
            .collect()
    }

    /// Whether this pass placed the chore.
    pub fn contains_chore(&self, chore_id: &str) -> bool {
        self.assignee_of(chore_id).is_some()
    }

    /// Number of placed chores.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether every chore the pass saw was placed.
    pub fn is_fully_assigned(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> AssignmentPlan {
        let mut p = AssignmentPlan::new();
        p.add_assignment("dishes", "alice");
        p.add_assignment("vacuum", "bob");
        p.add_assignment("laundry", "alice");
        p.add_skipped("windows", "every member busy at 10:00");
        p
    }

    #[test]
    fn test_assignee_lookup() {
        let p = sample_plan();
        assert_eq!(p.assignee_of("dishes"), Some("alice"));
        assert_eq!(p.assignee_of("windows"), None);
        assert!(p.contains_chore("vacuum"));
        assert!(!p.contains_chore("windows"));
    }

    #[test]
    fn test_chores_for_member() {
        let p = sample_plan();
        assert_eq!(p.chores_for("alice"), vec!["dishes", "laundry"]);
        assert_eq!(p.chores_for("carol"), Vec::<&str>::new());
    }

    #[test]
    fn test_skip_is_not_an_error() {
        let p = sample_plan();
        assert_eq!(p.assignment_count(), 3);
        assert!(!p.is_fully_assigned());
        assert_eq!(p.skipped[0].chore_id, "windows");
    }

    #[test]
    fn test_empty_plan() {
        let p = AssignmentPlan::new();
        assert_eq!(p.assignment_count(), 0);
        assert!(p.is_fully_assigned());
    }
}
