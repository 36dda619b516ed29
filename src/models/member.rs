//! Member model.
//!
//! Members are the people chores get assigned to. A member belongs to
//! exactly one household. Membership lists handed to the engine are in
//! stable declared order (join order) — that order is the rotation order
//! and the deterministic tie-break throughout the engine.

use serde::{Deserialize, Serialize};

/// A household member eligible for chore assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    /// Unique member identifier.
    pub id: String,
    /// Household this member belongs to.
    pub household_id: String,
    /// Human-readable name.
    pub name: String,
}

impl Member {
    /// Creates a new member.
    pub fn new(id: impl Into<String>, household_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            household_id: household_id.into(),
            name: String::new(),
        }
    }

    /// Sets the member name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
