//! Chore model.
//!
//! A chore is a unit of household work to be assigned to a member.
//! It is either one-off (fixed due instant) or recurring (fixed weekday);
//! exactly one of the two scheduling fields is set, determined by the
//! kind. The constructors enforce this — there is no way to build a
//! one-off chore without a due date or a recurring chore without a
//! weekday through the public API.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Lower bound for a plausible chore duration (minutes).
pub const MIN_ESTIMATED_MINUTES: u32 = 5;
/// Upper bound for a plausible chore duration (minutes).
pub const MAX_ESTIMATED_MINUTES: u32 = 480;

/// A household chore to be assigned.
///
/// The engine treats chores as immutable snapshots: planning reads them
/// and returns chore-id → member-id pairs, it never mutates a chore in
/// place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chore {
    /// Unique chore identifier.
    pub id: String,
    /// Household this chore belongs to.
    pub household_id: String,
    /// Human-readable name.
    pub name: String,
    /// One-off or recurring.
    pub kind: ChoreKind,
    /// Assignment priority.
    pub priority: Priority,
    /// Expected effort in minutes (plausible range 5–480).
    pub estimated_minutes: u32,
    /// Due instant. Set iff `kind` is `OneTime`.
    pub due_at: Option<DateTime<Utc>>,
    /// Scheduled weekday. Set iff `kind` is `Recurring`.
    pub weekday: Option<Weekday>,
    /// Current assignee, if any.
    pub assigned_to: Option<String>,
    /// Whether the chore counts toward workload and planning.
    pub active: bool,
    /// Creation instant, used as a stable tie-break in planning order.
    pub created_at: DateTime<Utc>,
}

/// Chore scheduling kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoreKind {
    /// Fixed due instant, occupies a time slot.
    OneTime,
    /// Fixed weekday, no time slot.
    Recurring,
}

/// Assignment priority.
///
/// Ordered `Low < Medium < High` so that descending sort puts the most
/// important chores first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Chore {
    /// Creates a one-off chore due at the given instant.
    ///
    /// `created_at` defaults to the due instant; override it with
    /// [`with_created_at`](Self::with_created_at) when the two differ.
    pub fn one_time(
        id: impl Into<String>,
        household_id: impl Into<String>,
        due_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            household_id: household_id.into(),
            name: String::new(),
            kind: ChoreKind::OneTime,
            priority: Priority::Medium,
            estimated_minutes: 30,
            due_at: Some(due_at),
            weekday: None,
            assigned_to: None,
            active: true,
            created_at: due_at,
        }
    }

    /// Creates a recurring chore on the given weekday.
    ///
    /// `created_at` is required up front because recurring chores carry
    /// no other instant to anchor the planning tie-break.
    pub fn recurring(
        id: impl Into<String>,
        household_id: impl Into<String>,
        weekday: Weekday,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            household_id: household_id.into(),
            name: String::new(),
            kind: ChoreKind::Recurring,
            priority: Priority::Medium,
            estimated_minutes: 30,
            due_at: None,
            weekday: Some(weekday),
            assigned_to: None,
            active: true,
            created_at,
        }
    }

    /// Sets the chore name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the estimated effort in minutes.
    pub fn with_estimated_minutes(mut self, minutes: u32) -> Self {
        self.estimated_minutes = minutes;
        self
    }

    /// Sets the current assignee.
    pub fn with_assignee(mut self, member_id: impl Into<String>) -> Self {
        self.assigned_to = Some(member_id.into());
        self
    }

    /// Sets the creation instant.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the chore inactive.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Whether the chore is currently assigned.
    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }

    /// The time slot this chore occupies: `[due, due + minutes)`.
    ///
    /// Returns `None` for recurring chores — they carry no instant and
    /// never conflict. The slot duration is floored to one minute even if
    /// the estimate is recorded as zero.
    pub fn conflict_slot(&self) -> Option<TimeSlot> {
        match self.kind {
            ChoreKind::Recurring => None,
            ChoreKind::OneTime => self
                .due_at
                .map(|due| TimeSlot::from_start(due, i64::from(self.estimated_minutes))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn monday_10h() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_one_time_builder() {
        let chore = Chore::one_time("c1", "h1", monday_10h())
            .with_name("Deep-clean fridge")
            .with_priority(Priority::High)
            .with_estimated_minutes(90)
            .with_assignee("alice");

        assert_eq!(chore.id, "c1");
        assert_eq!(chore.kind, ChoreKind::OneTime);
        assert_eq!(chore.priority, Priority::High);
        assert_eq!(chore.due_at, Some(monday_10h()));
        assert_eq!(chore.weekday, None);
        assert_eq!(chore.assigned_to.as_deref(), Some("alice"));
        assert!(chore.active);
    }

    #[test]
    fn test_recurring_builder() {
        let chore = Chore::recurring("c2", "h1", Weekday::Wed, monday_10h()).with_name("Trash");

        assert_eq!(chore.kind, ChoreKind::Recurring);
        assert_eq!(chore.weekday, Some(Weekday::Wed));
        assert_eq!(chore.due_at, None);
        assert!(!chore.is_assigned());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_conflict_slot_one_time() {
        let chore = Chore::one_time("c1", "h1", monday_10h()).with_estimated_minutes(60);
        let slot = chore.conflict_slot().unwrap();
        assert_eq!(slot.start, monday_10h());
        assert_eq!(slot.duration_minutes(), 60);
    }

    #[test]
    fn test_conflict_slot_zero_estimate_floors() {
        let chore = Chore::one_time("c1", "h1", monday_10h()).with_estimated_minutes(0);
        let slot = chore.conflict_slot().unwrap();
        assert_eq!(slot.duration_minutes(), 1);
    }

    #[test]
    fn test_conflict_slot_recurring_is_none() {
        let chore = Chore::recurring("c2", "h1", Weekday::Sat, monday_10h());
        assert!(chore.conflict_slot().is_none());
    }

    #[test]
    fn test_chore_from_json_snapshot() {
        // The wire shape a service layer hands over.
        let chore: Chore = serde_json::from_str(
            r#"{
                "id": "c9",
                "household_id": "h1",
                "name": "Water plants",
                "kind": "Recurring",
                "priority": "Low",
                "estimated_minutes": 10,
                "due_at": null,
                "weekday": "Sun",
                "assigned_to": null,
                "active": true,
                "created_at": "2025-06-02T10:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(chore.kind, ChoreKind::Recurring);
        assert_eq!(chore.weekday, Some(Weekday::Sun));
        assert_eq!(chore.priority, Priority::Low);
        assert_eq!(chore.created_at, monday_10h());
    }
}
