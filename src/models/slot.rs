//! Time slot model.
//!
//! Defines the half-open interval during which a dated chore occupies
//! its assignee. Overlap between two slots on the same member is what
//! the conflict detector rejects.
//!
//! # Time Model
//! Instants are UTC (`chrono::DateTime<Utc>`). A slot covers
//! `[start, end)`: the start instant is included, the end instant is not,
//! so back-to-back chores (one ending exactly when the next begins) do
//! not overlap.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    /// Interval start (inclusive).
    pub start: DateTime<Utc>,
    /// Interval end (exclusive).
    pub end: DateTime<Utc>,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Creates a slot starting at `start` and lasting `minutes`.
    ///
    /// Durations below one minute are raised to one minute so that every
    /// slot remains a detectable, non-empty interval.
    pub fn from_start(start: DateTime<Utc>, minutes: i64) -> Self {
        Self {
            start,
            end: start + Duration::minutes(minutes.max(1)),
        }
    }

    /// Slot length in whole minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether an instant falls within this slot.
    #[inline]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at < self.end
    }

    /// Whether two slots overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, hour, min, 0).unwrap()
    }

    #[test]
    fn test_slot_contains() {
        let s = TimeSlot::new(at(10, 0), at(11, 0));
        assert_eq!(s.duration_minutes(), 60);
        assert!(s.contains(at(10, 0)));
        assert!(s.contains(at(10, 59)));
        assert!(!s.contains(at(11, 0))); // exclusive end
        assert!(!s.contains(at(9, 59)));
    }

    #[test]
    fn test_slot_overlap() {
        let a = TimeSlot::new(at(10, 0), at(11, 0));
        let b = TimeSlot::new(at(10, 30), at(11, 30));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeSlot::new(at(11, 0), at(12, 0)); // touching but not overlapping
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_from_start_floors_to_one_minute() {
        let s = TimeSlot::from_start(at(10, 0), 0);
        assert_eq!(s.duration_minutes(), 1);

        let s2 = TimeSlot::from_start(at(10, 0), 45);
        assert_eq!(s2.duration_minutes(), 45);
    }
}
