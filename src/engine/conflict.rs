//! Time conflict detection for dated chores.
//!
//! A one-off chore occupies its assignee for `[due, due + estimate)`.
//! Assigning it to a member already occupied during any part of that
//! interval would double-book them, so the planner rejects the candidate
//! and tries the next one. Recurring chores carry no instant and never
//! conflict.
//!
//! The check covers two interval sources: chores already assigned in the
//! snapshot, and chores placed earlier within the same planning pass (the
//! `pending` list) — a single pass must not double-book a member across
//! two chores it is about to hand out together.

use crate::models::{Chore, ChoreKind, TimeSlot};

/// A slot claimed earlier in the current planning pass.
#[derive(Debug, Clone)]
pub struct PendingSlot {
    /// Member the slot was claimed for.
    pub member_id: String,
    /// The claimed interval.
    pub slot: TimeSlot,
}

/// Whether giving `chore` to `member_id` would double-book them.
///
/// Scans the member's other active one-off chores in `active_chores`
/// (excluding `chore` itself by id) and the `pending` slots from the
/// current pass. Returns on the first overlap found.
pub fn would_conflict(
    chore: &Chore,
    member_id: &str,
    active_chores: &[Chore],
    pending: &[PendingSlot],
) -> bool {
    let slot = match chore.conflict_slot() {
        Some(slot) => slot,
        None => return false, // recurring or undated: nothing to overlap
    };

    let assigned_overlap = active_chores.iter().any(|other| {
        other.id != chore.id
            && other.active
            && other.kind == ChoreKind::OneTime
            && other.assigned_to.as_deref() == Some(member_id)
            && other
                .conflict_slot()
                .is_some_and(|theirs| slot.overlaps(&theirs))
    });
    if assigned_overlap {
        return true;
    }

    pending
        .iter()
        .any(|p| p.member_id == member_id && slot.overlaps(&p.slot))
}
