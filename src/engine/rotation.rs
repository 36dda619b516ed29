//! Round-robin rotation for a single chore.
//!
//! Moves a chore to the next member in the household's declared roster
//! order — not the balance order. Rotation is about whose turn it is,
//! which must stay stable as workloads shift.

use super::EngineError;
use crate::models::{Chore, Member};

/// The member after the chore's current assignee in roster order.
///
/// An unassigned chore rotates to the first roster member. An assignee
/// who has left the household wraps the same way: their index is treated
/// as "before the start". A one-member household rotates onto that member.
///
/// # Errors
/// [`EngineError::NoMembers`] when the roster is empty.
pub fn next_assignee<'a>(chore: &Chore, roster: &'a [Member]) -> Result<&'a Member, EngineError> {
    if roster.is_empty() {
        return Err(EngineError::NoMembers(chore.household_id.clone()));
    }

    let current = chore
        .assigned_to
        .as_deref()
        .and_then(|id| roster.iter().position(|m| m.id == id));

    let next = match current {
        Some(index) => (index + 1) % roster.len(),
        None => 0,
    };

    Ok(&roster[next])
}
