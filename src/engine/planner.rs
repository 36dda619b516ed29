//! Fair bulk assignment planning.
//!
//! # Algorithm
//!
//! 1. Order unassigned chores by priority descending, creation instant
//!    ascending on ties.
//! 2. Compute the balance order (members ascending by current workload)
//!    once, up front. The order is frozen for the whole pass: workload
//!    bumps during the pass feed the bookkeeping the caller sees, not the
//!    candidate scan. Per-run candidate order is frozen, not continuously
//!    rebalanced.
//! 3. Walk the chores with a rotating cursor. For each chore, scan up to
//!    `member_count` candidates starting at the cursor; the first
//!    conflict-free candidate takes the chore. The cursor advances after
//!    every chore whether or not it was placed, spreading consecutive
//!    equal-load chores across members instead of piling them on the
//!    least-loaded one.
//! 4. A chore no member can take without a conflict is skipped — recorded
//!    on the plan and logged, never an error.
//!
//! The function is pure over its snapshots. Both the committing
//! auto-assign operation and the preview operation call it with identical
//! inputs, which is what makes preview an exact prediction of commit.
//!
//! # Complexity
//! O(n log n + n * m * k) where n = chores, m = members, k = chores a
//! member already holds.

use tracing::{debug, warn};

use super::conflict::{would_conflict, PendingSlot};
use crate::models::{AssignmentPlan, Chore, Member, WorkloadTable};

/// Orders chores for planning: priority descending, then created-at
/// ascending so that same-priority chores are planned oldest first.
pub fn priority_order<'a>(chores: &'a [Chore]) -> Vec<&'a Chore> {
    let mut ordered: Vec<&Chore> = chores.iter().collect();
    ordered.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    ordered
}

/// Plans assignments for every currently-unassigned chore.
///
/// * `unassigned` — active, unassigned chores of the household.
/// * `roster` — current membership in declared order.
/// * `workload` — current per-member counts (from [`super::workload::tally`]).
/// * `active_chores` — all active chores, for conflict checks against
///   work that is already assigned.
///
/// Returns the plan; the caller decides whether to persist it.
pub fn plan(
    unassigned: &[Chore],
    roster: &[Member],
    workload: &WorkloadTable,
    active_chores: &[Chore],
) -> AssignmentPlan {
    let mut result = AssignmentPlan::new();
    if roster.is_empty() {
        return result;
    }

    let ordered = priority_order(unassigned);
    let candidates = workload.balance_order(roster);
    let member_count = candidates.len();

    // Working copy: bumped as chores are placed, reported to the caller
    // through stats, but never re-sorted within this pass.
    let mut working = workload.clone();
    let mut pending: Vec<PendingSlot> = Vec::new();
    let mut cursor = 0usize;

    for chore in ordered {
        let chosen = (0..member_count)
            .map(|offset| candidates[(cursor + offset) % member_count].as_str())
            .find(|member_id| !would_conflict(chore, member_id, active_chores, &pending));

        match chosen {
            Some(member_id) => {
                working.bump(member_id);
                debug!(
                    chore = %chore.id,
                    member = %member_id,
                    load = working.count_of(member_id),
                    "planned assignment"
                );
                if let Some(slot) = chore.conflict_slot() {
                    pending.push(PendingSlot {
                        member_id: member_id.to_string(),
                        slot,
                    });
                }
                result.add_assignment(&chore.id, member_id);
            }
            None => {
                warn!(chore = %chore.id, "no conflict-free member, leaving unassigned");
                result.add_skipped(&chore.id, "every member is occupied during its time slot");
            }
        }

        cursor += 1;
    }

    result
}
