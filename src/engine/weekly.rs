//! Weekday-grouped planning for recurring chores.
//!
//! Groups active, unassigned recurring chores by their scheduled weekday
//! and assigns each bucket round-robin through the balance order.
//! Recurring chores carry no time slot, so there is no conflict check —
//! every chore in every bucket gets placed.
//!
//! Unlike the bulk planner, the balance order here is re-derived per
//! bucket from a workload table that is bumped across *all* buckets, so
//! the week balances globally rather than day by day in isolation.
//! Buckets are processed in fixed Monday → Sunday order to keep the
//! outcome reproducible.

use chrono::Weekday;
use tracing::debug;

use crate::models::{AssignmentPlan, Chore, ChoreKind, Member, WorkloadTable};

/// Bucket sort direction for chore priority.
///
/// The engine defaults to descending, matching the bulk planner.
/// Ascending restores the legacy ordering for callers that depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityOrder {
    /// Highest priority first.
    #[default]
    Descending,
    /// Lowest priority first.
    Ascending,
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Plans weekday-grouped assignments for recurring chores.
///
/// * `unassigned` — active, unassigned chores; anything that is not
///   recurring is ignored here.
/// * `roster` — current membership in declared order.
/// * `workload` — current per-member counts, shared across buckets.
/// * `order` — bucket priority policy.
pub fn plan_weekly(
    unassigned: &[Chore],
    roster: &[Member],
    workload: &WorkloadTable,
    order: PriorityOrder,
) -> AssignmentPlan {
    let mut result = AssignmentPlan::new();
    if roster.is_empty() {
        return result;
    }

    let mut working = workload.clone();

    for weekday in WEEK {
        let mut bucket: Vec<&Chore> = unassigned
            .iter()
            .filter(|c| {
                c.active
                    && !c.is_assigned()
                    && c.kind == ChoreKind::Recurring
                    && c.weekday == Some(weekday)
            })
            .collect();
        if bucket.is_empty() {
            continue;
        }

        bucket.sort_by(|a, b| {
            let by_priority = match order {
                PriorityOrder::Descending => b.priority.cmp(&a.priority),
                PriorityOrder::Ascending => a.priority.cmp(&b.priority),
            };
            by_priority.then_with(|| a.created_at.cmp(&b.created_at))
        });

        // Balance order reflects assignments made in earlier buckets.
        let candidates = working.balance_order(roster);
        debug!(?weekday, chores = bucket.len(), "planning weekday bucket");

        for (i, chore) in bucket.iter().enumerate() {
            let member_id = &candidates[i % candidates.len()];
            working.bump(member_id);
            result.add_assignment(&chore.id, member_id);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::workload::tally;
    use crate::models::Priority;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, hour, 0, 0).unwrap()
    }

    fn roster(ids: &[&str]) -> Vec<Member> {
        ids.iter().map(|id| Member::new(*id, "h1")).collect()
    }

    fn monday_chore(id: &str, hour: u32) -> Chore {
        Chore::recurring(id, "h1", Weekday::Mon, at(hour))
    }

    #[test]
    fn test_bucket_splits_evenly() {
        let members = roster(&["alice", "bob"]);
        let chores = vec![
            monday_chore("m1", 1),
            monday_chore("m2", 2),
            monday_chore("m3", 3),
            monday_chore("m4", 4),
        ];
        let workload = tally(&members, &[]);

        let result = plan_weekly(&chores, &members, &workload, PriorityOrder::default());
        assert_eq!(result.assignment_count(), 4);
        assert_eq!(result.chores_for("alice").len(), 2);
        assert_eq!(result.chores_for("bob").len(), 2);
    }

    #[test]
    fn test_workload_carries_across_buckets() {
        let members = roster(&["alice", "bob"]);
        let chores = vec![
            monday_chore("mon", 1),
            Chore::recurring("tue", "h1", Weekday::Tue, at(2)),
        ];
        let workload = tally(&members, &[]);

        let result = plan_weekly(&chores, &members, &workload, PriorityOrder::default());
        // Monday's chore loads alice; Tuesday's balance order then leads
        // with bob.
        assert_eq!(result.assignee_of("mon"), Some("alice"));
        assert_eq!(result.assignee_of("tue"), Some("bob"));
    }

    #[test]
    fn test_priority_descending_within_bucket() {
        let members = roster(&["alice", "bob"]);
        let chores = vec![
            monday_chore("low", 1).with_priority(Priority::Low),
            monday_chore("high", 2).with_priority(Priority::High),
        ];
        let workload = tally(&members, &[]);

        let result = plan_weekly(&chores, &members, &workload, PriorityOrder::Descending);
        // High-priority chore planned first → lands on the least-loaded
        // front of the balance order.
        assert_eq!(result.assignee_of("high"), Some("alice"));
        assert_eq!(result.assignee_of("low"), Some("bob"));
    }

    #[test]
    fn test_priority_ascending_policy() {
        let members = roster(&["alice", "bob"]);
        let chores = vec![
            monday_chore("low", 1).with_priority(Priority::Low),
            monday_chore("high", 2).with_priority(Priority::High),
        ];
        let workload = tally(&members, &[]);

        let result = plan_weekly(&chores, &members, &workload, PriorityOrder::Ascending);
        assert_eq!(result.assignee_of("low"), Some("alice"));
        assert_eq!(result.assignee_of("high"), Some("bob"));
    }

    #[test]
    fn test_one_time_chores_ignored() {
        let members = roster(&["alice"]);
        let chores = vec![Chore::one_time("dated", "h1", at(10))];
        let workload = tally(&members, &[]);

        let result = plan_weekly(&chores, &members, &workload, PriorityOrder::default());
        assert_eq!(result.assignment_count(), 0);
    }

    #[test]
    fn test_empty_roster_plans_nothing() {
        let chores = vec![monday_chore("m1", 1)];
        let result = plan_weekly(
            &chores,
            &[],
            &WorkloadTable::default(),
            PriorityOrder::default(),
        );
        assert_eq!(result.assignment_count(), 0);
    }
}
