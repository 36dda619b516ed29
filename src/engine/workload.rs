//! Workload accounting.
//!
//! Counts each member's currently active assigned chores. The resulting
//! table always has one entry per current member (zero included) so that
//! statistics are complete and the balance order covers everyone.
//!
//! Chores assigned to someone who has since left the household do not
//! create entries — `WorkloadTable::bump` ignores ids outside the roster.

use crate::models::{Chore, Member, WorkloadTable};

/// Tallies active assigned chores per member.
///
/// Pure read over the snapshots: initializes every roster member to zero,
/// then counts each active chore against its assignee.
pub fn tally(roster: &[Member], active_chores: &[Chore]) -> WorkloadTable {
    let mut table = WorkloadTable::for_members(roster);

    for chore in active_chores.iter().filter(|c| c.active) {
        if let Some(member_id) = &chore.assigned_to {
            table.bump(member_id);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chore;
    use chrono::{TimeZone, Utc};

    fn due() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap()
    }

    fn roster() -> Vec<Member> {
        vec![Member::new("alice", "h1"), Member::new("bob", "h1")]
    }

    #[test]
    fn test_tally_counts_assigned_active() {
        let chores = vec![
            Chore::one_time("c1", "h1", due()).with_assignee("alice"),
            Chore::one_time("c2", "h1", due()).with_assignee("alice"),
            Chore::one_time("c3", "h1", due()).with_assignee("bob"),
            Chore::one_time("c4", "h1", due()), // unassigned
        ];

        let table = tally(&roster(), &chores);
        assert_eq!(table.count_of("alice"), 2);
        assert_eq!(table.count_of("bob"), 1);
    }

    #[test]
    fn test_tally_zero_entry_for_idle_member() {
        let table = tally(&roster(), &[]);
        assert_eq!(table.member_count(), 2);
        assert_eq!(table.count_of("alice"), 0);
        assert_eq!(table.count_of("bob"), 0);
    }

    #[test]
    fn test_tally_skips_inactive() {
        let chores = vec![Chore::one_time("c1", "h1", due())
            .with_assignee("alice")
            .inactive()];

        let table = tally(&roster(), &chores);
        assert_eq!(table.count_of("alice"), 0);
    }

    #[test]
    fn test_tally_ignores_departed_assignee() {
        let chores = vec![Chore::one_time("c1", "h1", due()).with_assignee("departed")];

        let table = tally(&roster(), &chores);
        assert_eq!(table.member_count(), 2);
        assert!(!table.tracks("departed"));
    }
}
