//! Single-assignee suggestion.
//!
//! Recommends the least-loaded member for one chore. Ties are broken by
//! roster order so repeated calls with unchanged state return the same
//! member.

use crate::models::{Member, WorkloadTable};

/// The member with the lowest current workload, or `None` for an empty
/// roster. `min_by_key` keeps the first minimum it sees, which is exactly
/// the roster-order tie-break.
pub fn least_loaded<'a>(roster: &'a [Member], workload: &WorkloadTable) -> Option<&'a Member> {
    roster.iter().min_by_key(|m| workload.count_of(&m.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Member> {
        vec![
            Member::new("alice", "h1"),
            Member::new("bob", "h1"),
            Member::new("carol", "h1"),
        ]
    }

    #[test]
    fn test_picks_lowest_count() {
        let members = roster();
        let mut workload = WorkloadTable::for_members(&members);
        workload.bump("alice");
        workload.bump("alice");
        workload.bump("bob");
        workload.bump("bob");
        workload.bump("carol");

        let pick = least_loaded(&members, &workload).unwrap();
        assert_eq!(pick.id, "carol");
    }

    #[test]
    fn test_tie_breaks_by_roster_order() {
        let members = roster();
        let workload = WorkloadTable::for_members(&members);

        // All zero → first roster member wins, every time.
        for _ in 0..3 {
            assert_eq!(least_loaded(&members, &workload).unwrap().id, "alice");
        }
    }

    #[test]
    fn test_empty_roster_yields_none() {
        assert!(least_loaded(&[], &WorkloadTable::default()).is_none());
    }
}
