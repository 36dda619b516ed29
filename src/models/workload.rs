//! Workload table model.
//!
//! Maps each household member to the number of active chores currently
//! assigned to them. The table always carries one entry per current
//! member — members with nothing assigned sit at zero rather than being
//! absent — so callers can render complete statistics and the planner can
//! order every member, not just the busy ones.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Member;

/// Per-member count of active assigned chores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkloadTable {
    counts: HashMap<String, u32>,
}

impl WorkloadTable {
    /// Creates a table with a zero entry for every given member.
    pub fn for_members(members: &[Member]) -> Self {
        Self {
            counts: members.iter().map(|m| (m.id.clone(), 0)).collect(),
        }
    }

    /// Count for a member. Zero for ids the table does not track.
    pub fn count_of(&self, member_id: &str) -> u32 {
        self.counts.get(member_id).copied().unwrap_or(0)
    }

    /// Whether the table tracks this member.
    pub fn tracks(&self, member_id: &str) -> bool {
        self.counts.contains_key(member_id)
    }

    /// Increments a tracked member's count. Ids outside the household are
    /// ignored — the accountant never grows the table past the membership.
    pub fn bump(&mut self, member_id: &str) {
        if let Some(count) = self.counts.get_mut(member_id) {
            *count += 1;
        }
    }

    /// Number of members tracked.
    pub fn member_count(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table tracks no members.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over (member id, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(id, &c)| (id.as_str(), c))
    }

    /// Member ids sorted ascending by load — the balance order.
    ///
    /// Ties are broken by the roster's declared order, which is why the
    /// roster is passed in rather than sorting the map's keys: the result
    /// is deterministic across calls with unchanged state. Roster entries
    /// the table does not track sort as zero-load.
    pub fn balance_order(&self, roster: &[Member]) -> Vec<String> {
        let mut ids: Vec<&Member> = roster.iter().collect();
        ids.sort_by_key(|m| self.count_of(&m.id));
        ids.into_iter().map(|m| m.id.clone()).collect()
    }
}
