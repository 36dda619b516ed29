//! Plan quality metrics.
//!
//! Summarizes what a planning pass did to the household: how much was
//! placed, how much was skipped, and how the projected per-member load
//! spreads out once the plan lands.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned / skipped count | Plan size vs. chores left over |
//! | Assignments by member | This plan's per-member delta |
//! | Min / max / mean load | Projected counts after the plan |
//! | Load spread | max − min projected load |

use std::collections::HashMap;

use crate::models::{AssignmentPlan, WorkloadTable};

/// Summary statistics for one planning pass.
#[derive(Debug, Clone)]
pub struct PlanStats {
    /// Chores placed by the plan.
    pub assigned_count: usize,
    /// Chores the plan could not place.
    pub skipped_count: usize,
    /// How many chores this plan gives each member.
    pub assignments_by_member: HashMap<String, u32>,
    /// Lowest projected load across members.
    pub min_projected_load: u32,
    /// Highest projected load across members.
    pub max_projected_load: u32,
    /// Mean projected load across members.
    pub mean_projected_load: f64,
    /// max − min projected load. Zero means a perfectly even household.
    pub load_spread: u32,
}

impl PlanStats {
    /// Computes statistics for a plan against the pre-plan workload.
    pub fn calculate(plan: &AssignmentPlan, workload_before: &WorkloadTable) -> Self {
        let mut by_member: HashMap<String, u32> = HashMap::new();
        let mut projected = workload_before.clone();

        for a in &plan.assignments {
            *by_member.entry(a.member_id.clone()).or_insert(0) += 1;
            projected.bump(&a.member_id);
        }

        let loads: Vec<u32> = projected.iter().map(|(_, count)| count).collect();
        let (min, max) = (
            loads.iter().copied().min().unwrap_or(0),
            loads.iter().copied().max().unwrap_or(0),
        );
        let mean = if loads.is_empty() {
            0.0
        } else {
            f64::from(loads.iter().sum::<u32>()) / loads.len() as f64
        };

        Self {
            assigned_count: plan.assignment_count(),
            skipped_count: plan.skipped.len(),
            assignments_by_member: by_member,
            min_projected_load: min,
            max_projected_load: max,
            mean_projected_load: mean,
            load_spread: max - min,
        }
    }

    /// Whether the projected loads stay within the given spread.
    pub fn is_balanced(&self, max_spread: u32) -> bool {
        self.load_spread <= max_spread
    }
}
