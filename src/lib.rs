//! Chore assignment engine for shared households.
//!
//! Decides who does which household chore: counts each member's current
//! load, plans fair bulk assignments with time-conflict avoidance,
//! groups recurring chores by weekday, rotates single chores round-robin,
//! and suggests assignees. Everything operates on snapshots handed in by
//! the caller's persistence layer — the engine never owns the data.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Chore`, `Member`, `TimeSlot`,
//!   `WorkloadTable`, `AssignmentPlan`
//! - **`engine`**: The algorithms — workload accounting, conflict
//!   detection, bulk/weekly planning, rotation, suggestion, plan stats —
//!   and the `AssignmentEngine` facade
//! - **`store`**: Snapshot provider traits and an in-memory
//!   implementation
//! - **`validation`**: Input integrity checks (duplicate IDs, scheduling
//!   field invariants, estimate ranges)
//!
//! # Architecture
//!
//! The planning core is pure: `engine::planner::plan` takes immutable
//! snapshots and returns an [`models::AssignmentPlan`]. The committing
//! operations and their preview twins are thin wrappers around the same
//! functions, which is what guarantees that a preview predicts a commit
//! exactly. Side effects live behind the `store` traits.
//!
//! Chores the planner cannot place without double-booking someone are
//! skipped, not failed: they stay on the plan's `skipped` list and the
//! chores remain unassigned for a later pass.

pub mod engine;
pub mod models;
pub mod store;
pub mod validation;

pub use engine::{AssignmentEngine, EngineError, EngineOptions, PlanStats, PriorityOrder};
pub use models::{AssignmentPlan, Chore, ChoreKind, Member, Priority, TimeSlot, WorkloadTable};
