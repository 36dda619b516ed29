//! Snapshot integrity checks.
//!
//! Verifies structural integrity of chore and membership snapshots
//! before planning. Detects:
//! - Duplicate IDs
//! - One-off chores without a due date / recurring chores without a weekday
//! - Chores carrying both scheduling fields
//! - Estimates outside the plausible range
//! - Chores belonging to a different household than the roster
//!
//! Field-level form validation (names, formats) happens upstream in the
//! service layer; this module only guards the invariants the planning
//! algorithms rely on.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Chore, ChoreKind, Member, MAX_ESTIMATED_MINUTES, MIN_ESTIMATED_MINUTES};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A one-off chore has no due date.
    MissingDueDate,
    /// A recurring chore has no weekday.
    MissingWeekday,
    /// A chore carries both a due date and a weekday.
    AmbiguousSchedule,
    /// Estimated minutes fall outside the plausible range.
    ImplausibleEstimate,
    /// A chore's household differs from the roster's.
    ForeignHousehold,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates chore and membership snapshots for one household.
///
/// Checks:
/// 1. No duplicate chore IDs
/// 2. No duplicate member IDs
/// 3. Exactly one scheduling field set, matching the chore kind
/// 4. Estimated minutes within 5–480
/// 5. Every chore belongs to the roster's household
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(chores: &[Chore], members: &[Member]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut member_ids = HashSet::new();
    for m in members {
        if !member_ids.insert(m.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate member ID: {}", m.id),
            ));
        }
    }

    let household = members.first().map(|m| m.household_id.as_str());

    let mut chore_ids = HashSet::new();
    for chore in chores {
        if !chore_ids.insert(chore.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate chore ID: {}", chore.id),
            ));
        }

        match chore.kind {
            ChoreKind::OneTime => {
                if chore.due_at.is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::MissingDueDate,
                        format!("One-off chore '{}' has no due date", chore.id),
                    ));
                }
                if chore.weekday.is_some() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::AmbiguousSchedule,
                        format!("One-off chore '{}' also carries a weekday", chore.id),
                    ));
                }
            }
            ChoreKind::Recurring => {
                if chore.weekday.is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::MissingWeekday,
                        format!("Recurring chore '{}' has no weekday", chore.id),
                    ));
                }
                if chore.due_at.is_some() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::AmbiguousSchedule,
                        format!("Recurring chore '{}' also carries a due date", chore.id),
                    ));
                }
            }
        }

        if chore.estimated_minutes < MIN_ESTIMATED_MINUTES
            || chore.estimated_minutes > MAX_ESTIMATED_MINUTES
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::ImplausibleEstimate,
                format!(
                    "Chore '{}' estimates {} minutes (expected {}-{})",
                    chore.id, chore.estimated_minutes, MIN_ESTIMATED_MINUTES, MAX_ESTIMATED_MINUTES
                ),
            ));
        }

        if let Some(household_id) = household {
            if chore.household_id != household_id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ForeignHousehold,
                    format!(
                        "Chore '{}' belongs to household '{}', roster is '{}'",
                        chore.id, chore.household_id, household_id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
