//! Roster validation.
//!
//! The scheduler assumes well-formed entities; these checks are for the
//! defensive caller that wants to reject a roster before asking for a
//! rotation. Detects:
//! - Duplicate presenter or table IDs
//! - Duplicate table floor numbers
//! - Zero table numbers (numbers must be positive)
//! - Empty display names

use crate::models::{Presenter, Table};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
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
    /// Two tables share the same floor number.
    DuplicateTableNumber,
    /// A table number is not positive.
    InvalidTableNumber,
    /// A presenter or table has an empty display name.
    EmptyName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster before scheduling.
///
/// Checks:
/// 1. No duplicate presenter IDs
/// 2. No duplicate table IDs
/// 3. No duplicate table numbers
/// 4. All table numbers positive
/// 5. All entities have a display name
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(presenters: &[Presenter], tables: &[Table]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut presenter_ids = HashSet::new();
    for p in presenters {
        if !presenter_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate presenter ID: {}", p.id),
            ));
        }
        if p.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Presenter '{}' has no name", p.id),
            ));
        }
    }

    let mut table_ids = HashSet::new();
    let mut table_numbers = HashSet::new();
    for t in tables {
        if !table_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate table ID: {}", t.id),
            ));
        }
        if t.number == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTableNumber,
                format!("Table '{}' has number 0; numbers must be positive", t.id),
            ));
        } else if !table_numbers.insert(t.number) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTableNumber,
                format!("Duplicate table number: {}", t.number),
            ));
        }
        if t.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Table '{}' has no name", t.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
