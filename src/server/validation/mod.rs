//! Business rule validation.
//!
//! Every submitted machine, maintenance record and alert passes through the functions in
//! this module before it is written. The rules are pure: they receive the candidate, the
//! reference date and, for machines, a snapshot of the existing machines, and return either
//! `Ok(())` or every rule the candidate failed. Nothing is logged or stored here; callers
//! decide how to surface the result.

pub mod alert;
pub mod machine;
pub mod maintenance;
pub mod uniqueness;

pub use alert::validate_alert;
pub use machine::validate_machine;
pub use maintenance::validate_maintenance_record;
pub use uniqueness::is_duplicate_serial;

use crate::server::error::validation::ValidationError;

/// Records a [`ValidationError::BlankField`] when `value` is empty or whitespace only
fn require_non_blank(value: &str, field: &'static str, reasons: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        reasons.push(ValidationError::BlankField(field));
    }
}

/// Records a [`ValidationError::TooLong`] when `value` is set and has more than `max` characters
fn limit_length(
    value: Option<&str>,
    field: &'static str,
    max: usize,
    reasons: &mut Vec<ValidationError>,
) {
    if value.is_some_and(|value| value.chars().count() > max) {
        reasons.push(ValidationError::TooLong { field, max });
    }
}

/// Accepts the candidate when no rule failed
fn into_result(reasons: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if reasons.is_empty() {
        Ok(())
    } else {
        Err(reasons)
    }
}
