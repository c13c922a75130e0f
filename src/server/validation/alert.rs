use chrono::NaiveDateTime;

use crate::{
    model::alert::SaveAlertDto,
    server::{
        error::validation::ValidationError,
        util::time::add_days_to_timestamp,
        validation::{into_result, limit_length, require_non_blank},
    },
};

/// Validates an alert before it is added or updated.
///
/// Collects every failure of the following rules:
/// - `title` is not blank
/// - `machine_id` references a machine (greater than zero)
/// - `created_date` is at most one day after `now`
/// - `acknowledged_date` and `resolved_date`, when set, are not earlier than `created_date`
/// - text fields fit their column limits: 200 characters for `title`, 1000 for `message`,
///   100 for `acknowledged_by` and `resolved_by`, 500 for `resolution_notes`
///
/// An alert without `created_date` is checked as if it were created at `now`, which is
/// the value the alert service stores for it.
///
/// # Arguments
/// - `alert` - Submitted alert fields
/// - `now` - Current local date and time
///
/// # Returns
/// - `Ok(())` - The alert satisfies every rule
/// - `Err(Vec<ValidationError>)` - Every rule the alert failed
pub fn validate_alert(alert: &SaveAlertDto, now: NaiveDateTime) -> Result<(), Vec<ValidationError>> {
    let mut reasons = Vec::new();

    require_non_blank(&alert.title, "Title", &mut reasons);

    if alert.machine_id <= 0 {
        reasons.push(ValidationError::InvalidMachineId(alert.machine_id));
    }

    let created_date = alert.created_date.unwrap_or(now);
    let latest = add_days_to_timestamp(now, 1);
    if created_date > latest {
        reasons.push(ValidationError::CreatedDateInFuture {
            created_date,
            latest,
        });
    }

    if let Some(acknowledged_date) = alert.acknowledged_date {
        if acknowledged_date < created_date {
            reasons.push(ValidationError::AcknowledgedBeforeCreated {
                created_date,
                acknowledged_date,
            });
        }
    }

    if let Some(resolved_date) = alert.resolved_date {
        if resolved_date < created_date {
            reasons.push(ValidationError::ResolvedBeforeCreated {
                created_date,
                resolved_date,
            });
        }
    }

    limit_length(Some(alert.title.as_str()), "Title", 200, &mut reasons);
    limit_length(alert.message.as_deref(), "Message", 1000, &mut reasons);
    limit_length(alert.acknowledged_by.as_deref(), "Acknowledged by", 100, &mut reasons);
    limit_length(alert.resolved_by.as_deref(), "Resolved by", 100, &mut reasons);
    limit_length(alert.resolution_notes.as_deref(), "Resolution notes", 500, &mut reasons);

    into_result(reasons)
}
