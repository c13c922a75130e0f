use chrono::NaiveDate;

use crate::{
    model::maintenance::SaveMaintenanceRecordDto,
    server::{
        error::validation::ValidationError,
        util::time::add_days,
        validation::{into_result, limit_length, require_non_blank},
    },
};

/// How far ahead of today a maintenance may be scheduled
pub const MAX_SCHEDULE_AHEAD_DAYS: u64 = 30;

/// Validates a maintenance record before it is added or updated.
///
/// Collects every failure of the following rules:
/// - `title` and `performed_by` are not blank
/// - `machine_id` references a machine (greater than zero)
/// - `maintenance_date` is at most [`MAX_SCHEDULE_AHEAD_DAYS`] after `today`
/// - `completed_date`, when set, is not earlier than `maintenance_date`
/// - `cost` is zero or greater
/// - text fields fit their column limits: 200 characters for `title`, 1000 for
///   `description`, 100 for `performed_by` and `parts_used`, 500 for `notes`
///
/// # Arguments
/// - `record` - Submitted maintenance record fields
/// - `today` - Current local date
///
/// # Returns
/// - `Ok(())` - The record satisfies every rule
/// - `Err(Vec<ValidationError>)` - Every rule the record failed
pub fn validate_maintenance_record(
    record: &SaveMaintenanceRecordDto,
    today: NaiveDate,
) -> Result<(), Vec<ValidationError>> {
    let mut reasons = Vec::new();

    require_non_blank(&record.title, "Title", &mut reasons);
    require_non_blank(&record.performed_by, "Performed by", &mut reasons);

    if record.machine_id <= 0 {
        reasons.push(ValidationError::InvalidMachineId(record.machine_id));
    }

    let latest = add_days(today, MAX_SCHEDULE_AHEAD_DAYS);
    if record.maintenance_date > latest {
        reasons.push(ValidationError::MaintenanceDateTooFarAhead {
            maintenance_date: record.maintenance_date,
            latest,
        });
    }

    if let Some(completed_date) = record.completed_date {
        if completed_date < record.maintenance_date {
            reasons.push(ValidationError::CompletedBeforeMaintenance {
                maintenance_date: record.maintenance_date,
                completed_date,
            });
        }
    }

    // Written as a negated comparison so NaN is rejected as well
    if !(record.cost >= 0.0) {
        reasons.push(ValidationError::NegativeCost(record.cost));
    }

    limit_length(Some(record.title.as_str()), "Title", 200, &mut reasons);
    limit_length(record.description.as_deref(), "Description", 1000, &mut reasons);
    limit_length(Some(record.performed_by.as_str()), "Performed by", 100, &mut reasons);
    limit_length(record.parts_used.as_deref(), "Parts used", 100, &mut reasons);
    limit_length(record.notes.as_deref(), "Notes", 500, &mut reasons);

    into_result(reasons)
}
