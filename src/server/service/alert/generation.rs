//! Maintenance alert generation.
//!
//! Decides whether a machine's maintenance schedule warrants an alert. Evaluation is pure:
//! it looks at the machine as stored after an update and the current date, and returns the
//! alert to raise, if any. Persisting the alert is left to
//! [`AlertService::create_maintenance_alert`](super::AlertService::create_maintenance_alert).

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{AlertSeverity, AlertType};

use crate::server::{model::db::MachineModel, util::time::add_days};

/// Number of days ahead of the next maintenance at which it is reported as due
pub const DUE_SOON_WINDOW_DAYS: u64 = 7;

/// Format used for dates in alert messages
const MESSAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// An alert that should be raised but has not been stored yet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertDraft {
    pub machine_id: i32,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
}

/// Evaluates whether a machine needs a maintenance alert.
///
/// - Next maintenance before `today`: [`AlertType::MaintenanceOverdue`] with
///   [`AlertSeverity::High`]
/// - Next maintenance between `today` and `today` + [`DUE_SOON_WINDOW_DAYS`], both
///   inclusive: [`AlertType::MaintenanceDue`] with [`AlertSeverity::Medium`]
/// - Otherwise, including when no maintenance is planned: no alert
///
/// Every call that qualifies yields a draft, previously raised alerts are not consulted.
///
/// # Arguments
/// - `machine` - Machine as stored after the update
/// - `today` - Current local date
///
/// # Returns
/// - `Some(AlertDraft)` - Alert to raise for the machine
/// - `None` - The machine's maintenance schedule needs no attention
pub fn evaluate_maintenance_alert(machine: &MachineModel, today: NaiveDate) -> Option<AlertDraft> {
    let next = machine.next_maintenance_date?;
    let date = next.format(MESSAGE_DATE_FORMAT);

    if next < today {
        Some(AlertDraft {
            machine_id: machine.id,
            alert_type: AlertType::MaintenanceOverdue,
            severity: AlertSeverity::High,
            title: format!("Maintenance Overdue - {}", machine.name),
            message: format!(
                "Maintenance was due on {}. Please schedule maintenance immediately.",
                date
            ),
        })
    } else if next <= add_days(today, DUE_SOON_WINDOW_DAYS) {
        Some(AlertDraft {
            machine_id: machine.id,
            alert_type: AlertType::MaintenanceDue,
            severity: AlertSeverity::Medium,
            title: format!("Maintenance Due - {}", machine.name),
            message: format!(
                "Maintenance is due on {}. Please schedule maintenance soon.",
                date
            ),
        })
    } else {
        None
    }
}
