//! Factory functions for generating mock alert models.

use chrono::Local;
use entity::sea_orm_active_enums::{AlertSeverity, AlertStatus, AlertType};

/// Create a mock alert model for testing.
///
/// The alert is an active, medium severity temperature warning raised now.
///
/// # Arguments
/// - `alert_id` - Primary key of the alert
/// - `machine_id` - Machine the alert belongs to
///
/// # Returns
/// - `entity::alert::Model` - A valid alert with test data
pub fn mock_alert_model(alert_id: i32, machine_id: i32) -> entity::alert::Model {
    entity::alert::Model {
        id: alert_id,
        machine_id,
        alert_type: AlertType::TemperatureWarning,
        severity: AlertSeverity::Medium,
        title: "Temperature above threshold".to_string(),
        message: Some("Spindle temperature exceeded 80°C".to_string()),
        created_date: Local::now().naive_local(),
        acknowledged_date: None,
        acknowledged_by: None,
        resolved_date: None,
        resolved_by: None,
        status: AlertStatus::Active,
        resolution_notes: None,
    }
}
