//! Factory functions for generating mock maintenance record models.

use chrono::{Days, Local};
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};

/// Create a mock maintenance record model for testing.
///
/// The record is a completed preventive maintenance performed 15 days ago.
///
/// # Arguments
/// - `record_id` - Primary key of the record
/// - `machine_id` - Machine the record belongs to
///
/// # Returns
/// - `entity::maintenance_record::Model` - A valid maintenance record with test data
pub fn mock_maintenance_record_model(
    record_id: i32,
    machine_id: i32,
) -> entity::maintenance_record::Model {
    let now = Local::now().naive_local();
    let maintenance_date = now.date() - Days::new(15);

    entity::maintenance_record::Model {
        id: record_id,
        machine_id,
        maintenance_type: MaintenanceType::Preventive,
        maintenance_date,
        title: "Routine Preventive Maintenance".to_string(),
        description: Some("Oil change, filter replacement and calibration".to_string()),
        performed_by: "John Smith".to_string(),
        cost: 250.0,
        parts_used: Some("Oil filter, lubricant".to_string()),
        status: MaintenanceStatus::Completed,
        completed_date: Some(maintenance_date),
        notes: None,
        created_at: now,
        updated_at: now,
    }
}
