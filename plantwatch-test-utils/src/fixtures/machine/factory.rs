//! Factory functions for generating mock machine models.
//!
//! Dates are relative to the current local date so the models pass the machine rules
//! whenever the tests run: installed two years ago, maintained 15 days ago and due again
//! in 15 days.

use chrono::{Days, Local};
use entity::sea_orm_active_enums::MachineStatus;

/// Create a mock machine model for testing.
///
/// # Arguments
/// - `machine_id` - Primary key of the machine
/// - `serial_number` - Serial number of the machine
///
/// # Returns
/// - `entity::machine::Model` - A valid machine with test data
pub fn mock_machine_model(machine_id: i32, serial_number: &str) -> entity::machine::Model {
    let now = Local::now().naive_local();
    let today = now.date();

    entity::machine::Model {
        id: machine_id,
        name: format!("Production Line {}", machine_id),
        description: Some("Main production line for widget manufacturing".to_string()),
        serial_number: serial_number.to_string(),
        model: "XL-2000".to_string(),
        manufacturer: "Acme Industries".to_string(),
        installation_date: today - Days::new(730),
        status: MachineStatus::Operational,
        location: Some("Building A".to_string()),
        department: Some("Production".to_string()),
        last_maintenance_date: Some(today - Days::new(15)),
        next_maintenance_date: Some(today + Days::new(15)),
        maintenance_interval_days: 30,
        notes: None,
        image_path: None,
        created_at: now,
        updated_at: now,
    }
}
