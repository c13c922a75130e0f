//! Database model type aliases.
//!
//! This module provides type aliases for the SeaORM entity models used throughout the
//! application, giving a single point of reference for database model types without
//! importing from the `entity` crate directly.

/// Type alias for the machine database model.
///
/// Represents a tracked piece of equipment together with its maintenance schedule.
///
/// # Fields (from `entity::machine::Model`)
/// - `id` - Primary key
/// - `name` - Display name of the machine
/// - `description` - Optional free-text description
/// - `serial_number` - Serial number, unique across all machines (case-insensitive)
/// - `model` - Manufacturer model designation
/// - `manufacturer` - Manufacturer name
/// - `installation_date` - Date the machine was installed, never in the future
/// - `status` - Current operating status
/// - `location` - Optional physical location
/// - `department` - Optional owning department
/// - `last_maintenance_date` - Date of the last maintenance, if any
/// - `next_maintenance_date` - Date the next maintenance is due, if planned
/// - `maintenance_interval_days` - Days between two scheduled maintenances
/// - `notes` - Optional free-text notes
/// - `image_path` - Optional path to a picture of the machine
/// - `created_at` - Timestamp when the machine was added
/// - `updated_at` - Timestamp of the last update
pub type MachineModel = entity::machine::Model;

/// Type alias for the maintenance record database model.
///
/// Represents a historical or scheduled maintenance event belonging to exactly one machine.
///
/// # Fields (from `entity::maintenance_record::Model`)
/// - `id` - Primary key
/// - `machine_id` - Foreign key to the maintained machine
/// - `maintenance_type` - Preventive, corrective, emergency, inspection or calibration
/// - `maintenance_date` - Date the maintenance took or takes place
/// - `title` - Short summary
/// - `description` - Optional details
/// - `performed_by` - Technician or company performing the work
/// - `cost` - Cost of the maintenance, never negative
/// - `parts_used` - Optional list of parts
/// - `status` - Progress of the maintenance
/// - `completed_date` - Completion date, never before `maintenance_date`
/// - `notes` - Optional free-text notes
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last update
pub type MaintenanceRecordModel = entity::maintenance_record::Model;

/// Type alias for the alert database model.
///
/// Represents a notification tied to a machine, either raised by a user or generated
/// automatically when a machine update shows its maintenance is due or overdue.
///
/// # Fields (from `entity::alert::Model`)
/// - `id` - Primary key
/// - `machine_id` - Foreign key to the machine the alert concerns
/// - `alert_type` - Kind of alert
/// - `severity` - Low, medium, high or critical
/// - `title` - Short summary
/// - `message` - Optional details
/// - `created_date` - Timestamp the alert was raised
/// - `acknowledged_date` / `acknowledged_by` - When and by whom it was acknowledged
/// - `resolved_date` / `resolved_by` - When and by whom it was resolved
/// - `status` - Active, acknowledged, resolved or dismissed
/// - `resolution_notes` - Optional notes on how it was resolved
pub type AlertModel = entity::alert::Model;
