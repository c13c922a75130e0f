pub use super::alert::Entity as Alert;
pub use super::machine::Entity as Machine;
pub use super::maintenance_record::Entity as MaintenanceRecord;
