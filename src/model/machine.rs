use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::MachineStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::db::MachineModel;

/// Default number of days between two scheduled maintenances
pub const DEFAULT_MAINTENANCE_INTERVAL_DAYS: i32 = 30;

fn default_maintenance_interval_days() -> i32 {
    DEFAULT_MAINTENANCE_INTERVAL_DAYS
}

/// Machine fields submitted when adding a new machine or updating an existing one
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaveMachineDto {
    pub name: String,
    pub description: Option<String>,
    pub serial_number: String,
    pub model: String,
    pub manufacturer: String,
    pub installation_date: NaiveDate,
    pub status: MachineStatus,
    pub location: Option<String>,
    pub department: Option<String>,
    /// Unset until the machine has had its first maintenance
    pub last_maintenance_date: Option<NaiveDate>,
    /// Unset when no maintenance is planned
    pub next_maintenance_date: Option<NaiveDate>,
    #[serde(default = "default_maintenance_interval_days")]
    pub maintenance_interval_days: i32,
    pub notes: Option<String>,
    pub image_path: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MachineDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub serial_number: String,
    pub model: String,
    pub manufacturer: String,
    pub installation_date: NaiveDate,
    pub status: MachineStatus,
    pub location: Option<String>,
    pub department: Option<String>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub maintenance_interval_days: i32,
    pub notes: Option<String>,
    pub image_path: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<MachineModel> for MachineDto {
    fn from(machine: MachineModel) -> Self {
        Self {
            id: machine.id,
            name: machine.name,
            description: machine.description,
            serial_number: machine.serial_number,
            model: machine.model,
            manufacturer: machine.manufacturer,
            installation_date: machine.installation_date,
            status: machine.status,
            location: machine.location,
            department: machine.department,
            last_maintenance_date: machine.last_maintenance_date,
            next_maintenance_date: machine.next_maintenance_date,
            maintenance_interval_days: machine.maintenance_interval_days,
            notes: machine.notes,
            image_path: machine.image_path,
            created_at: machine.created_at,
            updated_at: machine.updated_at,
        }
    }
}

/// Starts an edit from the stored state of a machine
impl From<MachineModel> for SaveMachineDto {
    fn from(machine: MachineModel) -> Self {
        Self {
            name: machine.name,
            description: machine.description,
            serial_number: machine.serial_number,
            model: machine.model,
            manufacturer: machine.manufacturer,
            installation_date: machine.installation_date,
            status: machine.status,
            location: machine.location,
            department: machine.department,
            last_maintenance_date: machine.last_maintenance_date,
            next_maintenance_date: machine.next_maintenance_date,
            maintenance_interval_days: machine.maintenance_interval_days,
            notes: machine.notes,
            image_path: machine.image_path,
        }
    }
}
