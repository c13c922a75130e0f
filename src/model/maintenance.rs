use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::db::MaintenanceRecordModel;

/// Maintenance record fields submitted when recording or editing a maintenance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaveMaintenanceRecordDto {
    pub machine_id: i32,
    pub maintenance_type: MaintenanceType,
    pub maintenance_date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub performed_by: String,
    pub cost: f64,
    pub parts_used: Option<String>,
    pub status: MaintenanceStatus,
    pub completed_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceRecordDto {
    pub id: i32,
    pub machine_id: i32,
    pub maintenance_type: MaintenanceType,
    pub maintenance_date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub performed_by: String,
    pub cost: f64,
    pub parts_used: Option<String>,
    pub status: MaintenanceStatus,
    pub completed_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<MaintenanceRecordModel> for MaintenanceRecordDto {
    fn from(record: MaintenanceRecordModel) -> Self {
        Self {
            id: record.id,
            machine_id: record.machine_id,
            maintenance_type: record.maintenance_type,
            maintenance_date: record.maintenance_date,
            title: record.title,
            description: record.description,
            performed_by: record.performed_by,
            cost: record.cost,
            parts_used: record.parts_used,
            status: record.status,
            completed_date: record.completed_date,
            notes: record.notes,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl From<MaintenanceRecordModel> for SaveMaintenanceRecordDto {
    fn from(record: MaintenanceRecordModel) -> Self {
        Self {
            machine_id: record.machine_id,
            maintenance_type: record.maintenance_type,
            maintenance_date: record.maintenance_date,
            title: record.title,
            description: record.description,
            performed_by: record.performed_by,
            cost: record.cost,
            parts_used: record.parts_used,
            status: record.status,
            completed_date: record.completed_date,
            notes: record.notes,
        }
    }
}
