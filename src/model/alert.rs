use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{AlertSeverity, AlertStatus, AlertType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::db::AlertModel;

/// Alert fields submitted when raising or editing an alert
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaveAlertDto {
    pub machine_id: i32,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: Option<String>,
    /// Defaults to the current time for new alerts and to the stored value on edits
    #[serde(default)]
    pub created_date: Option<NaiveDateTime>,
    pub acknowledged_date: Option<NaiveDateTime>,
    pub acknowledged_by: Option<String>,
    pub resolved_date: Option<NaiveDateTime>,
    pub resolved_by: Option<String>,
    pub status: AlertStatus,
    pub resolution_notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AlertDto {
    pub id: i32,
    pub machine_id: i32,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: Option<String>,
    pub created_date: NaiveDateTime,
    pub acknowledged_date: Option<NaiveDateTime>,
    pub acknowledged_by: Option<String>,
    pub resolved_date: Option<NaiveDateTime>,
    pub resolved_by: Option<String>,
    pub status: AlertStatus,
    pub resolution_notes: Option<String>,
}

impl From<AlertModel> for AlertDto {
    fn from(alert: AlertModel) -> Self {
        Self {
            id: alert.id,
            machine_id: alert.machine_id,
            alert_type: alert.alert_type,
            severity: alert.severity,
            title: alert.title,
            message: alert.message,
            created_date: alert.created_date,
            acknowledged_date: alert.acknowledged_date,
            acknowledged_by: alert.acknowledged_by,
            resolved_date: alert.resolved_date,
            resolved_by: alert.resolved_by,
            status: alert.status,
            resolution_notes: alert.resolution_notes,
        }
    }
}

impl From<AlertModel> for SaveAlertDto {
    fn from(alert: AlertModel) -> Self {
        Self {
            machine_id: alert.machine_id,
            alert_type: alert.alert_type,
            severity: alert.severity,
            title: alert.title,
            message: alert.message,
            created_date: Some(alert.created_date),
            acknowledged_date: alert.acknowledged_date,
            acknowledged_by: alert.acknowledged_by,
            resolved_date: alert.resolved_date,
            resolved_by: alert.resolved_by,
            status: alert.status,
            resolution_notes: alert.resolution_notes,
        }
    }
}
