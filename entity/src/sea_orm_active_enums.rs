use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum MachineStatus {
    #[sea_orm(num_value = 1)]
    Operational,
    #[sea_orm(num_value = 2)]
    UnderMaintenance,
    #[sea_orm(num_value = 3)]
    OutOfService,
    #[sea_orm(num_value = 4)]
    Warning,
    #[sea_orm(num_value = 5)]
    Critical,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum MaintenanceType {
    #[sea_orm(num_value = 1)]
    Preventive,
    #[sea_orm(num_value = 2)]
    Corrective,
    #[sea_orm(num_value = 3)]
    Emergency,
    #[sea_orm(num_value = 4)]
    Inspection,
    #[sea_orm(num_value = 5)]
    Calibration,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum MaintenanceStatus {
    #[sea_orm(num_value = 1)]
    Scheduled,
    #[sea_orm(num_value = 2)]
    InProgress,
    #[sea_orm(num_value = 3)]
    Completed,
    #[sea_orm(num_value = 4)]
    Cancelled,
    #[sea_orm(num_value = 5)]
    Overdue,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum AlertType {
    #[sea_orm(num_value = 1)]
    MaintenanceDue,
    #[sea_orm(num_value = 2)]
    MaintenanceOverdue,
    #[sea_orm(num_value = 3)]
    MachineFailure,
    #[sea_orm(num_value = 4)]
    PerformanceWarning,
    #[sea_orm(num_value = 5)]
    TemperatureWarning,
    #[sea_orm(num_value = 6)]
    VibrationWarning,
    #[sea_orm(num_value = 7)]
    PressureWarning,
    #[sea_orm(num_value = 8)]
    SystemError,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum AlertSeverity {
    #[sea_orm(num_value = 1)]
    Low,
    #[sea_orm(num_value = 2)]
    Medium,
    #[sea_orm(num_value = 3)]
    High,
    #[sea_orm(num_value = 4)]
    Critical,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum AlertStatus {
    #[sea_orm(num_value = 1)]
    Active,
    #[sea_orm(num_value = 2)]
    Acknowledged,
    #[sea_orm(num_value = 3)]
    Resolved,
    #[sea_orm(num_value = 4)]
    Dismissed,
}
