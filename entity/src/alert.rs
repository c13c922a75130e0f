use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{AlertSeverity, AlertStatus, AlertType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "alert")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub machine_id: i32,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: Option<String>,
    pub created_date: DateTime,
    pub acknowledged_date: Option<DateTime>,
    pub acknowledged_by: Option<String>,
    pub resolved_date: Option<DateTime>,
    pub resolved_by: Option<String>,
    pub status: AlertStatus,
    pub resolution_notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::machine::Entity",
        from = "Column::MachineId",
        to = "super::machine::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Machine,
}

impl Related<super::machine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Machine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
