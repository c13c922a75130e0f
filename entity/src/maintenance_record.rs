use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub machine_id: i32,
    pub maintenance_type: MaintenanceType,
    pub maintenance_date: Date,
    pub title: String,
    pub description: Option<String>,
    pub performed_by: String,
    pub cost: f64,
    pub parts_used: Option<String>,
    pub status: MaintenanceStatus,
    pub completed_date: Option<Date>,
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
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
