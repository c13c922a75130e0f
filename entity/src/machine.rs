use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::MachineStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "machine")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(unique)]
    pub serial_number: String,
    pub model: String,
    pub manufacturer: String,
    pub installation_date: Date,
    pub status: MachineStatus,
    pub location: Option<String>,
    pub department: Option<String>,
    pub last_maintenance_date: Option<Date>,
    pub next_maintenance_date: Option<Date>,
    pub maintenance_interval_days: i32,
    pub notes: Option<String>,
    pub image_path: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::alert::Entity")]
    Alert,
    #[sea_orm(has_many = "super::maintenance_record::Entity")]
    MaintenanceRecord,
}

impl Related<super::alert::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alert.def()
    }
}

impl Related<super::maintenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
