use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::maintenance::SaveMaintenanceRecordDto,
    server::{model::db::MaintenanceRecordModel, util::time::now},
};

pub struct MaintenanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceRepository<'a> {
    /// Creates a new instance of [`MaintenanceRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new maintenance record, stamping both timestamps with the current local time
    pub async fn create(
        &self,
        record: &SaveMaintenanceRecordDto,
    ) -> Result<MaintenanceRecordModel, DbErr> {
        let timestamp = now();

        let record = entity::maintenance_record::ActiveModel {
            created_at: ActiveValue::Set(timestamp),
            updated_at: ActiveValue::Set(timestamp),
            ..into_active_fields(record)
        };

        record.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        record_id: i32,
    ) -> Result<Option<MaintenanceRecordModel>, DbErr> {
        entity::prelude::MaintenanceRecord::find_by_id(record_id)
            .one(self.db)
            .await
    }

    /// Gets the maintenance history of a machine, newest maintenance first
    pub async fn get_by_machine_id(
        &self,
        machine_id: i32,
    ) -> Result<Vec<MaintenanceRecordModel>, DbErr> {
        entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::MachineId.eq(machine_id))
            .order_by_desc(entity::maintenance_record::Column::MaintenanceDate)
            .order_by_desc(entity::maintenance_record::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the editable fields of an existing maintenance record
    ///
    /// Returns `Ok(None)` when no record with the provided ID exists.
    pub async fn update(
        &self,
        record_id: i32,
        record: &SaveMaintenanceRecordDto,
    ) -> Result<Option<MaintenanceRecordModel>, DbErr> {
        let existing = match entity::prelude::MaintenanceRecord::find_by_id(record_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let fields = into_active_fields(record);
        let mut record_am = existing.into_active_model();
        record_am.machine_id = fields.machine_id;
        record_am.maintenance_type = fields.maintenance_type;
        record_am.maintenance_date = fields.maintenance_date;
        record_am.title = fields.title;
        record_am.description = fields.description;
        record_am.performed_by = fields.performed_by;
        record_am.cost = fields.cost;
        record_am.parts_used = fields.parts_used;
        record_am.status = fields.status;
        record_am.completed_date = fields.completed_date;
        record_am.notes = fields.notes;
        record_am.updated_at = ActiveValue::Set(now());

        let record = record_am.update(self.db).await?;

        Ok(Some(record))
    }
}

fn into_active_fields(
    record: &SaveMaintenanceRecordDto,
) -> entity::maintenance_record::ActiveModel {
    entity::maintenance_record::ActiveModel {
        machine_id: ActiveValue::Set(record.machine_id),
        maintenance_type: ActiveValue::Set(record.maintenance_type),
        maintenance_date: ActiveValue::Set(record.maintenance_date),
        title: ActiveValue::Set(record.title.clone()),
        description: ActiveValue::Set(record.description.clone()),
        performed_by: ActiveValue::Set(record.performed_by.clone()),
        cost: ActiveValue::Set(record.cost),
        parts_used: ActiveValue::Set(record.parts_used.clone()),
        status: ActiveValue::Set(record.status),
        completed_date: ActiveValue::Set(record.completed_date),
        notes: ActiveValue::Set(record.notes.clone()),
        ..Default::default()
    }
}
