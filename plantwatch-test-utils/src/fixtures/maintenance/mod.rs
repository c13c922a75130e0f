//! Maintenance record fixture utilities.

pub mod factory;

use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn maintenance<'a>(&'a self) -> MaintenanceFixtures<'a> {
        MaintenanceFixtures { setup: self }
    }
}

pub struct MaintenanceFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> MaintenanceFixtures<'a> {
    /// Insert a maintenance record built by [`factory::mock_maintenance_record_model`]
    /// for an existing machine, letting the database assign its ID.
    pub async fn insert_mock_maintenance_record(
        &self,
        machine_id: i32,
    ) -> Result<entity::maintenance_record::Model, TestError> {
        self.insert_maintenance_record(factory::mock_maintenance_record_model(0, machine_id))
            .await
    }

    /// Insert the provided maintenance record as-is, a non-positive ID lets the database
    /// assign one.
    pub async fn insert_maintenance_record(
        &self,
        record: entity::maintenance_record::Model,
    ) -> Result<entity::maintenance_record::Model, TestError> {
        let id = if record.id > 0 {
            ActiveValue::Set(record.id)
        } else {
            ActiveValue::NotSet
        };

        let record = entity::maintenance_record::ActiveModel {
            id,
            machine_id: ActiveValue::Set(record.machine_id),
            maintenance_type: ActiveValue::Set(record.maintenance_type),
            maintenance_date: ActiveValue::Set(record.maintenance_date),
            title: ActiveValue::Set(record.title),
            description: ActiveValue::Set(record.description),
            performed_by: ActiveValue::Set(record.performed_by),
            cost: ActiveValue::Set(record.cost),
            parts_used: ActiveValue::Set(record.parts_used),
            status: ActiveValue::Set(record.status),
            completed_date: ActiveValue::Set(record.completed_date),
            notes: ActiveValue::Set(record.notes),
            created_at: ActiveValue::Set(record.created_at),
            updated_at: ActiveValue::Set(record.updated_at),
        };

        Ok(record.insert(&self.setup.db).await?)
    }
}
