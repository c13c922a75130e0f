//! Machine fixture utilities.

pub mod factory;

use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn machine<'a>(&'a self) -> MachineFixtures<'a> {
        MachineFixtures { setup: self }
    }
}

pub struct MachineFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> MachineFixtures<'a> {
    /// Insert a machine built by [`factory::mock_machine_model`].
    ///
    /// # Arguments
    /// - `machine_id` - Primary key of the machine
    /// - `serial_number` - Serial number of the machine
    pub async fn insert_mock_machine(
        &self,
        machine_id: i32,
        serial_number: &str,
    ) -> Result<entity::machine::Model, TestError> {
        self.insert_machine(factory::mock_machine_model(machine_id, serial_number))
            .await
    }

    /// Insert the provided machine as-is, a non-positive ID lets the database assign one.
    pub async fn insert_machine(
        &self,
        machine: entity::machine::Model,
    ) -> Result<entity::machine::Model, TestError> {
        let id = if machine.id > 0 {
            ActiveValue::Set(machine.id)
        } else {
            ActiveValue::NotSet
        };

        let machine = entity::machine::ActiveModel {
            id,
            name: ActiveValue::Set(machine.name),
            description: ActiveValue::Set(machine.description),
            serial_number: ActiveValue::Set(machine.serial_number),
            model: ActiveValue::Set(machine.model),
            manufacturer: ActiveValue::Set(machine.manufacturer),
            installation_date: ActiveValue::Set(machine.installation_date),
            status: ActiveValue::Set(machine.status),
            location: ActiveValue::Set(machine.location),
            department: ActiveValue::Set(machine.department),
            last_maintenance_date: ActiveValue::Set(machine.last_maintenance_date),
            next_maintenance_date: ActiveValue::Set(machine.next_maintenance_date),
            maintenance_interval_days: ActiveValue::Set(machine.maintenance_interval_days),
            notes: ActiveValue::Set(machine.notes),
            image_path: ActiveValue::Set(machine.image_path),
            created_at: ActiveValue::Set(machine.created_at),
            updated_at: ActiveValue::Set(machine.updated_at),
        };

        Ok(machine.insert(&self.setup.db).await?)
    }
}
