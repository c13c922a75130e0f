use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::{
    model::machine::SaveMachineDto,
    server::{model::db::MachineModel, util::time::now},
};

pub struct MachineRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MachineRepository<'a> {
    /// Creates a new instance of [`MachineRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new machine, stamping both timestamps with the current local time
    pub async fn create(&self, machine: &SaveMachineDto) -> Result<MachineModel, DbErr> {
        let timestamp = now();

        let machine = entity::machine::ActiveModel {
            created_at: ActiveValue::Set(timestamp),
            updated_at: ActiveValue::Set(timestamp),
            ..into_active_fields(machine)
        };

        machine.insert(self.db).await
    }

    /// Gets every machine ordered by name
    pub async fn get_all(&self) -> Result<Vec<MachineModel>, DbErr> {
        entity::prelude::Machine::find()
            .order_by_asc(entity::machine::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, machine_id: i32) -> Result<Option<MachineModel>, DbErr> {
        entity::prelude::Machine::find_by_id(machine_id)
            .one(self.db)
            .await
    }

    /// Replaces the editable fields of an existing machine
    ///
    /// `created_at` is kept and `updated_at` is refreshed. Returns `Ok(None)` when no
    /// machine with the provided ID exists.
    pub async fn update(
        &self,
        machine_id: i32,
        machine: &SaveMachineDto,
    ) -> Result<Option<MachineModel>, DbErr> {
        let existing = match entity::prelude::Machine::find_by_id(machine_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let fields = into_active_fields(machine);
        let mut machine_am = existing.into_active_model();
        machine_am.name = fields.name;
        machine_am.description = fields.description;
        machine_am.serial_number = fields.serial_number;
        machine_am.model = fields.model;
        machine_am.manufacturer = fields.manufacturer;
        machine_am.installation_date = fields.installation_date;
        machine_am.status = fields.status;
        machine_am.location = fields.location;
        machine_am.department = fields.department;
        machine_am.last_maintenance_date = fields.last_maintenance_date;
        machine_am.next_maintenance_date = fields.next_maintenance_date;
        machine_am.maintenance_interval_days = fields.maintenance_interval_days;
        machine_am.notes = fields.notes;
        machine_am.image_path = fields.image_path;
        machine_am.updated_at = ActiveValue::Set(now());

        let machine = machine_am.update(self.db).await?;

        Ok(Some(machine))
    }
}

/// Active model holding the submitted fields, timestamps and ID left unset
fn into_active_fields(machine: &SaveMachineDto) -> entity::machine::ActiveModel {
    entity::machine::ActiveModel {
        name: ActiveValue::Set(machine.name.clone()),
        description: ActiveValue::Set(machine.description.clone()),
        serial_number: ActiveValue::Set(machine.serial_number.clone()),
        model: ActiveValue::Set(machine.model.clone()),
        manufacturer: ActiveValue::Set(machine.manufacturer.clone()),
        installation_date: ActiveValue::Set(machine.installation_date),
        status: ActiveValue::Set(machine.status),
        location: ActiveValue::Set(machine.location.clone()),
        department: ActiveValue::Set(machine.department.clone()),
        last_maintenance_date: ActiveValue::Set(machine.last_maintenance_date),
        next_maintenance_date: ActiveValue::Set(machine.next_maintenance_date),
        maintenance_interval_days: ActiveValue::Set(machine.maintenance_interval_days),
        notes: ActiveValue::Set(machine.notes.clone()),
        image_path: ActiveValue::Set(machine.image_path.clone()),
        ..Default::default()
    }
}
