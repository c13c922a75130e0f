//! Machine service.
//!
//! Adds and updates machines after checking them against the machine rules, and raises a
//! maintenance alert when an update leaves a machine's maintenance overdue or due soon.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::machine::{MachineDto, SaveMachineDto},
    server::{
        data::machine::MachineRepository,
        error::{not_found::NotFoundError, Error},
        model::db::MachineModel,
        service::alert::{generation::evaluate_maintenance_alert, AlertService},
        util::time::today,
        validation::validate_machine,
    },
};

/// Service for managing the machine inventory.
///
/// Every write is preceded by the machine rules. The serial number uniqueness rule works
/// on a snapshot of all machines loaded for each call.
pub struct MachineService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MachineService<'a> {
    /// Creates a new instance of MachineService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `MachineService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every machine ordered by name
    pub async fn get_all_machines(&self) -> Result<Vec<MachineDto>, Error> {
        let machines = MachineRepository::new(self.db).get_all().await?;

        Ok(machines.into_iter().map(MachineDto::from).collect())
    }

    pub async fn get_machine(&self, machine_id: i32) -> Result<Option<MachineDto>, Error> {
        let machine = MachineRepository::new(self.db).get_by_id(machine_id).await?;

        Ok(machine.map(MachineDto::from))
    }

    /// Validates and stores a new machine.
    ///
    /// # Arguments
    /// - `machine` - Submitted machine fields
    ///
    /// # Returns
    /// - `Ok(MachineDto)` - The stored machine
    /// - `Err(Error::ValidationRejected)` - The machine failed one or more rules
    /// - `Err(Error::DbErr)` - Database operation failed, including a serial number
    ///   collision caught by the unique index
    pub async fn add_machine(&self, machine: &SaveMachineDto) -> Result<MachineDto, Error> {
        self.validate(None, machine).await?;

        let machine = MachineRepository::new(self.db).create(machine).await?;

        tracing::info!(machine_id = %machine.id, "Added machine {}", machine.name);

        Ok(machine.into())
    }

    /// Validates and replaces the fields of an existing machine.
    ///
    /// After a successful update the stored machine's maintenance schedule is evaluated and
    /// a maintenance alert is raised when it is overdue or due within a week. Failing to
    /// raise that alert is logged and does not fail the update.
    ///
    /// # Arguments
    /// - `machine_id` - ID of the machine to update
    /// - `machine` - Submitted machine fields
    ///
    /// # Returns
    /// - `Ok(MachineDto)` - The updated machine
    /// - `Err(Error::ValidationRejected)` - The machine failed one or more rules
    /// - `Err(Error::NotFound)` - No machine with the provided ID exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_machine(
        &self,
        machine_id: i32,
        machine: &SaveMachineDto,
    ) -> Result<MachineDto, Error> {
        self.validate(Some(machine_id), machine).await?;

        let machine = MachineRepository::new(self.db)
            .update(machine_id, machine)
            .await?
            .ok_or(NotFoundError::Machine(machine_id))?;

        self.raise_maintenance_alert(&machine).await;

        Ok(machine.into())
    }

    /// Runs the machine rules against the stored machines.
    ///
    /// When the stored machines cannot be loaded the serial number uniqueness rule is
    /// skipped with a warning and the remaining rules still apply.
    async fn validate(&self, machine_id: Option<i32>, machine: &SaveMachineDto) -> Result<(), Error> {
        let existing = match MachineRepository::new(self.db).get_all().await {
            Ok(machines) => Some(machines),
            Err(err) => {
                tracing::warn!(
                    serial_number = %machine.serial_number,
                    "Skipping serial number uniqueness check, failed to load machines: {}",
                    err
                );

                None
            }
        };

        validate_machine(machine_id, machine, existing.as_deref(), today())
            .map_err(Error::ValidationRejected)
    }

    async fn raise_maintenance_alert(&self, machine: &MachineModel) {
        let Some(draft) = evaluate_maintenance_alert(machine, today()) else {
            return;
        };

        match AlertService::new(self.db)
            .create_maintenance_alert(draft)
            .await
        {
            Ok(alert) => tracing::info!(
                machine_id = %machine.id,
                alert_id = %alert.id,
                "Raised maintenance alert: {}",
                alert.title
            ),
            Err(err) => tracing::error!(
                machine_id = %machine.id,
                "Failed to raise maintenance alert: {}",
                err
            ),
        }
    }
}
