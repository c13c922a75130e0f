use sea_orm::DatabaseConnection;

use crate::{
    model::maintenance::{MaintenanceRecordDto, SaveMaintenanceRecordDto},
    server::{
        data::{machine::MachineRepository, maintenance::MaintenanceRepository},
        error::{not_found::NotFoundError, Error},
        util::time::today,
        validation::validate_maintenance_record,
    },
};

/// Service for recording and editing the maintenance history of machines.
pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    /// Creates a new instance of MaintenanceService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the maintenance history of a machine, newest first
    pub async fn get_maintenance_records_by_machine_id(
        &self,
        machine_id: i32,
    ) -> Result<Vec<MaintenanceRecordDto>, Error> {
        let records = MaintenanceRepository::new(self.db)
            .get_by_machine_id(machine_id)
            .await?;

        Ok(records.into_iter().map(MaintenanceRecordDto::from).collect())
    }

    pub async fn get_maintenance_record(
        &self,
        record_id: i32,
    ) -> Result<Option<MaintenanceRecordDto>, Error> {
        let record = MaintenanceRepository::new(self.db)
            .get_by_id(record_id)
            .await?;

        Ok(record.map(MaintenanceRecordDto::from))
    }

    /// Validates and stores a new maintenance record.
    ///
    /// # Returns
    /// - `Ok(MaintenanceRecordDto)` - The stored record
    /// - `Err(Error::ValidationRejected)` - The record failed one or more rules
    /// - `Err(Error::NotFound)` - No machine with the record's machine ID exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_maintenance_record(
        &self,
        record: &SaveMaintenanceRecordDto,
    ) -> Result<MaintenanceRecordDto, Error> {
        validate_maintenance_record(record, today()).map_err(Error::ValidationRejected)?;
        self.ensure_machine_exists(record.machine_id).await?;

        let record = MaintenanceRepository::new(self.db).create(record).await?;

        tracing::info!(
            machine_id = %record.machine_id,
            record_id = %record.id,
            "Recorded maintenance {}",
            record.title
        );

        Ok(record.into())
    }

    /// Validates and replaces the fields of an existing maintenance record.
    ///
    /// # Returns
    /// - `Ok(MaintenanceRecordDto)` - The updated record
    /// - `Err(Error::ValidationRejected)` - The record failed one or more rules
    /// - `Err(Error::NotFound)` - No record with the provided ID exists, or no machine with
    ///   the record's machine ID exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_maintenance_record(
        &self,
        record_id: i32,
        record: &SaveMaintenanceRecordDto,
    ) -> Result<MaintenanceRecordDto, Error> {
        validate_maintenance_record(record, today()).map_err(Error::ValidationRejected)?;
        self.ensure_machine_exists(record.machine_id).await?;

        let record = MaintenanceRepository::new(self.db)
            .update(record_id, record)
            .await?
            .ok_or(NotFoundError::MaintenanceRecord(record_id))?;

        Ok(record.into())
    }

    async fn ensure_machine_exists(&self, machine_id: i32) -> Result<(), Error> {
        MachineRepository::new(self.db)
            .get_by_id(machine_id)
            .await?
            .ok_or(NotFoundError::Machine(machine_id))?;

        Ok(())
    }
}
