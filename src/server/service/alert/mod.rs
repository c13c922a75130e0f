//! Alert service.
//!
//! Alerts are raised by users or generated from a machine's maintenance schedule. Every
//! alert, generated or not, passes the alert rules before it is stored.

pub mod generation;

use entity::sea_orm_active_enums::AlertStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::alert::{AlertDto, SaveAlertDto},
    server::{
        data::{alert::AlertRepository, machine::MachineRepository},
        error::{not_found::NotFoundError, Error},
        service::alert::generation::AlertDraft,
        util::time::now,
        validation::validate_alert,
    },
};

/// Service for raising, listing and updating machine alerts.
pub struct AlertService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertService<'a> {
    /// Creates a new instance of AlertService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `AlertService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every alert of a machine, newest first
    pub async fn get_alerts_by_machine_id(&self, machine_id: i32) -> Result<Vec<AlertDto>, Error> {
        let alerts = AlertRepository::new(self.db)
            .get_by_machine_id(machine_id)
            .await?;

        Ok(alerts.into_iter().map(AlertDto::from).collect())
    }

    /// Gets the active alerts of a machine, newest first
    pub async fn get_active_alerts_by_machine_id(
        &self,
        machine_id: i32,
    ) -> Result<Vec<AlertDto>, Error> {
        let alerts = AlertRepository::new(self.db)
            .get_active_by_machine_id(machine_id)
            .await?;

        Ok(alerts.into_iter().map(AlertDto::from).collect())
    }

    /// Gets the active alerts of every machine, newest first
    pub async fn get_all_active_alerts(&self) -> Result<Vec<AlertDto>, Error> {
        let alerts = AlertRepository::new(self.db).get_all_active().await?;

        Ok(alerts.into_iter().map(AlertDto::from).collect())
    }

    pub async fn get_alert(&self, alert_id: i32) -> Result<Option<AlertDto>, Error> {
        let alert = AlertRepository::new(self.db).get_by_id(alert_id).await?;

        Ok(alert.map(AlertDto::from))
    }

    /// Validates and stores a new alert.
    ///
    /// An alert submitted without `created_date` is raised at the current local time.
    ///
    /// # Arguments
    /// - `alert` - Submitted alert fields
    ///
    /// # Returns
    /// - `Ok(AlertDto)` - The stored alert
    /// - `Err(Error::ValidationRejected)` - The alert failed one or more rules
    /// - `Err(Error::NotFound)` - No machine with the alert's machine ID exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_alert(&self, alert: &SaveAlertDto) -> Result<AlertDto, Error> {
        let now = now();
        validate_alert(alert, now).map_err(Error::ValidationRejected)?;
        self.ensure_machine_exists(alert.machine_id).await?;

        let created_date = alert.created_date.unwrap_or(now);
        let alert = AlertRepository::new(self.db)
            .create(alert, created_date)
            .await?;

        Ok(alert.into())
    }

    /// Validates and replaces the fields of an existing alert.
    ///
    /// An alert submitted without `created_date` keeps the stored one and is validated
    /// against it. Validation runs before the update, so an invalid alert is rejected even
    /// when the ID does not exist.
    ///
    /// # Arguments
    /// - `alert_id` - ID of the alert to update
    /// - `alert` - Submitted alert fields
    ///
    /// # Returns
    /// - `Ok(AlertDto)` - The updated alert
    /// - `Err(Error::ValidationRejected)` - The alert failed one or more rules
    /// - `Err(Error::NotFound)` - No alert with the provided ID exists, or no machine with
    ///   the alert's machine ID exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_alert(&self, alert_id: i32, alert: &SaveAlertDto) -> Result<AlertDto, Error> {
        let alert_repo = AlertRepository::new(self.db);

        let mut alert = alert.clone();
        if alert.created_date.is_none() {
            alert.created_date = alert_repo
                .get_by_id(alert_id)
                .await?
                .map(|stored| stored.created_date);
        }

        validate_alert(&alert, now()).map_err(Error::ValidationRejected)?;
        self.ensure_machine_exists(alert.machine_id).await?;

        let alert = alert_repo
            .update(alert_id, &alert)
            .await?
            .ok_or(NotFoundError::Alert(alert_id))?;

        Ok(alert.into())
    }

    /// Stores a generated maintenance alert as an active alert raised now.
    ///
    /// The draft passes the same rules as user submitted alerts.
    pub async fn create_maintenance_alert(&self, draft: AlertDraft) -> Result<AlertDto, Error> {
        let alert = SaveAlertDto {
            machine_id: draft.machine_id,
            alert_type: draft.alert_type,
            severity: draft.severity,
            title: draft.title,
            message: Some(draft.message),
            created_date: Some(now()),
            acknowledged_date: None,
            acknowledged_by: None,
            resolved_date: None,
            resolved_by: None,
            status: AlertStatus::Active,
            resolution_notes: None,
        };

        self.add_alert(&alert).await
    }

    async fn ensure_machine_exists(&self, machine_id: i32) -> Result<(), Error> {
        MachineRepository::new(self.db)
            .get_by_id(machine_id)
            .await?
            .ok_or(NotFoundError::Machine(machine_id))?;

        Ok(())
    }
}
