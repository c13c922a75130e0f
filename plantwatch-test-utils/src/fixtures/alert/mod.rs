//! Alert fixture utilities.

pub mod factory;

use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn alert<'a>(&'a self) -> AlertFixtures<'a> {
        AlertFixtures { setup: self }
    }
}

pub struct AlertFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AlertFixtures<'a> {
    /// Insert an active alert built by [`factory::mock_alert_model`] for an existing
    /// machine, letting the database assign its ID.
    pub async fn insert_mock_alert(
        &self,
        machine_id: i32,
    ) -> Result<entity::alert::Model, TestError> {
        self.insert_alert(factory::mock_alert_model(0, machine_id))
            .await
    }

    /// Insert the provided alert as-is, a non-positive ID lets the database assign one.
    pub async fn insert_alert(
        &self,
        alert: entity::alert::Model,
    ) -> Result<entity::alert::Model, TestError> {
        let id = if alert.id > 0 {
            ActiveValue::Set(alert.id)
        } else {
            ActiveValue::NotSet
        };

        let alert = entity::alert::ActiveModel {
            id,
            machine_id: ActiveValue::Set(alert.machine_id),
            alert_type: ActiveValue::Set(alert.alert_type),
            severity: ActiveValue::Set(alert.severity),
            title: ActiveValue::Set(alert.title),
            message: ActiveValue::Set(alert.message),
            created_date: ActiveValue::Set(alert.created_date),
            acknowledged_date: ActiveValue::Set(alert.acknowledged_date),
            acknowledged_by: ActiveValue::Set(alert.acknowledged_by),
            resolved_date: ActiveValue::Set(alert.resolved_date),
            resolved_by: ActiveValue::Set(alert.resolved_by),
            status: ActiveValue::Set(alert.status),
            resolution_notes: ActiveValue::Set(alert.resolution_notes),
        };

        Ok(alert.insert(&self.setup.db).await?)
    }
}
