use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::AlertStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::alert::SaveAlertDto, server::model::db::AlertModel};

pub struct AlertRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertRepository<'a> {
    /// Creates a new instance of [`AlertRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new alert raised at `created_date`
    ///
    /// The `created_date` field of the submitted alert is ignored in favour of the
    /// explicit argument so callers resolve the default exactly once.
    pub async fn create(
        &self,
        alert: &SaveAlertDto,
        created_date: NaiveDateTime,
    ) -> Result<AlertModel, DbErr> {
        let alert = entity::alert::ActiveModel {
            created_date: ActiveValue::Set(created_date),
            ..into_active_fields(alert)
        };

        alert.insert(self.db).await
    }

    pub async fn get_by_id(&self, alert_id: i32) -> Result<Option<AlertModel>, DbErr> {
        entity::prelude::Alert::find_by_id(alert_id)
            .one(self.db)
            .await
    }

    /// Gets every alert of a machine, newest first
    pub async fn get_by_machine_id(&self, machine_id: i32) -> Result<Vec<AlertModel>, DbErr> {
        entity::prelude::Alert::find()
            .filter(entity::alert::Column::MachineId.eq(machine_id))
            .order_by_desc(entity::alert::Column::CreatedDate)
            .order_by_desc(entity::alert::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the alerts of a machine that are still active, newest first
    pub async fn get_active_by_machine_id(
        &self,
        machine_id: i32,
    ) -> Result<Vec<AlertModel>, DbErr> {
        entity::prelude::Alert::find()
            .filter(entity::alert::Column::MachineId.eq(machine_id))
            .filter(entity::alert::Column::Status.eq(AlertStatus::Active))
            .order_by_desc(entity::alert::Column::CreatedDate)
            .order_by_desc(entity::alert::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the active alerts of every machine, newest first
    pub async fn get_all_active(&self) -> Result<Vec<AlertModel>, DbErr> {
        entity::prelude::Alert::find()
            .filter(entity::alert::Column::Status.eq(AlertStatus::Active))
            .order_by_desc(entity::alert::Column::CreatedDate)
            .order_by_desc(entity::alert::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the editable fields of an existing alert
    ///
    /// A submitted alert without `created_date` keeps the stored one. Returns `Ok(None)`
    /// when no alert with the provided ID exists.
    pub async fn update(
        &self,
        alert_id: i32,
        alert: &SaveAlertDto,
    ) -> Result<Option<AlertModel>, DbErr> {
        let existing = match entity::prelude::Alert::find_by_id(alert_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let fields = into_active_fields(alert);
        let mut alert_am = existing.into_active_model();
        alert_am.machine_id = fields.machine_id;
        alert_am.alert_type = fields.alert_type;
        alert_am.severity = fields.severity;
        alert_am.title = fields.title;
        alert_am.message = fields.message;
        if let Some(created_date) = alert.created_date {
            alert_am.created_date = ActiveValue::Set(created_date);
        }
        alert_am.acknowledged_date = fields.acknowledged_date;
        alert_am.acknowledged_by = fields.acknowledged_by;
        alert_am.resolved_date = fields.resolved_date;
        alert_am.resolved_by = fields.resolved_by;
        alert_am.status = fields.status;
        alert_am.resolution_notes = fields.resolution_notes;

        let alert = alert_am.update(self.db).await?;

        Ok(Some(alert))
    }
}

fn into_active_fields(alert: &SaveAlertDto) -> entity::alert::ActiveModel {
    entity::alert::ActiveModel {
        machine_id: ActiveValue::Set(alert.machine_id),
        alert_type: ActiveValue::Set(alert.alert_type),
        severity: ActiveValue::Set(alert.severity),
        title: ActiveValue::Set(alert.title.clone()),
        message: ActiveValue::Set(alert.message.clone()),
        acknowledged_date: ActiveValue::Set(alert.acknowledged_date),
        acknowledged_by: ActiveValue::Set(alert.acknowledged_by.clone()),
        resolved_date: ActiveValue::Set(alert.resolved_date),
        resolved_by: ActiveValue::Set(alert.resolved_by.clone()),
        status: ActiveValue::Set(alert.status),
        resolution_notes: ActiveValue::Set(alert.resolution_notes.clone()),
        ..Default::default()
    }
}
