use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_machine::Machine;

static IDX_ALERT_MACHINE_ID: &str = "idx-alert-machine_id";
static IDX_ALERT_STATUS: &str = "idx-alert-status";
static FK_ALERT_MACHINE_ID: &str = "fk-alert-machine_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alert::Table)
                    .if_not_exists()
                    .col(pk_auto(Alert::Id))
                    .col(integer(Alert::MachineId))
                    .col(integer(Alert::AlertType))
                    .col(integer(Alert::Severity))
                    .col(string_len(Alert::Title, 200))
                    .col(string_len_null(Alert::Message, 1000))
                    .col(timestamp(Alert::CreatedDate))
                    .col(timestamp_null(Alert::AcknowledgedDate))
                    .col(string_len_null(Alert::AcknowledgedBy, 100))
                    .col(timestamp_null(Alert::ResolvedDate))
                    .col(string_len_null(Alert::ResolvedBy, 100))
                    .col(integer(Alert::Status))
                    .col(string_len_null(Alert::ResolutionNotes, 500))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ALERT_MACHINE_ID)
                            .from(Alert::Table, Alert::MachineId)
                            .to(Machine::Table, Machine::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALERT_MACHINE_ID)
                    .table(Alert::Table)
                    .col(Alert::MachineId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALERT_STATUS)
                    .table(Alert::Table)
                    .col(Alert::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALERT_STATUS)
                    .table(Alert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALERT_MACHINE_ID)
                    .table(Alert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Alert::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Alert {
    Table,
    Id,
    MachineId,
    AlertType,
    Severity,
    Title,
    Message,
    CreatedDate,
    AcknowledgedDate,
    AcknowledgedBy,
    ResolvedDate,
    ResolvedBy,
    Status,
    ResolutionNotes,
}
