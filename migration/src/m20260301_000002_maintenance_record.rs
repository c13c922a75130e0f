use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_machine::Machine;

static IDX_MAINTENANCE_RECORD_MACHINE_ID: &str = "idx-maintenance_record-machine_id";
static FK_MAINTENANCE_RECORD_MACHINE_ID: &str = "fk-maintenance_record-machine_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceRecord::Id))
                    .col(integer(MaintenanceRecord::MachineId))
                    .col(integer(MaintenanceRecord::MaintenanceType))
                    .col(date(MaintenanceRecord::MaintenanceDate))
                    .col(string_len(MaintenanceRecord::Title, 200))
                    .col(string_len_null(MaintenanceRecord::Description, 1000))
                    .col(string_len(MaintenanceRecord::PerformedBy, 100))
                    .col(double(MaintenanceRecord::Cost))
                    .col(string_len_null(MaintenanceRecord::PartsUsed, 100))
                    .col(integer(MaintenanceRecord::Status))
                    .col(date_null(MaintenanceRecord::CompletedDate))
                    .col(string_len_null(MaintenanceRecord::Notes, 500))
                    .col(timestamp(MaintenanceRecord::CreatedAt))
                    .col(timestamp(MaintenanceRecord::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MAINTENANCE_RECORD_MACHINE_ID)
                            .from(MaintenanceRecord::Table, MaintenanceRecord::MachineId)
                            .to(Machine::Table, Machine::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MAINTENANCE_RECORD_MACHINE_ID)
                    .table(MaintenanceRecord::Table)
                    .col(MaintenanceRecord::MachineId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MAINTENANCE_RECORD_MACHINE_ID)
                    .table(MaintenanceRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MaintenanceRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceRecord {
    Table,
    Id,
    MachineId,
    MaintenanceType,
    MaintenanceDate,
    Title,
    Description,
    PerformedBy,
    Cost,
    PartsUsed,
    Status,
    CompletedDate,
    Notes,
    CreatedAt,
    UpdatedAt,
}
