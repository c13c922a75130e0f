use sea_orm_migration::{prelude::*, schema::*};

static IDX_MACHINE_NAME: &str = "idx-machine-name";
static IDX_MACHINE_SERIAL_NUMBER_LOWER: &str = "idx-machine-serial_number-lower";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Machine::Table)
                    .if_not_exists()
                    .col(pk_auto(Machine::Id))
                    .col(string_len(Machine::Name, 100))
                    .col(string_len_null(Machine::Description, 200))
                    .col(string_len_uniq(Machine::SerialNumber, 50))
                    .col(string_len(Machine::Model, 50))
                    .col(string_len(Machine::Manufacturer, 100))
                    .col(date(Machine::InstallationDate))
                    .col(integer(Machine::Status))
                    .col(string_len_null(Machine::Location, 100))
                    .col(string_len_null(Machine::Department, 100))
                    .col(date_null(Machine::LastMaintenanceDate))
                    .col(date_null(Machine::NextMaintenanceDate))
                    .col(integer(Machine::MaintenanceIntervalDays).default(30))
                    .col(string_len_null(Machine::Notes, 500))
                    .col(string_len_null(Machine::ImagePath, 500))
                    .col(timestamp(Machine::CreatedAt))
                    .col(timestamp(Machine::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MACHINE_NAME)
                    .table(Machine::Table)
                    .col(Machine::Name)
                    .to_owned(),
            )
            .await?;

        // Serial numbers are unique regardless of case
        manager
            .get_connection()
            .execute_unprepared(&format!(
                r#"CREATE UNIQUE INDEX IF NOT EXISTS "{IDX_MACHINE_SERIAL_NUMBER_LOWER}" ON "machine" (LOWER("serial_number"))"#
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MACHINE_SERIAL_NUMBER_LOWER)
                    .table(Machine::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MACHINE_NAME)
                    .table(Machine::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Machine::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Machine {
    Table,
    Id,
    Name,
    Description,
    SerialNumber,
    Model,
    Manufacturer,
    InstallationDate,
    Status,
    Location,
    Department,
    LastMaintenanceDate,
    NextMaintenanceDate,
    MaintenanceIntervalDays,
    Notes,
    ImagePath,
    CreatedAt,
    UpdatedAt,
}
