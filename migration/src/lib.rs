pub use sea_orm_migration::prelude::*;

mod m20260301_000001_machine;
mod m20260301_000002_maintenance_record;
mod m20260301_000003_alert;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_machine::Migration),
            Box::new(m20260301_000002_maintenance_record::Migration),
            Box::new(m20260301_000003_alert::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use sea_orm_migration::sea_orm::Database;

    use super::*;

    async fn insert_machine(db: &impl ConnectionTrait, serial_number: &str) -> Result<(), DbErr> {
        db.execute_unprepared(&format!(
            "INSERT INTO machine (name, serial_number, model, manufacturer, installation_date, \
             status, created_at, updated_at) VALUES ('Press', '{serial_number}', 'P-1', 'Acme', \
             '2024-01-01', 0, '2024-01-01 00:00:00', '2024-01-01 00:00:00')"
        ))
        .await
        .map(|_| ())
    }

    #[tokio::test]
    async fn test_migrator_applies_and_reverts() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        assert!(Migrator::up(&db, None).await.is_ok());
        assert!(Migrator::down(&db, None).await.is_ok());
    }

    #[tokio::test]
    async fn test_migrator_rejects_serial_differing_only_in_case() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        assert!(insert_machine(&db, "SN1").await.is_ok());
        assert!(insert_machine(&db, "SN2").await.is_ok());
        assert!(insert_machine(&db, "sn1").await.is_err());
    }
}
