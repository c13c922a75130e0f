//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Configuration methods can be chained, with all operations queued and executed
//! during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Sets up an in-memory database with the requested tables and machine fixtures.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_machine_tables: bool,

    // Database fixtures to insert
    machines: Vec<(i32, String)>, // (machine_id, serial_number)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_machine_tables: false,
            machines: Vec::new(),
        }
    }

    /// Add the machine, maintenance record and alert tables to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_machine_tables(mut self) -> Self {
        self.include_machine_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Useful to leave out a table on purpose, for example to make alert inserts fail
    /// while machine writes keep working.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use plantwatch_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), plantwatch_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(Machine).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock machine into the database.
    ///
    /// # Arguments
    /// - `machine_id` - Primary key of the machine
    /// - `serial_number` - Serial number of the machine
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_machine(mut self, machine_id: i32, serial_number: impl Into<String>) -> Self {
        self.machines.push((machine_id, serial_number.into()));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_machine_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Machine),
                schema.create_table_from_entity(entity::prelude::MaintenanceRecord),
                schema.create_table_from_entity(entity::prelude::Alert),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (machine_id, serial_number) in self.machines {
            setup
                .machine()
                .insert_mock_machine(machine_id, &serial_number)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
