//! Declarative test builder for Phase 1 setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture records. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_resource_tables: bool,

    // Database fixtures to insert
    scientists: Vec<String>,
    planets: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_resource_tables: false,
            scientists: Vec::new(),
            planets: Vec::new(),
        }
    }

    /// Add the scientists, planets and missions tables to the test database.
    ///
    /// Tables are created in dependency order so the foreign keys on missions resolve.
    pub fn with_resource_tables(mut self) -> Self {
        self.include_resource_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use voyager_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), voyager_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Scientist)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock scientist into database.
    ///
    /// Queues a scientist fixture with the provided name to be inserted during `build()`.
    pub fn with_mock_scientist(mut self, name: impl Into<String>) -> Self {
        self.scientists.push(name.into());
        self
    }

    /// Insert mock planet into database.
    ///
    /// Queues a planet fixture with the provided name to be inserted during `build()`.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (resource tables if specified, then custom tables)
    /// 2. Inserts database fixtures (scientists, then planets)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_resource_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Scientist),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Mission),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for name in self.scientists {
            setup.scientist().insert_mock_scientist(&name).await?;
        }

        for name in self.planets {
            setup.planet().insert_mock_planet(&name).await?;
        }

        Ok(setup)
    }
}
