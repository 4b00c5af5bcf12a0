use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Coffee, Flavor};
///
/// let test = TestBuilder::new()
///     .with_table(Coffee)
///     .with_table(Flavor)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Whether the database is file-backed instead of in-memory.
    file_database: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            file_database: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the coffee catalogue needs.
    ///
    /// Tables are added in dependency order:
    /// - Coffee
    /// - Flavor
    /// - CoffeeFlavor
    /// - Event
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_coffee_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_coffee_tables(self) -> Self {
        self.with_table(Coffee)
            .with_table(Flavor)
            .with_table(CoffeeFlavor)
            .with_table(Event)
    }

    /// Backs the test database with a file in a temporary directory.
    ///
    /// The in-memory database runs on a single connection, so concurrent transactions
    /// are serialized. A file-backed database allows several connections, letting
    /// transactions from concurrent tasks overlap.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_file_database(mut self) -> Self {
        self.file_database = true;
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    /// - `Err(TestError::Io)` - Failed to create the directory for a file-backed database
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = if self.file_database {
            TestContext::on_disk()?
        } else {
            TestContext::new()
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
