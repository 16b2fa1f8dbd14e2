use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Region, Area};
///
/// let test = TestBuilder::new()
///     .with_table(Region)
///     .with_table(Area)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign keys
    /// after the tables they reference).
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

    /// Adds the taxonomy tables: Region, Area, Territory and Distributor.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_taxonomy_tables(self) -> Self {
        self.with_table(Region)
            .with_table(Area)
            .with_table(Territory)
            .with_table(Distributor)
    }

    /// Adds every table needed for retailer and assignment operations.
    ///
    /// Adds the taxonomy tables followed by User, SalesRep, Retailer and SalesRepRetailer in
    /// dependency order.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_retailer_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_retailer_tables(self) -> Self {
        self.with_taxonomy_tables()
            .with_table(User)
            .with_table(SalesRep)
            .with_table(Retailer)
            .with_table(SalesRepRetailer)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite connection and executes all CREATE TABLE statements in the
    /// order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
