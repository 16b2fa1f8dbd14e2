//! Region factory for creating test region entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test regions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let region = RegionFactory::new(&db).name("Khulna").build().await?;
/// ```
pub struct RegionFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::region::Model,
}

impl<'a> RegionFactory<'a> {
    /// Creates a new RegionFactory with a unique default name.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RegionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::region::entity_builder()
            .name(format!("Region {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the region name.
    ///
    /// # Arguments
    /// - `name` - Region name, unique across regions
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Builds and inserts the region entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::region::Model)` - Created region entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::region::Model, DbErr> {
        entity::region::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a region with default values.
///
/// Shorthand for `RegionFactory::new(db).build().await`.
pub async fn create_region(db: &DatabaseConnection) -> Result<entity::region::Model, DbErr> {
    RegionFactory::new(db).build().await
}
