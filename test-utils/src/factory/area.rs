//! Area factory for creating test area entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test areas with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let area = AreaFactory::new(&db, region.id).name("Banani").build().await?;
/// ```
pub struct AreaFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::area::Model,
}

impl<'a> AreaFactory<'a> {
    /// Creates a new AreaFactory for the given region.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `region_id` - Region the area belongs to
    ///
    /// # Returns
    /// - `AreaFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, region_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::area::entity_builder()
            .name(format!("Area {}", id))
            .region_id(region_id)
            .build();

        Self { db, entity }
    }

    /// Sets the area name.
    ///
    /// # Arguments
    /// - `name` - Area name, unique within its region
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Builds and inserts the area entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::area::Model)` - Created area entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::area::Model, DbErr> {
        entity::area::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            region_id: ActiveValue::Set(self.entity.region_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an area with default values in the given region.
///
/// Shorthand for `AreaFactory::new(db, region_id).build().await`.
pub async fn create_area(
    db: &DatabaseConnection,
    region_id: i32,
) -> Result<entity::area::Model, DbErr> {
    AreaFactory::new(db, region_id).build().await
}
