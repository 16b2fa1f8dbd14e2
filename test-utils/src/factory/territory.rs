//! Territory factory for creating test territory entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test territories with customizable fields.
pub struct TerritoryFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::territory::Model,
}

impl<'a> TerritoryFactory<'a> {
    /// Creates a new TerritoryFactory for the given area.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `area_id` - Area the territory belongs to
    pub fn new(db: &'a DatabaseConnection, area_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::territory::entity_builder()
            .name(format!("Territory {}", id))
            .area_id(area_id)
            .build();

        Self { db, entity }
    }

    /// Sets the territory name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Builds and inserts the territory entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::territory::Model)` - Created territory entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::territory::Model, DbErr> {
        entity::territory::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            area_id: ActiveValue::Set(self.entity.area_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a territory with default values in the given area.
pub async fn create_territory(
    db: &DatabaseConnection,
    area_id: i32,
) -> Result<entity::territory::Model, DbErr> {
    TerritoryFactory::new(db, area_id).build().await
}
