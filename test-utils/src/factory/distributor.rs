//! Distributor factory for creating test distributor entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test distributors with customizable fields.
pub struct DistributorFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::distributor::Model,
}

impl<'a> DistributorFactory<'a> {
    /// Creates a new DistributorFactory with a unique default name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::distributor::entity_builder()
            .name(format!("Distributor {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the distributor name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Builds and inserts the distributor entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::distributor::Model)` - Created distributor entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::distributor::Model, DbErr> {
        entity::distributor::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a distributor with default values.
pub async fn create_distributor(
    db: &DatabaseConnection,
) -> Result<entity::distributor::Model, DbErr> {
    DistributorFactory::new(db).build().await
}
