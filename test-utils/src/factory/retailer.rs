//! Retailer factory for creating test retailer entities.
//!
//! Retailers reference a region, an area and a distributor, so the factory takes their IDs
//! up front. Everything else defaults from `fixture::retailer`.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test retailers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let retailer = RetailerFactory::new(&db, region.id, area.id, distributor.id)
///     .name("Corner Shop")
///     .points(25)
///     .build()
///     .await?;
/// ```
pub struct RetailerFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::retailer::Model,
}

impl<'a> RetailerFactory<'a> {
    /// Creates a new RetailerFactory with a unique name and phone number.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `region_id` - Region of the retailer
    /// - `area_id` - Area of the retailer, expected to belong to `region_id`
    /// - `distributor_id` - Distributor supplying the retailer
    ///
    /// # Returns
    /// - `RetailerFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        region_id: i32,
        area_id: i32,
        distributor_id: i32,
    ) -> Self {
        let id = next_id();
        let entity = fixture::retailer::entity_builder()
            .name(format!("Retailer {}", id))
            .phone(Some(format!("0170{:07}", id)))
            .region_id(region_id)
            .area_id(area_id)
            .distributor_id(distributor_id)
            .build();

        Self { db, entity }
    }

    /// Sets the retailer name.
    ///
    /// # Arguments
    /// - `name` - Display name of the retailer
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the phone number, `None` to leave it empty.
    ///
    /// # Arguments
    /// - `phone` - Phone number, unique across retailers
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn phone(mut self, phone: Option<&str>) -> Self {
        self.entity.phone = phone.map(str::to_string);
        self
    }

    /// Sets the territory.
    ///
    /// # Arguments
    /// - `territory_id` - Territory within the retailer's area
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn territory_id(mut self, territory_id: Option<i32>) -> Self {
        self.entity.territory_id = territory_id;
        self
    }

    /// Sets the points balance.
    pub fn points(mut self, points: i32) -> Self {
        self.entity.points = points;
        self
    }

    /// Sets the routes text.
    pub fn routes(mut self, routes: impl Into<String>) -> Self {
        self.entity.routes = routes.into();
        self
    }

    /// Sets the notes text.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.entity.notes = notes.into();
        self
    }

    /// Builds and inserts the retailer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::retailer::Model)` - Created retailer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::retailer::Model, DbErr> {
        entity::retailer::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            phone: ActiveValue::Set(self.entity.phone),
            region_id: ActiveValue::Set(self.entity.region_id),
            area_id: ActiveValue::Set(self.entity.area_id),
            distributor_id: ActiveValue::Set(self.entity.distributor_id),
            territory_id: ActiveValue::Set(self.entity.territory_id),
            points: ActiveValue::Set(self.entity.points),
            routes: ActiveValue::Set(self.entity.routes),
            notes: ActiveValue::Set(self.entity.notes),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a retailer with default values.
///
/// Shorthand for `RetailerFactory::new(db, region_id, area_id, distributor_id).build().await`.
///
/// # Returns
/// - `Ok(entity::retailer::Model)` - Created retailer entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_retailer(
    db: &DatabaseConnection,
    region_id: i32,
    area_id: i32,
    distributor_id: i32,
) -> Result<entity::retailer::Model, DbErr> {
    RetailerFactory::new(db, region_id, area_id, distributor_id)
        .build()
        .await
}
