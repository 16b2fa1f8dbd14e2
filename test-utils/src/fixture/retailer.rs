//! Retailer fixtures for creating in-memory test data.
//!
//! Provides retailer entity models without database insertion. The retailer factory uses
//! these values as its defaults.

use chrono::{DateTime, TimeZone, Utc};
use entity::retailer;

/// Default test retailer name.
pub const DEFAULT_NAME: &str = "Test Retailer";

/// Default region, area and distributor ID for retailers.
pub const DEFAULT_PARENT_ID: i32 = 1;

/// Default points balance.
pub const DEFAULT_POINTS: i32 = 0;

/// Fixed timestamp used for `updated_at` so fixtures compare equal.
pub fn default_updated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a retailer entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Retailer"`
/// - phone: `None`
/// - region_id, area_id, distributor_id: `1`
/// - territory_id: `None`
/// - points: `0`
/// - routes, notes: empty
///
/// # Returns
/// - `retailer::Model` - In-memory retailer entity
pub fn entity() -> retailer::Model {
    entity_builder().build()
}

/// Creates a retailer entity builder for customization.
///
/// # Returns
/// - `RetailerEntityBuilder` - Builder instance with default values
///
/// # Example
///
/// ```rust,ignore
/// let retailer = fixture::retailer::entity_builder()
///     .name("Corner Shop")
///     .points(40)
///     .build();
/// ```
pub fn entity_builder() -> RetailerEntityBuilder {
    RetailerEntityBuilder::default()
}

/// Builder for creating customized retailer entity models.
pub struct RetailerEntityBuilder {
    model: retailer::Model,
}

impl Default for RetailerEntityBuilder {
    fn default() -> Self {
        Self {
            model: retailer::Model {
                id: 1,
                name: DEFAULT_NAME.to_string(),
                phone: None,
                region_id: DEFAULT_PARENT_ID,
                area_id: DEFAULT_PARENT_ID,
                distributor_id: DEFAULT_PARENT_ID,
                territory_id: None,
                points: DEFAULT_POINTS,
                routes: String::new(),
                notes: String::new(),
                updated_at: default_updated_at(),
            },
        }
    }
}

impl RetailerEntityBuilder {
    /// Sets the retailer ID.
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    /// Sets the retailer name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    /// Sets the phone number.
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.model.phone = phone;
        self
    }

    /// Sets the region ID.
    pub fn region_id(mut self, region_id: i32) -> Self {
        self.model.region_id = region_id;
        self
    }

    /// Sets the area ID.
    pub fn area_id(mut self, area_id: i32) -> Self {
        self.model.area_id = area_id;
        self
    }

    /// Sets the distributor ID.
    pub fn distributor_id(mut self, distributor_id: i32) -> Self {
        self.model.distributor_id = distributor_id;
        self
    }

    /// Sets the optional territory ID.
    pub fn territory_id(mut self, territory_id: Option<i32>) -> Self {
        self.model.territory_id = territory_id;
        self
    }

    /// Sets the points balance.
    pub fn points(mut self, points: i32) -> Self {
        self.model.points = points;
        self
    }

    /// Sets the routes text.
    pub fn routes(mut self, routes: impl Into<String>) -> Self {
        self.model.routes = routes.into();
        self
    }

    /// Sets the notes text.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.model.notes = notes.into();
        self
    }

    /// Builds and returns the retailer entity model.
    pub fn build(self) -> retailer::Model {
        self.model
    }
}
