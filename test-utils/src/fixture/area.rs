//! Area fixtures for creating in-memory test data.

use entity::area;

/// Default test area name.
pub const DEFAULT_NAME: &str = "Gulshan";

/// Default region ID for areas.
pub const DEFAULT_REGION_ID: i32 = 1;

/// Creates an area entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Gulshan"`
/// - region_id: `1`
///
/// # Returns
/// - `area::Model` - In-memory area entity
pub fn entity() -> area::Model {
    entity_builder().build()
}

/// Creates an area entity builder for customization.
///
/// # Returns
/// - `AreaEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> AreaEntityBuilder {
    AreaEntityBuilder::default()
}

/// Builder for creating customized area entity models.
pub struct AreaEntityBuilder {
    id: i32,
    name: String,
    region_id: i32,
}

impl Default for AreaEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            region_id: DEFAULT_REGION_ID,
        }
    }
}

impl AreaEntityBuilder {
    /// Sets the area ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the area name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the region the area belongs to.
    pub fn region_id(mut self, region_id: i32) -> Self {
        self.region_id = region_id;
        self
    }

    /// Builds and returns the area entity model.
    pub fn build(self) -> area::Model {
        area::Model {
            id: self.id,
            name: self.name,
            region_id: self.region_id,
        }
    }
}
