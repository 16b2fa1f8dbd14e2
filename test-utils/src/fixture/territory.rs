//! Territory fixtures for creating in-memory test data.

use entity::territory;

/// Default test territory name.
pub const DEFAULT_NAME: &str = "Gulshan North";

/// Default area ID for territories.
pub const DEFAULT_AREA_ID: i32 = 1;

/// Creates a territory entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Gulshan North"`
/// - area_id: `1`
pub fn entity() -> territory::Model {
    entity_builder().build()
}

/// Creates a territory entity builder for customization.
pub fn entity_builder() -> TerritoryEntityBuilder {
    TerritoryEntityBuilder::default()
}

/// Builder for creating customized territory entity models.
pub struct TerritoryEntityBuilder {
    id: i32,
    name: String,
    area_id: i32,
}

impl Default for TerritoryEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            area_id: DEFAULT_AREA_ID,
        }
    }
}

impl TerritoryEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn area_id(mut self, area_id: i32) -> Self {
        self.area_id = area_id;
        self
    }

    pub fn build(self) -> territory::Model {
        territory::Model {
            id: self.id,
            name: self.name,
            area_id: self.area_id,
        }
    }
}
