//! Region fixtures for creating in-memory test data.

use entity::region;

/// Default test region name.
pub const DEFAULT_NAME: &str = "Dhaka";

/// Creates a region entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Dhaka"`
pub fn entity() -> region::Model {
    entity_builder().build()
}

/// Creates a region entity builder for customization.
pub fn entity_builder() -> RegionEntityBuilder {
    RegionEntityBuilder::default()
}

/// Builder for creating customized region entity models.
pub struct RegionEntityBuilder {
    id: i32,
    name: String,
}

impl Default for RegionEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl RegionEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> region::Model {
        region::Model {
            id: self.id,
            name: self.name,
        }
    }
}
