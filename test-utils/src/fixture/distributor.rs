//! Distributor fixtures for creating in-memory test data.

use entity::distributor;

/// Default test distributor name.
pub const DEFAULT_NAME: &str = "Test Distributor";

/// Creates a distributor entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Distributor"`
pub fn entity() -> distributor::Model {
    entity_builder().build()
}

/// Creates a distributor entity builder for customization.
pub fn entity_builder() -> DistributorEntityBuilder {
    DistributorEntityBuilder::default()
}

/// Builder for creating customized distributor entity models.
pub struct DistributorEntityBuilder {
    id: i32,
    name: String,
}

impl Default for DistributorEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl DistributorEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> distributor::Model {
        distributor::Model {
            id: self.id,
            name: self.name,
        }
    }
}
