//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for unit tests and serve as default values
//! for the factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let region = fixture::region::entity();
//!
//! let area = fixture::area::entity_builder()
//!     .name("Gulshan")
//!     .region_id(region.id)
//!     .build();
//! ```

pub mod area;
pub mod distributor;
pub mod region;
pub mod retailer;
pub mod territory;

pub use area::{entity as area_entity, entity_builder as area_entity_builder};
pub use distributor::{entity as distributor_entity, entity_builder as distributor_entity_builder};
pub use region::{entity as region_entity, entity_builder as region_entity_builder};
pub use retailer::{entity as retailer_entity, entity_builder as retailer_entity_builder};
pub use territory::{entity as territory_entity, entity_builder as territory_entity_builder};
