//! Retailer Console Test Utils
//!
//! Shared testing utilities for the retailer console service. This crate offers a builder for
//! creating test contexts backed by in-memory SQLite databases, factories that insert entities
//! with sensible defaults and fixtures that build entity models without touching a database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert entities with defaults (`create_region`, `create_retailer`, ...)
//! - **fixture**: In-memory entity models for pure unit tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Region;
//!
//! #[tokio::test]
//! async fn test_region_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Region)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
