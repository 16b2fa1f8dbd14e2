//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each entity
//! has its own factory module with a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let region = factory::create_region(&db).await?;
//!     let area = factory::create_area(&db, region.id).await?;
//!
//!     // Retailer with its whole taxonomy
//!     let (region, area, distributor, retailer) =
//!         factory::helpers::create_retailer_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let retailer = factory::retailer::RetailerFactory::new(&db, region.id, area.id, distributor.id)
//!     .name("Corner Shop")
//!     .phone(Some("01700000000"))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `region`, `area`, `territory`, `distributor` - Taxonomy entities
//! - `retailer` - Retailer entities
//! - `user` - User entities with bcrypt-hashed passwords
//! - `sales_rep` - Sales rep profiles
//! - `assignment` - Sales rep to retailer assignments
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod area;
pub mod assignment;
pub mod distributor;
pub mod helpers;
pub mod region;
pub mod retailer;
pub mod sales_rep;
pub mod territory;
pub mod user;

pub use area::create_area;
pub use assignment::create_assignment;
pub use distributor::create_distributor;
pub use region::create_region;
pub use retailer::create_retailer;
pub use sales_rep::create_sales_rep;
pub use territory::create_territory;
pub use user::{create_admin, create_user};
