//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated input
//! from controllers into services.

pub mod assignment;
pub mod import;
pub mod pagination;
pub mod retailer;
pub mod sales_rep;
pub mod taxonomy;
pub mod user;
