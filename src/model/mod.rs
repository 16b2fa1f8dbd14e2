//! Wire DTOs shared by every HTTP endpoint.
//!
//! Field names are serialized in camelCase. Every DTO derives `ToSchema` so it shows up in the
//! generated OpenAPI document.

pub mod api;
pub mod assignment;
pub mod auth;
pub mod retailer;
pub mod taxonomy;
pub mod user;
