//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and the listing cache
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod assignment;
pub mod auth;
pub mod import;
pub mod retailer;
pub mod sales_rep;
pub mod taxonomy;
pub mod user;
