//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Listing cache for sales rep retailer pages
//! - JWT keys for issuing and verifying access tokens
//! - Super-admin email and bcrypt cost used by user management

use sea_orm::DatabaseConnection;

use crate::server::{cache::ListingCache, service::auth::token::TokenKeys};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ListingCache` wraps a `moka` cache that shares its storage between clones
/// - `TokenKeys` holds the derived signing keys
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Cache of serialized retailer pages, namespaced per sales rep.
    pub cache: ListingCache,

    /// Keys used to sign and verify bearer tokens.
    pub keys: TokenKeys,

    /// Email of the predefined super-admin, lowercased, if configured.
    pub superadmin_email: Option<String>,

    /// Bcrypt cost applied when hashing new passwords.
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `cache` - Listing cache shared by all requests
    /// - `keys` - JWT signing and verification keys
    /// - `superadmin_email` - Configured super-admin email
    /// - `bcrypt_cost` - Cost for password hashing
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        cache: ListingCache,
        keys: TokenKeys,
        superadmin_email: Option<String>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            db,
            cache,
            keys,
            superadmin_email,
            bcrypt_cost,
        }
    }
}
