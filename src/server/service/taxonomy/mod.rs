//! Business rules for the taxonomy tables.
//!
//! Names are unique within their scope, parents must exist, rows still referenced by
//! children or retailers cannot be deleted, and areas or territories with retailers cannot
//! move to another parent. Cached retailer pages embed taxonomy names, so every rename or
//! delete drops all cached listing pages.

pub mod area;
pub mod distributor;
pub mod region;
pub mod territory;
