//! SeaORM entity definitions for the retailer console schema.

pub mod prelude;

pub mod area;
pub mod distributor;
pub mod region;
pub mod retailer;
pub mod sales_rep;
pub mod sales_rep_retailer;
pub mod territory;
pub mod user;
