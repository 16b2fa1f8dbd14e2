//! Repositories for the region → area → territory hierarchy and distributors.

pub mod area;
pub mod distributor;
pub mod region;
pub mod territory;
