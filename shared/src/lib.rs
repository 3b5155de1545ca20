//! Shared types and models for FarmSync
//!
//! This crate contains the domain records and the pure status/aggregation
//! logic shared between the backend service and its tests.

pub mod classify;
pub mod finance;
pub mod models;

pub use classify::*;
pub use finance::*;
pub use models::*;
