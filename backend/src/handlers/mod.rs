//! HTTP handlers for FarmSync

pub mod crop;
pub mod farm;
pub mod finance;
pub mod health;
pub mod task;
pub mod transaction;
pub mod weather;

pub use crop::*;
pub use farm::*;
pub use finance::*;
pub use health::*;
pub use task::*;
pub use transaction::*;
pub use weather::*;
