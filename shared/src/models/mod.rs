//! Domain models for FarmSync

mod crop;
mod farm;
mod task;
mod transaction;
mod weather;

pub use crop::*;
pub use farm::*;
pub use task::*;
pub use transaction::*;
pub use weather::*;
