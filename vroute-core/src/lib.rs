//! Core crate contains the domain model for vehicle routing problem instances: entities produced
//! by ingestion and consumed wholesale by an optimization engine.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod models;
pub mod routing;
pub mod utils;

/// A major crate types ready for import.
pub mod prelude {
    pub use crate::models::Problem;
    pub use crate::models::common::{
        Amount, Coordinates, Duration, Id, Location, MAX_PRIORITY, Priority, Skills, TimeWindow,
    };
    pub use crate::utils::{Error, Result};
}
