//! A collection of utility types shared across the workspace.

mod error;
pub use self::error::*;
