//! A collection of models to represent a complete problem instance.

pub mod common;
pub mod problem;

mod domain;
pub use self::domain::Problem;

mod matrix;
pub use self::matrix::Matrix;
