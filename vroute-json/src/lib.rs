//! Json crate ingests untrusted problem definitions written in json and produces the validated
//! core model, failing fast with a precise diagnostic on the first malformed or inconsistent
//! piece of input.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod format;

pub use crate::format::Config;
pub use crate::format::problem::parse_problem;
