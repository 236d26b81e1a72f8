//! Problem ingestion: hand walks the generic json tree, validating document shape and cross
//! entity invariants, and assembles the aggregate model.

mod field_reader;
mod fleet_reader;
mod job_reader;
mod reader;

pub use self::reader::parse_problem;
