#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

use crate::models::common::Duration;

/// A geographic point given as (longitude, latitude) pair. The exact axis convention is owned by
/// the routing engine which consumes the coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    /// Longitude.
    pub lng: f64,
    /// Latitude.
    pub lat: f64,
}

impl Coordinates {
    /// Creates a new `Coordinates`.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// Specifies how a place is addressed within the problem.
///
/// A place is either a reference into a user supplied cost matrix, a real world coordinate
/// resolved later through a routing engine, or both at once when a custom matrix is supplied
/// alongside geometry kept for display purposes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Location {
    /// An index reference into a user supplied cost matrix.
    Reference(usize),
    /// A real world coordinate resolved through a routing engine.
    Coordinate(Coordinates),
    /// A matrix reference with coordinates kept for display purposes.
    Mixed {
        /// An index in the cost matrix.
        index: usize,
        /// Coordinates used for display only.
        coordinates: Coordinates,
    },
}

impl Location {
    /// Returns a matrix index if the location carries one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Location::Reference(index) | Location::Mixed { index, .. } => Some(*index),
            Location::Coordinate(_) => None,
        }
    }

    /// Returns coordinates if the location carries them.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            Location::Coordinate(coordinates) | Location::Mixed { coordinates, .. } => Some(*coordinates),
            Location::Reference(_) => None,
        }
    }
}

/// Represents a time window.
///
/// Ordering is lexicographic by `(start, end)` which defines the canonical order of time window
/// sequences across the model. `start <= end` is not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeWindow {
    /// Earliest time.
    pub start: Duration,
    /// Latest time.
    pub end: Duration,
}

impl TimeWindow {
    /// Creates a new `TimeWindow`.
    pub fn new(start: Duration, end: Duration) -> Self {
        Self { start, end }
    }

    /// Returns unlimited time window.
    pub fn max() -> Self {
        Self { start: 0, end: Duration::MAX }
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::max()
    }
}
