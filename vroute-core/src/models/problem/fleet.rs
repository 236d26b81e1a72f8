use crate::models::common::{Amount, Duration, Id, Location, Skills, TimeWindow};

/// Scheduling constraints pinning when a step's service may occur. Any subset of the three bounds
/// may be present; they are mutually independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForcedService {
    /// Service must start exactly at this time.
    pub at: Option<Duration>,
    /// Service must start at this time or later.
    pub after: Option<Duration>,
    /// Service must start at this time or earlier.
    pub before: Option<Duration>,
}

/// A step variant; activity referencing variants carry the id of the referenced entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// Leaving the start location.
    Start,
    /// Arriving at the end location.
    End,
    /// Serving a single job.
    Job(Id),
    /// Serving the pickup side of a shipment.
    Pickup(Id),
    /// Serving the delivery side of a shipment.
    Delivery(Id),
    /// Taking a break.
    Break(Id),
}

/// An activity a vehicle is expected to perform at a given position of its route, kept in
/// declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VehicleStep {
    /// A step variant.
    pub kind: StepKind,
    /// Scheduling constraints for the step's service.
    pub forced_service: ForcedService,
}

/// A driver break which has to be scheduled within one of its time windows.
#[derive(Clone, Debug)]
pub struct Break {
    /// A break id.
    pub id: Id,
    /// Time windows when the break may start; non empty, sorted ascending by `(start, end)`.
    pub time_windows: Vec<TimeWindow>,
    /// A break duration.
    pub service: Duration,
    /// An arbitrary break description.
    pub description: String,
}

/// Represents a vehicle together with its working shift constraints.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// A vehicle id.
    pub id: Id,
    /// An optional start location; an open route start when absent.
    pub start: Option<Location>,
    /// An optional end location; an open route end when absent.
    pub end: Option<Location>,
    /// A capacity shared across the whole route.
    pub capacity: Amount,
    /// Skills provided by the vehicle.
    pub skills: Skills,
    /// A working shift time window.
    pub time_window: TimeWindow,
    /// Breaks sorted by their first time window `(start, end)`.
    pub breaks: Vec<Break>,
    /// An arbitrary vehicle description.
    pub description: String,
    /// Expected route activities in declaration order.
    pub steps: Vec<VehicleStep>,
    /// A routing profile name.
    pub profile: String,
}
