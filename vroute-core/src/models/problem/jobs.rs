use crate::models::common::{Amount, Duration, Id, Location, Priority, Skills, TimeWindow};

/// Specifies the role a job plays within the plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobKind {
    /// A standalone visit.
    Single,
    /// The pickup side of a shipment.
    Pickup,
    /// The delivery side of a shipment.
    Delivery,
}

/// Represents a single visit which has to be performed by some vehicle.
#[derive(Clone, Debug)]
pub struct Job {
    /// A job id.
    pub id: Id,
    /// A job role within the plan.
    pub kind: JobKind,
    /// A place where the job has to be performed.
    pub location: Location,
    /// A service duration spent at the job location.
    pub service: Duration,
    /// An amount picked up at the depot and dropped at the job.
    pub delivery: Amount,
    /// An amount picked up at the job and dropped at the depot.
    pub pickup: Amount,
    /// Skills required to serve the job.
    pub skills: Skills,
    /// A job priority, bounded by [`crate::models::common::MAX_PRIORITY`].
    pub priority: Priority,
    /// Time windows when service may start, sorted ascending by `(start, end)`.
    pub time_windows: Vec<TimeWindow>,
    /// An arbitrary job description.
    pub description: String,
}

/// A linked pickup and delivery pair which must be served by the same vehicle, pickup first.
///
/// Both sides share one amount, one skill set and one priority value, assigned to the jobs at
/// construction time. The relative ordering itself is enforced by the solver.
#[derive(Clone, Debug)]
pub struct Shipment {
    /// The pickup side.
    pub pickup: Job,
    /// The delivery side.
    pub delivery: Job,
}
