#[cfg(test)]
#[path = "../../tests/unit/models/domain_test.rs"]
mod domain_test;

use crate::models::Matrix;
use crate::models::problem::{Job, Shipment, Vehicle};
use crate::routing::Router;

/// Defines a complete, validated problem instance as produced by ingestion and consumed wholesale
/// by the solver.
///
/// The aggregate is built once per parse call and populated incrementally; it exclusively owns
/// every entity it holds. Travel costs come either from a user supplied [`Matrix`] or are computed
/// by the solver through the attached [`Router`].
#[derive(Debug, Default)]
pub struct Problem {
    amount_size: usize,
    vehicles: Vec<Vehicle>,
    jobs: Vec<Job>,
    shipments: Vec<Shipment>,
    matrix: Option<Matrix>,
    router: Option<Router>,
    geometry: bool,
}

impl Problem {
    /// Creates an empty problem with the amount dimensionality fixed for the whole instance.
    pub fn new(amount_size: usize) -> Self {
        Self { amount_size, ..Self::default() }
    }

    /// Registers a vehicle.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    /// Registers a single job.
    pub fn add_job(&mut self, job: Job) {
        self.jobs.push(job);
    }

    /// Registers a linked pickup and delivery pair.
    pub fn add_shipment(&mut self, pickup: Job, delivery: Job) {
        self.shipments.push(Shipment { pickup, delivery });
    }

    /// Attaches a user supplied cost matrix.
    pub fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix = Some(matrix);
    }

    /// Attaches the routing capability constructed for the instance.
    pub fn set_router(&mut self, router: Router) {
        self.router = Some(router);
    }

    /// Sets whether route geometry should be added to the output.
    pub fn set_geometry(&mut self, geometry: bool) {
        self.geometry = geometry;
    }

    /// Returns the amount dimensionality shared by all capacity and demand vectors.
    pub fn amount_size(&self) -> usize {
        self.amount_size
    }

    /// Returns registered vehicles.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Returns registered single jobs.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Returns registered shipments.
    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    /// Returns the user supplied cost matrix if any.
    pub fn matrix(&self) -> Option<&Matrix> {
        self.matrix.as_ref()
    }

    /// Returns the attached routing capability if any.
    pub fn router(&self) -> Option<&Router> {
        self.router.as_ref()
    }

    /// Checks whether route geometry is requested for the output.
    pub fn geometry(&self) -> bool {
        self.geometry
    }
}
