use super::*;
use crate::helpers::*;
use crate::models::common::Location;
use crate::models::problem::JobKind;

#[test]
fn can_register_entities_incrementally() {
    let mut problem = Problem::new(2);

    problem.add_vehicle(create_test_vehicle(1));
    problem.add_job(create_test_job(1));

    let mut pickup = create_test_job(2);
    pickup.kind = JobKind::Pickup;
    let mut delivery = create_test_job(3);
    delivery.kind = JobKind::Delivery;
    problem.add_shipment(pickup, delivery);

    assert_eq!(problem.amount_size(), 2);
    assert_eq!(problem.vehicles().len(), 1);
    assert_eq!(problem.jobs().len(), 1);
    assert_eq!(problem.shipments().len(), 1);
    assert_eq!(problem.shipments()[0].pickup.id, 2);
    assert_eq!(problem.shipments()[0].delivery.id, 3);
}

#[test]
fn can_attach_matrix_and_router() {
    let mut problem = Problem::new(0);
    assert!(problem.matrix().is_none());
    assert!(problem.router().is_none());
    assert!(!problem.geometry());

    problem.set_matrix(Matrix::new(2));
    problem.set_router(Router::Osrm { profile: "car".to_string(), server: Default::default() });
    problem.set_geometry(true);

    assert_eq!(problem.matrix().map(|matrix| matrix.size()), Some(2));
    assert_eq!(problem.router().map(|router| router.profile()), Some("car"));
    assert!(problem.geometry());
}

#[test]
fn can_keep_vehicle_locations_optional() {
    let mut problem = Problem::new(0);

    let mut vehicle = create_test_vehicle(1);
    vehicle.start = None;
    vehicle.end = Some(Location::Reference(1));
    problem.add_vehicle(vehicle);

    let vehicle = &problem.vehicles()[0];
    assert!(vehicle.start.is_none());
    assert_eq!(vehicle.end.and_then(|location| location.index()), Some(1));
}
