use super::*;
use crate::helpers::*;
use serde_json::json;
use vroute_core::models::common::{Amount, Coordinates, Location};

#[test]
fn can_parse_problem_with_custom_matrix() {
    let input = json!({
        "jobs": [{"id": 1, "location_index": 0}],
        "vehicles": [{"id": 1, "start_index": 0, "capacity": [2]}],
        "matrix": [[0, 5], [5, 0]]
    })
    .to_string();

    let problem = parse_problem(&input, &create_default_config()).expect("cannot parse problem");

    assert_eq!(problem.amount_size(), 1);
    assert_eq!(problem.vehicles().len(), 1);
    assert_eq!(problem.jobs().len(), 1);
    assert_eq!(problem.jobs()[0].location, Location::Reference(0));
    assert_eq!(problem.vehicles()[0].capacity, Amount::from(vec![2]));
    assert_eq!(problem.matrix().map(|matrix| matrix.size()), Some(2));
    assert_eq!(problem.matrix().map(|matrix| matrix[(0, 1)]), Some(5));
    assert!(matches!(problem.router(), Some(Router::Osrm { .. })));
}

#[test]
fn can_reject_location_index_exceeding_matrix_size() {
    let input = json!({
        "jobs": [{"id": 1, "location_index": 5}],
        "vehicles": [{"id": 1, "start_index": 0, "capacity": [2]}],
        "matrix": [[0, 5], [5, 0]]
    })
    .to_string();

    assert_eq!(
        parse_problem(&input, &create_default_config()).err(),
        Some(Error::Input("location_index exceeding matrix size for job 1.".to_string()))
    );
}

#[test]
fn can_parse_problem_with_coordinates() {
    let input = json!({
        "jobs": [{"id": 1, "location": [2.1, 48.8]}],
        "vehicles": [{"id": 1, "start": [2.0, 48.0]}]
    })
    .to_string();

    let problem = parse_problem(&input, &create_default_config()).expect("cannot parse problem");

    assert_eq!(problem.amount_size(), 0);
    assert_eq!(problem.jobs()[0].location, Location::Coordinate(Coordinates::new(2.1, 48.8)));
    assert_eq!(problem.vehicles()[0].start, Some(Location::Coordinate(Coordinates::new(2.0, 48.0))));
    assert!(problem.matrix().is_none());
    assert_eq!(problem.router().map(|router| router.profile()), Some("car"));
}

#[test]
fn can_keep_display_coordinates_alongside_matrix_index() {
    let input = json!({
        "jobs": [{"id": 1, "location_index": 1, "location": [2.1, 48.8]}],
        "vehicles": [{"id": 1, "start_index": 0}],
        "matrix": [[0, 5], [5, 0]]
    })
    .to_string();

    let problem = parse_problem(&input, &create_default_config()).expect("cannot parse problem");

    assert_eq!(
        problem.jobs()[0].location,
        Location::Mixed { index: 1, coordinates: Coordinates::new(2.1, 48.8) }
    );
}

#[test]
fn can_reject_shipment_missing_delivery() {
    let input = json!({
        "shipments": [{"pickup": {"id": 1, "location": [0.0, 0.0]}}],
        "vehicles": [{"id": 1, "start": [0.0, 0.0]}]
    })
    .to_string();

    assert_eq!(
        parse_problem(&input, &create_default_config()).err(),
        Some(Error::Input("Missing delivery for shipment.".to_string()))
    );
}

parameterized_test! {can_reject_invalid_document_shape, (document, expected), {
    assert_eq!(
        parse_problem(&document.to_string(), &create_default_config()).err(),
        Some(Error::Input(expected.to_string()))
    );
}}

can_reject_invalid_document_shape! {
    case01_empty_plan: (json!({"jobs": [], "shipments": [], "vehicles": [{"id": 1}]}),
        "Invalid jobs or shipments."),
    case02_missing_plan: (json!({"vehicles": [{"id": 1}]}), "Invalid jobs or shipments."),
    case03_missing_vehicles: (json!({"jobs": [{"id": 1, "location": [0.0, 0.0]}]}), "Invalid vehicles."),
    case04_empty_vehicles: (json!({"jobs": [{"id": 1, "location": [0.0, 0.0]}], "vehicles": []}),
        "Invalid vehicles."),
    case05_first_vehicle_without_id: (json!({"jobs": [{"id": 1, "location": [0.0, 0.0]}], "vehicles": [{}]}),
        "Invalid or missing id for vehicle."),
}

#[test]
fn can_enforce_amount_dimensionality_from_first_vehicle() {
    let input = json!({
        "jobs": [{"id": 1, "location": [2.1, 48.8], "delivery": [1]}],
        "vehicles": [{"id": 1, "start": [2.0, 48.0], "capacity": [1, 2]}]
    })
    .to_string();

    assert_eq!(
        parse_problem(&input, &create_default_config()).err(),
        Some(Error::Input("Inconsistent delivery length: 1 and 2.".to_string()))
    );
}

parameterized_test! {can_reject_malformed_matrix, (matrix, expected), {
    let document = json!({
        "jobs": [{"id": 1, "location_index": 0}],
        "vehicles": [{"id": 1, "start_index": 0}],
        "matrix": matrix
    });

    assert_eq!(
        parse_problem(&document.to_string(), &create_default_config()).err(),
        Some(Error::Input(expected.to_string()))
    );
}}

can_reject_malformed_matrix! {
    case01_not_array: (json!(1), "Invalid matrix."),
    case02_not_square: (json!([[0, 5], [5]]), "Invalid matrix line 1."),
    case03_invalid_entry: (json!([[0, -5], [5, 0]]), "Invalid matrix entry (0,1)."),
}

#[test]
fn can_require_server_for_remote_router() {
    let input = json!({
        "jobs": [{"id": 1, "location": [2.1, 48.8]}],
        "vehicles": [{"id": 1, "start": [2.0, 48.0]}]
    })
    .to_string();

    assert_eq!(
        parse_problem(&input, &Config::default()).err(),
        Some(Error::Input("Invalid profile: car.".to_string()))
    );
}

#[test]
fn can_require_server_even_with_custom_matrix() {
    // the routing capability is constructed in both modes, it still serves display geometry
    let input = json!({
        "jobs": [{"id": 1, "location_index": 0}],
        "vehicles": [{"id": 1, "start_index": 0}],
        "matrix": [[0, 5], [5, 0]]
    })
    .to_string();

    assert_eq!(
        parse_problem(&input, &Config::default()).err(),
        Some(Error::Input("Invalid profile: car.".to_string()))
    );
}

#[test]
fn can_construct_great_circle_router() {
    let input = json!({
        "jobs": [{"id": 1, "location": [2.1, 48.8]}],
        "vehicles": [{"id": 1, "start": [2.0, 48.0]}]
    })
    .to_string();

    let problem = parse_problem(&input, &create_great_circle_config()).expect("cannot parse problem");

    assert!(matches!(problem.router(), Some(Router::GreatCircle(_))));
    assert_eq!(problem.router().map(|router| router.profile()), Some("car"));
}

#[test]
fn can_reject_unknown_profile_for_great_circle() {
    let input = json!({
        "jobs": [{"id": 1, "location": [2.1, 48.8]}],
        "vehicles": [{"id": 1, "start": [2.0, 48.0], "profile": "hovercraft"}]
    })
    .to_string();

    assert_eq!(
        parse_problem(&input, &create_great_circle_config()).err(),
        Some(Error::Routing("Invalid profile: hovercraft.".to_string()))
    );
}

#[test]
fn can_propagate_geometry_flag() {
    let input = json!({
        "jobs": [{"id": 1, "location": [2.1, 48.8]}],
        "vehicles": [{"id": 1, "start": [2.0, 48.0]}]
    })
    .to_string();
    let config = Config { geometry: true, ..create_default_config() };

    let problem = parse_problem(&input, &config).expect("cannot parse problem");

    assert!(problem.geometry());
}

#[test]
fn can_report_syntax_error_with_offset() {
    let error = parse_problem("{\"jobs\": nope}", &create_default_config()).err().expect("must fail");

    match error {
        Error::Input(message) => assert!(message.contains("(offset: "), "unexpected message: {message}"),
        error => panic!("unexpected error kind: {error}"),
    }
}

#[test]
fn can_compute_byte_offset_from_line_and_column() {
    let input = "{\n  \"jobs\": nope\n}";

    assert_eq!(get_byte_offset(input, 1, 1), 0);
    assert_eq!(get_byte_offset(input, 2, 11), 12);
}
