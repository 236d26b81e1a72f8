use super::*;

#[test]
fn can_format_error_kinds() {
    assert_eq!(Error::Input("Invalid vehicles.".to_string()).to_string(), "input error: Invalid vehicles.");
    assert_eq!(
        Error::Routing("Invalid profile: car.".to_string()).to_string(),
        "routing error: Invalid profile: car."
    );
}

#[test]
fn can_expose_message_without_kind() {
    assert_eq!(Error::Input("Invalid jobs or shipments.".to_string()).message(), "Invalid jobs or shipments.");
    assert_eq!(Error::Routing("Invalid profile: car.".to_string()).message(), "Invalid profile: car.");
}
