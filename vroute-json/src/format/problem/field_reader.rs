#[cfg(test)]
#[path = "../../../tests/unit/format/problem/field_reader_test.rs"]
mod field_reader_test;

use serde_json::Value;
use vroute_core::models::common::*;
use vroute_core::utils::{Error, Result};

/// Reads an optional string field, defaulting to an empty string.
pub(super) fn get_string(obj: &Value, key: &str) -> Result<String> {
    match obj.get(key) {
        Some(value) => {
            value.as_str().map(str::to_string).ok_or_else(|| Error::Input(format!("Invalid {key} value.")))
        }
        None => Ok(String::new()),
    }
}

/// Reads an optional amount field which, when present, must match the instance dimensionality
/// exactly. Defaults to a zero amount of the expected size.
pub(super) fn get_amount(obj: &Value, key: &str, size: usize) -> Result<Amount> {
    let Some(value) = obj.get(key) else {
        return Ok(Amount::zero(size));
    };

    let values = value.as_array().ok_or_else(|| Error::Input(format!("Invalid {key} array.")))?;

    if values.len() != size {
        return Err(Error::Input(format!("Inconsistent {key} length: {} and {}.", values.len(), size)));
    }

    values
        .iter()
        .map(|value| value.as_u64().ok_or_else(|| Error::Input(format!("Invalid {key} value."))))
        .collect::<Result<Vec<_>>>()
        .map(Amount::from)
}

/// Reads an optional skills field into a set, defaulting to no skills.
pub(super) fn get_skills(obj: &Value) -> Result<Skills> {
    let Some(value) = obj.get("skills") else {
        return Ok(Skills::default());
    };

    let values = value.as_array().ok_or_else(|| Error::Input("Invalid skills object.".to_string()))?;

    values
        .iter()
        .map(|value| value.as_u64().ok_or_else(|| Error::Input("Invalid skill value.".to_string())))
        .collect()
}

/// Reads an optional service duration, defaulting to zero.
pub(super) fn get_service(obj: &Value) -> Result<Duration> {
    match obj.get("service") {
        Some(value) => value.as_u64().ok_or_else(|| Error::Input("Invalid service value.".to_string())),
        None => Ok(0),
    }
}

/// Reads an optional priority bounded by [`MAX_PRIORITY`], defaulting to zero.
pub(super) fn get_priority(obj: &Value) -> Result<Priority> {
    let Some(value) = obj.get("priority") else {
        return Ok(0);
    };

    value
        .as_u64()
        .filter(|&priority| priority <= MAX_PRIORITY as u64)
        .map(|priority| priority as Priority)
        .ok_or_else(|| Error::Input("Invalid priority value.".to_string()))
}

/// Checks that the value is an object carrying an unsigned 64 bit `id` and returns the id.
pub(super) fn check_id(v: &Value, kind: &str) -> Result<Id> {
    if !v.is_object() {
        return Err(Error::Input(format!("Invalid {kind}.")));
    }

    v.get("id").and_then(Value::as_u64).ok_or_else(|| Error::Input(format!("Invalid or missing id for {kind}.")))
}

/// Checks that the value is an object with both shipment sides and returns them.
pub(super) fn check_shipment(v: &Value) -> Result<(&Value, &Value)> {
    if !v.is_object() {
        return Err(Error::Input("Invalid shipment.".to_string()));
    }

    let pickup = v
        .get("pickup")
        .filter(|side| side.is_object())
        .ok_or_else(|| Error::Input("Missing pickup for shipment.".to_string()))?;
    let delivery = v
        .get("delivery")
        .filter(|side| side.is_object())
        .ok_or_else(|| Error::Input("Missing delivery for shipment.".to_string()))?;

    Ok((pickup, delivery))
}

/// Checks that a coordinate based location is present on the entity.
pub(super) fn check_location(v: &Value, kind: &str, id: Id) -> Result<()> {
    if v.get("location").is_some_and(Value::is_array) {
        Ok(())
    } else {
        Err(Error::Input(format!("Invalid location for {kind} {id}.")))
    }
}

/// Checks that a matrix index location is present on the entity and within matrix bounds,
/// returning the index.
pub(super) fn check_location_index(v: &Value, kind: &str, id: Id, matrix_size: usize) -> Result<usize> {
    let index = v
        .get("location_index")
        .and_then(Value::as_u64)
        .ok_or_else(|| Error::Input(format!("Invalid location_index for {kind} {id}.")))? as usize;

    if index >= matrix_size {
        return Err(Error::Input(format!("location_index exceeding matrix size for {kind} {id}.")));
    }

    Ok(index)
}

/// Reads a mandatory coordinate pair from the named field. Extra array entries are ignored.
pub(super) fn get_coordinates(obj: &Value, key: &str) -> Result<Coordinates> {
    let invalid = || Error::Input(format!("Invalid {key} array."));

    let values = obj.get(key).and_then(Value::as_array).ok_or_else(invalid)?;

    match values.as_slice() {
        [lng, lat, ..] => Ok(Coordinates::new(lng.as_f64().ok_or_else(invalid)?, lat.as_f64().ok_or_else(invalid)?)),
        _ => Err(invalid()),
    }
}

/// Reads a `[start, end]` time window. `start <= end` is deliberately not enforced.
pub(super) fn get_time_window(tw: &Value) -> Result<TimeWindow> {
    let invalid = || Error::Input("Invalid time-window.".to_string());

    let values = tw.as_array().ok_or_else(invalid)?;

    match values.as_slice() {
        [start, end, ..] => {
            Ok(TimeWindow::new(start.as_u64().ok_or_else(invalid)?, end.as_u64().ok_or_else(invalid)?))
        }
        _ => Err(invalid()),
    }
}
