#[cfg(test)]
#[path = "../../../tests/unit/format/problem/fleet_reader_test.rs"]
mod fleet_reader_test;

use super::field_reader::*;
use serde_json::Value;
use vroute_core::models::Problem;
use vroute_core::models::common::*;
use vroute_core::models::problem::{Break, ForcedService, StepKind, Vehicle, VehicleStep};
use vroute_core::utils::{Error, Result};

/// Builds every vehicle and registers it on the problem. Returns the common routing profile for
/// the instance: an explicit fold seeded empty and taking the first vehicle's profile. Later
/// vehicles are allowed to declare a different profile without being rejected.
pub(super) fn read_fleet(vehicles: &[Value], amount_size: usize, problem: &mut Problem) -> Result<String> {
    let mut common_profile = String::new();

    for vehicle in vehicles {
        let vehicle = get_vehicle(vehicle, amount_size)?;

        if common_profile.is_empty() {
            common_profile = vehicle.profile.clone();
        }

        problem.add_vehicle(vehicle);
    }

    Ok(common_profile)
}

fn get_vehicle(v: &Value, amount_size: usize) -> Result<Vehicle> {
    let id = check_id(v, "vehicle")?;

    let profile = get_string(v, "profile")?;
    let profile = if profile.is_empty() { DEFAULT_PROFILE.to_string() } else { profile };

    Ok(Vehicle {
        id,
        start: get_optional_location(v, "start", "start_index", id)?,
        end: get_optional_location(v, "end", "end_index", id)?,
        capacity: get_amount(v, "capacity", amount_size)?,
        skills: get_skills(v)?,
        time_window: get_vehicle_time_window(v)?,
        breaks: get_vehicle_breaks(v, id)?,
        description: get_string(v, "description")?,
        steps: get_vehicle_steps(v, id)?,
        profile,
    })
}

/// Resolves one of the vehicle's route ends from its index and coordinate fields: with neither
/// present the route end is open, with both present the index refers to a custom matrix while the
/// coordinates are kept for display.
fn get_optional_location(v: &Value, coord_key: &str, index_key: &str, id: Id) -> Result<Option<Location>> {
    let index = match v.get(index_key) {
        Some(value) => Some(
            value.as_u64().ok_or_else(|| Error::Input(format!("Invalid {index_key} for vehicle {id}.")))? as usize,
        ),
        None => None,
    };

    Ok(match (index, v.get(coord_key).is_some()) {
        (None, false) => None,
        (Some(index), false) => Some(Location::Reference(index)),
        (None, true) => Some(Location::Coordinate(get_coordinates(v, coord_key)?)),
        (Some(index), true) => Some(Location::Mixed { index, coordinates: get_coordinates(v, coord_key)? }),
    })
}

fn get_vehicle_time_window(v: &Value) -> Result<TimeWindow> {
    v.get("time_window").map_or_else(|| Ok(TimeWindow::max()), get_time_window)
}

fn get_break_time_windows(b: &Value, id: Id) -> Result<Vec<TimeWindow>> {
    let windows = b
        .get("time_windows")
        .and_then(Value::as_array)
        .filter(|windows| !windows.is_empty())
        .ok_or_else(|| Error::Input(format!("Invalid time_windows array for break {id}.")))?;

    let mut windows = windows.iter().map(get_time_window).collect::<Result<Vec<_>>>()?;
    windows.sort();

    Ok(windows)
}

fn get_break(b: &Value) -> Result<Break> {
    let id = check_id(b, "break")?;

    Ok(Break {
        id,
        time_windows: get_break_time_windows(b, id)?,
        service: get_service(b)?,
        description: get_string(b, "description")?,
    })
}

/// Reads vehicle breaks. The resulting list is sorted by first time window `(start, end)`
/// regardless of declaration order.
fn get_vehicle_breaks(v: &Value, id: Id) -> Result<Vec<Break>> {
    let mut breaks = match v.get("breaks") {
        Some(value) => value
            .as_array()
            .ok_or_else(|| Error::Input(format!("Invalid breaks for vehicle {id}.")))?
            .iter()
            .map(get_break)
            .collect::<Result<Vec<_>>>()?,
        None => vec![],
    };

    // breaks are guaranteed to carry at least one window
    breaks.sort_by_key(|brk| brk.time_windows[0]);

    Ok(breaks)
}

/// Reads expected route activities, keeping declaration order.
fn get_vehicle_steps(v: &Value, id: Id) -> Result<Vec<VehicleStep>> {
    let Some(value) = v.get("steps") else {
        return Ok(vec![]);
    };

    let steps = value.as_array().ok_or_else(|| Error::Input(format!("Invalid steps for vehicle {id}.")))?;

    steps
        .iter()
        .map(|step| {
            let forced_service = get_forced_service(step)?;

            let step_type = get_string(step, "type")?;
            let kind = match step_type.as_str() {
                "start" => StepKind::Start,
                "end" => StepKind::End,
                "job" | "pickup" | "delivery" | "break" => {
                    let step_id = step
                        .get("id")
                        .and_then(Value::as_u64)
                        .ok_or_else(|| Error::Input(format!("Invalid id in steps for vehicle {id}.")))?;

                    match step_type.as_str() {
                        "job" => StepKind::Job(step_id),
                        "pickup" => StepKind::Pickup(step_id),
                        "delivery" => StepKind::Delivery(step_id),
                        _ => StepKind::Break(step_id),
                    }
                }
                _ => return Err(Error::Input(format!("Invalid type in steps for vehicle {id}."))),
            };

            Ok(VehicleStep { kind, forced_service })
        })
        .collect()
}

fn get_forced_service(step: &Value) -> Result<ForcedService> {
    let get_bound = |key: &str| -> Result<Option<Duration>> {
        match step.get(key) {
            Some(value) => {
                value.as_u64().map(Some).ok_or_else(|| Error::Input(format!("Invalid {key} value.")))
            }
            None => Ok(None),
        }
    };

    Ok(ForcedService {
        at: get_bound("service_at")?,
        after: get_bound("service_after")?,
        before: get_bound("service_before")?,
    })
}
