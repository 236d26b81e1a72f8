#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use super::field_reader::check_id;
use super::fleet_reader::read_fleet;
use super::job_reader::{read_jobs, read_shipments};
use crate::format::Config;
use log::debug;
use serde_json::Value;
use vroute_core::models::{Matrix, Problem};
use vroute_core::routing::{GreatCircleRouter, Router, RouterKind};
use vroute_core::utils::{Error, Result};

/// Reads a problem definition from json input and assembles the aggregate model, or fails with
/// the first validation error. No partial result is ever returned.
pub fn parse_problem(input: &str, config: &Config) -> Result<Problem> {
    let document: Value = serde_json::from_str(input).map_err(|err| get_syntax_error(input, &err))?;

    let jobs = get_non_empty_array(&document, "jobs");
    let shipments = get_non_empty_array(&document, "shipments");
    if jobs.is_none() && shipments.is_none() {
        return Err(Error::Input("Invalid jobs or shipments.".to_string()));
    }

    let vehicles =
        get_non_empty_array(&document, "vehicles").ok_or_else(|| Error::Input("Invalid vehicles.".to_string()))?;

    // The first vehicle's capacity length fixes the amount dimensionality for the whole document.
    check_id(&vehicles[0], "vehicle")?;
    let amount_size = vehicles[0].get("capacity").and_then(Value::as_array).map_or(0, Vec::len);

    let mut problem = Problem::new(amount_size);
    problem.set_geometry(config.geometry);

    let common_profile = read_fleet(vehicles, amount_size, &mut problem)?;

    // Either a custom matrix with index based locations, or coordinate based locations with
    // travel costs computed by the routing engine upon solving.
    let matrix_size = match document.get("matrix") {
        Some(matrix) => {
            let matrix = get_matrix(matrix)?;
            let size = matrix.size();
            debug!("using a custom cost matrix of size {size}");
            problem.set_matrix(matrix);
            Some(size)
        }
        None => None,
    };

    if let Some(jobs) = jobs {
        read_jobs(jobs, amount_size, matrix_size, &mut problem)?;
    }
    if let Some(shipments) = shipments {
        read_shipments(shipments, amount_size, matrix_size, &mut problem)?;
    }

    problem.set_router(create_router(config, &common_profile)?);

    debug!(
        "read problem with {} vehicles, {} jobs, {} shipments using profile '{}'",
        problem.vehicles().len(),
        problem.jobs().len(),
        problem.shipments().len(),
        common_profile
    );

    Ok(problem)
}

fn get_non_empty_array<'a>(document: &'a Value, key: &str) -> Option<&'a [Value]> {
    document.get(key).and_then(Value::as_array).filter(|values| !values.is_empty()).map(Vec::as_slice)
}

/// Loads a custom cost matrix while checking that it is square.
fn get_matrix(value: &Value) -> Result<Matrix> {
    let rows = value.as_array().ok_or_else(|| Error::Input("Invalid matrix.".to_string()))?;
    let size = rows.len();

    let mut matrix = Matrix::new(size);
    for (i, row) in rows.iter().enumerate() {
        let row = row
            .as_array()
            .filter(|row| row.len() == size)
            .ok_or_else(|| Error::Input(format!("Invalid matrix line {i}.")))?;

        for (j, cell) in row.iter().enumerate() {
            matrix[(i, j)] =
                cell.as_u64().ok_or_else(|| Error::Input(format!("Invalid matrix entry ({i},{j}).")))?;
        }
    }

    Ok(matrix)
}

/// Selects and constructs the routing capability for the configured engine and common profile.
fn create_router(config: &Config, profile: &str) -> Result<Router> {
    let get_server = || {
        config
            .servers
            .get(profile)
            .cloned()
            .ok_or_else(|| Error::Input(format!("Invalid profile: {profile}.")))
    };

    match config.router {
        RouterKind::Osrm => Ok(Router::Osrm { profile: profile.to_string(), server: get_server()? }),
        RouterKind::GreatCircle => GreatCircleRouter::new(profile).map(Router::GreatCircle),
        RouterKind::Ors => Ok(Router::Ors { profile: profile.to_string(), server: get_server()? }),
    }
}

fn get_syntax_error(input: &str, err: &serde_json::Error) -> Error {
    Error::Input(format!("{err} (offset: {})", get_byte_offset(input, err.line(), err.column())))
}

/// Maps serde_json's one based line and column pair onto a byte offset within the input.
fn get_byte_offset(input: &str, line: usize, column: usize) -> usize {
    input.split_inclusive('\n').take(line.saturating_sub(1)).map(str::len).sum::<usize>()
        + column.saturating_sub(1)
}
