#[cfg(test)]
#[path = "../../../tests/unit/format/problem/job_reader_test.rs"]
mod job_reader_test;

use super::field_reader::*;
use serde_json::Value;
use vroute_core::models::Problem;
use vroute_core::models::common::*;
use vroute_core::models::problem::{Job, JobKind};
use vroute_core::utils::{Error, Result};

/// Builds every single job and registers it on the problem. `matrix_size` selects the location
/// addressing mode: index based with a custom matrix, coordinate based otherwise.
pub(super) fn read_jobs(
    jobs: &[Value],
    amount_size: usize,
    matrix_size: Option<usize>,
    problem: &mut Problem,
) -> Result<()> {
    for job in jobs {
        let id = check_id(job, "job")?;
        let location = get_job_location(job, "job", id, matrix_size)?;
        let (delivery, pickup) = get_job_demands(job, amount_size)?;

        problem.add_job(Job {
            id,
            kind: JobKind::Single,
            location,
            service: get_service(job)?,
            delivery,
            pickup,
            skills: get_skills(job)?,
            priority: get_priority(job)?,
            time_windows: get_job_time_windows(job, id)?,
            description: get_string(job, "description")?,
        });
    }

    Ok(())
}

/// Builds every shipment as a linked pickup and delivery pair. Amount, skills and priority are
/// read once at shipment level and shared by both sides; each side is validated independently for
/// id and location.
pub(super) fn read_shipments(
    shipments: &[Value],
    amount_size: usize,
    matrix_size: Option<usize>,
    problem: &mut Problem,
) -> Result<()> {
    for shipment in shipments {
        let (pickup, delivery) = check_shipment(shipment)?;

        let amount = get_amount(shipment, "amount", amount_size)?;
        let skills = get_skills(shipment)?;
        let priority = get_priority(shipment)?;

        let pickup = get_shipment_side(pickup, JobKind::Pickup, &amount, &skills, priority, matrix_size)?;
        let delivery = get_shipment_side(delivery, JobKind::Delivery, &amount, &skills, priority, matrix_size)?;

        problem.add_shipment(pickup, delivery);
    }

    Ok(())
}

fn get_shipment_side(
    v: &Value,
    kind: JobKind,
    amount: &Amount,
    skills: &Skills,
    priority: Priority,
    matrix_size: Option<usize>,
) -> Result<Job> {
    let label = if kind == JobKind::Pickup { "pickup" } else { "delivery" };

    let id = check_id(v, label)?;

    // the shared amount becomes the pickup vector on the pickup side and the delivery vector on
    // the delivery side, the opposite vector stays zero
    let (delivery, pickup) = if kind == JobKind::Pickup {
        (Amount::zero(amount.len()), amount.clone())
    } else {
        (amount.clone(), Amount::zero(amount.len()))
    };

    Ok(Job {
        id,
        kind,
        location: get_job_location(v, label, id, matrix_size)?,
        service: get_service(v)?,
        delivery,
        pickup,
        skills: skills.clone(),
        priority,
        time_windows: get_job_time_windows(v, id)?,
        description: get_string(v, "description")?,
    })
}

/// Resolves a job location for the active addressing mode. In matrix mode the index is
/// authoritative and optional coordinates are kept for display; in routing mode the coordinate
/// array is mandatory.
fn get_job_location(v: &Value, kind: &str, id: Id, matrix_size: Option<usize>) -> Result<Location> {
    match matrix_size {
        Some(matrix_size) => {
            let index = check_location_index(v, kind, id, matrix_size)?;

            Ok(if v.get("location").is_some() {
                Location::Mixed { index, coordinates: get_coordinates(v, "location")? }
            } else {
                Location::Reference(index)
            })
        }
        None => {
            check_location(v, kind, id)?;

            get_coordinates(v, "location").map(Location::Coordinate)
        }
    }
}

/// Applies the historical alias for job demands: a bare `amount` without explicit `delivery` or
/// `pickup` keys is read as the delivery vector.
fn get_job_demands(job: &Value, amount_size: usize) -> Result<(Amount, Amount)> {
    let amount_as_delivery =
        job.get("amount").is_some() && job.get("delivery").is_none() && job.get("pickup").is_none();

    let delivery = if amount_as_delivery {
        get_amount(job, "amount", amount_size)?
    } else {
        get_amount(job, "delivery", amount_size)?
    };

    Ok((delivery, get_amount(job, "pickup", amount_size)?))
}

/// Reads job time windows sorted ascending, defaulting to a single unlimited window.
fn get_job_time_windows(j: &Value, id: Id) -> Result<Vec<TimeWindow>> {
    let Some(value) = j.get("time_windows") else {
        return Ok(vec![TimeWindow::max()]);
    };

    let windows = value
        .as_array()
        .filter(|windows| !windows.is_empty())
        .ok_or_else(|| Error::Input(format!("Invalid time_windows array for job {id}.")))?;

    let mut windows = windows.iter().map(get_time_window).collect::<Result<Vec<_>>>()?;
    windows.sort();

    Ok(windows)
}
