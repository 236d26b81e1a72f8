#[cfg(test)]
#[path = "../../tests/unit/routing/great_circle_test.rs"]
mod great_circle_test;

use crate::models::Matrix;
use crate::models::common::{Coordinates, Cost};
use crate::utils::{Error, Result};

/// An embedded travel duration approximation based on great circle distances and a per profile
/// average speed. Unlike the remote capabilities it computes costs fully in process.
#[derive(Clone, Debug)]
pub struct GreatCircleRouter {
    profile: String,
    speed: f64,
}

impl GreatCircleRouter {
    /// Creates a router for a known profile, failing with a routing error otherwise.
    pub fn new(profile: &str) -> Result<Self> {
        let speed =
            profile_speed(profile).ok_or_else(|| Error::Routing(format!("Invalid profile: {profile}.")))?;

        Ok(Self { profile: profile.to_string(), speed })
    }

    /// Returns the profile the router was constructed for.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Computes a square duration matrix for the given locations, rounded to nearest integer.
    pub fn costs(&self, locations: &[Coordinates]) -> Matrix {
        let mut matrix = Matrix::new(locations.len());

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                matrix[(i, j)] = (get_distance(from, to) / self.speed).round() as Cost;
            }
        }

        matrix
    }
}

/// Gets an average speed in m/s for known vehicle profiles.
fn profile_speed(profile: &str) -> Option<f64> {
    match profile {
        "car" => Some(13.9),
        "truck" => Some(11.1),
        "bike" => Some(4.4),
        "foot" => Some(1.4),
        _ => None,
    }
}

/// Gets distance in meters between two points using the haversine formula.
fn get_distance(from: &Coordinates, to: &Coordinates) -> f64 {
    // mean earth radius [m]
    const EARTH_RADIUS: f64 = 6_371_000.;

    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.).sin() * (d_lat / 2.).sin()
        + (d_lng / 2.).sin() * (d_lng / 2.).sin() * lat1.cos() * lat2.cos();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS * c
}
