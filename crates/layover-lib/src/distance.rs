//! Great-circle distance between airports.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Earth is treated as a perfect sphere with this radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6374.0;

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Weight function used for connections between airports.
pub trait DistanceMetric: Debug + Send + Sync {
    /// Distance between two positions. Must be non-negative and symmetric.
    fn distance(&self, from: &Coordinates, to: &Coordinates) -> f64;

    /// Distance between two optional positions.
    ///
    /// Presence is checked before any computation: a missing `from` is
    /// reported first, then a missing `to`.
    fn try_distance(&self, from: Option<&Coordinates>, to: Option<&Coordinates>) -> Result<f64> {
        let from = from.ok_or(Error::InvalidArgument { argument: "from" })?;
        let to = to.ok_or(Error::InvalidArgument { argument: "to" })?;
        Ok(self.distance(from, to))
    }
}

/// Haversine distance on a sphere of radius [`EARTH_RADIUS_KM`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance(&self, from: &Coordinates, to: &Coordinates) -> f64 {
        let lat1 = from.latitude.to_radians();
        let lat2 = to.latitude.to_radians();
        let long1 = from.longitude.to_radians();
        let long2 = to.longitude.to_radians();

        let half_lat = ((lat1 - lat2) / 2.0).sin();
        let half_long = ((long1 - long2) / 2.0).sin();

        let a = half_lat * half_lat + lat1.cos() * lat2.cos() * half_long * half_long;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        // Rounding near identical or antipodal points can leave a tiny negative.
        (EARTH_RADIUS_KM * c).abs()
    }
}
