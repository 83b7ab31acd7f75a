use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{COORDINATE_PRECISION, EARTH_RADIUS_METERS, MAX_LATITUDE, MAX_LONGITUDE};

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("{0} is too large for a fixed point coordinate")]
    TooLarge(f64),
    #[error("{0} is too small for a fixed point coordinate")]
    TooSmall(f64),
    #[error("coordinate is not a number")]
    NotANumber,
    #[error("coordinate is outside of the valid latitude/longitude range")]
    OutOfRange,
}

fn to_fixed(value: f64) -> Result<i32, CoordinateError> {
    if value.is_nan() {
        return Err(CoordinateError::NotANumber);
    }

    match (value * COORDINATE_PRECISION).round() {
        x if x > (i32::MAX as f64) => Err(CoordinateError::TooLarge(value)),
        x if x < (i32::MIN as f64) => Err(CoordinateError::TooSmall(value)),
        x => Ok(x as i32),
    }
}

/// Latitude and longitude scaled by [`COORDINATE_PRECISION`].
///
/// Comparisons and hashing happen on the integer representation, degrees are
/// only produced at the output boundary.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedPointCoordinate {
    pub lat: i32,
    pub lon: i32,
}

impl FixedPointCoordinate {
    pub const fn new(lat: i32, lon: i32) -> Self {
        FixedPointCoordinate { lat, lon }
    }

    pub fn from_degrees(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        Ok(FixedPointCoordinate {
            lat: to_fixed(lat)?,
            lon: to_fixed(lon)?,
        })
    }

    pub fn lat_degrees(&self) -> f64 {
        self.lat as f64 / COORDINATE_PRECISION
    }

    pub fn lon_degrees(&self) -> f64 {
        self.lon as f64 / COORDINATE_PRECISION
    }

    /// `[lat, lon]` in degrees, the order used on the wire.
    pub fn to_degrees(&self) -> [f64; 2] {
        [self.lat_degrees(), self.lon_degrees()]
    }

    pub fn is_valid(&self) -> bool {
        (-MAX_LATITUDE..=MAX_LATITUDE).contains(&self.lat)
            && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&self.lon)
    }

    pub fn haversine_distance(&self, other: &FixedPointCoordinate) -> f64 {
        let lat1 = self.lat_degrees().to_radians();
        let lat2 = other.lat_degrees().to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.lon_degrees() - self.lon_degrees()).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }

    /// Initial bearing in degrees `[0, 360)` when travelling towards `other`.
    pub fn bearing_to(&self, other: &FixedPointCoordinate) -> f64 {
        let lat1 = self.lat_degrees().to_radians();
        let lat2 = other.lat_degrees().to_radians();
        let dlon = (other.lon_degrees() - self.lon_degrees()).to_radians();

        let y = dlon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

        (y.atan2(x).to_degrees() + 360.0) % 360.0
    }
}

// rstar and geo work in x/y order
impl From<&FixedPointCoordinate> for [f64; 2] {
    fn from(value: &FixedPointCoordinate) -> Self {
        [value.lon_degrees(), value.lat_degrees()]
    }
}

impl From<&FixedPointCoordinate> for geo::Coord {
    fn from(value: &FixedPointCoordinate) -> Self {
        geo::Coord {
            x: value.lon_degrees(),
            y: value.lat_degrees(),
        }
    }
}

impl std::fmt::Debug for FixedPointCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat_degrees(), self.lon_degrees())
    }
}

impl std::fmt::Display for FixedPointCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat_degrees(), self.lon_degrees())
    }
}
