use crate::CommuteCostError;
use geo::Point;
use serde::{Deserialize, Serialize};

/// a WGS84 position in decimal degrees
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    pub fn try_new(lat: f64, lon: f64) -> Result<Coordinate, CommuteCostError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CommuteCostError::invalid_argument(format!(
                "latitude must be within [-90, 90], found {lat}"
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(CommuteCostError::invalid_argument(format!(
                "longitude must be within [-180, 180], found {lon}"
            )));
        }
        Ok(Coordinate { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// (latitude, longitude)
impl TryFrom<(f64, f64)> for Coordinate {
    type Error = CommuteCostError;

    fn try_from((lat, lon): (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::try_new(lat, lon)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.lat, value.lon)
    }
}

/// geo points are (x, y), so longitude comes first
impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Point::new(value.lon, value.lat)
    }
}
