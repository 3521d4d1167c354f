use crate::model::Coordinate;
use crate::CommuteCostError;
use geo::{Distance, Geodesic, Haversine, Point};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use uom::si::f64::Length;
use uom::si::length::{kilometer, meter};

/// how to measure the straight-line distance between two coordinates
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceCalculationPolicy {
    /// great-circle distance on a sphere of mean Earth radius
    #[default]
    Haversine,
    /// shortest path on the WGS84 ellipsoid
    Geodesic,
}

impl Display for DistanceCalculationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistanceCalculationPolicy::Haversine => write!(f, "haversine"),
            DistanceCalculationPolicy::Geodesic => write!(f, "geodesic"),
        }
    }
}

impl FromStr for DistanceCalculationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "haversine" => Ok(Self::Haversine),
            "geodesic" => Ok(Self::Geodesic),
            other => Err(format!(
                "unknown distance policy '{other}', expected 'haversine' or 'geodesic'"
            )),
        }
    }
}

pub fn compute_distance(
    src: &Coordinate,
    dst: &Coordinate,
    policy: DistanceCalculationPolicy,
) -> Length {
    let src_point: Point<f64> = (*src).into();
    let dst_point: Point<f64> = (*dst).into();
    let meters = match policy {
        DistanceCalculationPolicy::Haversine => Haversine.distance(src_point, dst_point),
        DistanceCalculationPolicy::Geodesic => Geodesic.distance(src_point, dst_point),
    };
    Length::new::<meter>(meters)
}

pub fn distance_km(src: &Coordinate, dst: &Coordinate, policy: DistanceCalculationPolicy) -> f64 {
    if src == dst {
        return 0.0;
    }
    compute_distance(src, dst, policy).get::<kilometer>()
}

/// haversine distance in kilometers between two (latitude, longitude) pairs
/// in decimal degrees. fails if either pair is outside the valid range.
pub fn great_circle_distance_km(
    coord_a: (f64, f64),
    coord_b: (f64, f64),
) -> Result<f64, CommuteCostError> {
    let a = Coordinate::try_from(coord_a)?;
    let b = Coordinate::try_from(coord_b)?;
    Ok(distance_km(&a, &b, DistanceCalculationPolicy::Haversine))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRETORIA_STATION: (f64, f64) = (-25.7461, 28.1881);
    const HATFIELD_GAUTRAIN: (f64, f64) = (-25.7479, 28.2346);
    const OR_TAMBO: (f64, f64) = (-26.1392, 28.2460);

    #[test]
    fn test_pretoria_station_to_hatfield() {
        let d = great_circle_distance_km(PRETORIA_STATION, HATFIELD_GAUTRAIN).unwrap();
        assert!((d - 4.7).abs() <= 0.2, "distance was {d}");
    }

    #[test]
    fn test_same_point_is_zero() {
        for c in [PRETORIA_STATION, HATFIELD_GAUTRAIN, (0.0, 0.0), (90.0, 180.0)] {
            assert_eq!(great_circle_distance_km(c, c).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let ab = great_circle_distance_km(PRETORIA_STATION, OR_TAMBO).unwrap();
        let ba = great_circle_distance_km(OR_TAMBO, PRETORIA_STATION).unwrap();
        assert!((ab - ba).abs() < 1e-9);
        assert!(ab > 0.0);
    }

    #[test]
    fn test_out_of_range() {
        let result = great_circle_distance_km((91.0, 0.0), PRETORIA_STATION);
        assert!(matches!(result, Err(CommuteCostError::InvalidArgument(_))));
        let result = great_circle_distance_km(PRETORIA_STATION, (0.0, -181.0));
        assert!(matches!(result, Err(CommuteCostError::InvalidArgument(_))));
    }

    #[test]
    fn test_geodesic_close_to_haversine() {
        let a = Coordinate::try_from(PRETORIA_STATION).unwrap();
        let b = Coordinate::try_from(HATFIELD_GAUTRAIN).unwrap();
        let h = distance_km(&a, &b, DistanceCalculationPolicy::Haversine);
        let g = distance_km(&a, &b, DistanceCalculationPolicy::Geodesic);
        assert!((h - g).abs() < 0.05, "haversine {h} geodesic {g}");
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "Geodesic".parse::<DistanceCalculationPolicy>(),
            Ok(DistanceCalculationPolicy::Geodesic)
        );
        assert!("manhattan".parse::<DistanceCalculationPolicy>().is_err());
    }
}
