use super::distance_calculation_policy::{distance_km, DistanceCalculationPolicy};
use crate::model::{validation, FareTable, Hub};
use crate::CommuteCostError;
use itertools::Itertools;
use serde::Serialize;

/// a priced trip between two hubs
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FareQuote {
    pub origin: String,
    pub destination: String,
    pub car_type: String,
    pub distance_km: f64,
    pub fare: f64,
}

/// rounds a monetary amount to two decimal places. exact half cents round to
/// the even cent.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// estimates a ride-hailing fare as `base + per_km * distance_km`, rounded to
/// two decimal places, using the rates of `car_type` in the fare table.
pub fn estimate_fare(
    car_type: &str,
    distance_km: f64,
    fare_table: &FareTable,
) -> Result<f64, CommuteCostError> {
    let tier = fare_table.get(car_type)?;
    let distance_km = validation::non_negative("distance (km)", distance_km)?;
    validation::non_negative("estimated fare", round_to_cents(tier.fare(distance_km)))
}

pub fn find_hub<'a>(hubs: &'a [Hub], name: &str) -> Result<&'a Hub, CommuteCostError> {
    hubs.iter().find(|h| h.name == name).ok_or_else(|| {
        let known = hubs.iter().map(|h| h.name.as_str()).join(", ");
        CommuteCostError::invalid_argument(format!(
            "unknown hub '{name}', expected one of: [{known}]"
        ))
    })
}

/// prices a trip between two different hubs. the distance is rounded to two
/// decimals before the fare is computed.
pub fn quote_trip(
    origin: &Hub,
    destination: &Hub,
    car_type: &str,
    fare_table: &FareTable,
    policy: DistanceCalculationPolicy,
) -> Result<FareQuote, CommuteCostError> {
    if origin.name == destination.name {
        return Err(CommuteCostError::invalid_argument(format!(
            "origin and destination are both '{}', select different hubs",
            origin.name
        )));
    }
    let distance = round_to_cents(distance_km(
        &origin.coordinate,
        &destination.coordinate,
        policy,
    ));
    let fare = estimate_fare(car_type, distance, fare_table)?;
    Ok(FareQuote {
        origin: origin.name.clone(),
        destination: destination.name.clone(),
        car_type: car_type.to_string(),
        distance_km: distance,
        fare,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_data, FareTier};

    fn uber_go_only() -> FareTable {
        FareTable::try_new([(String::from("Uber Go"), FareTier::new(10.0, 6.0).unwrap())])
            .unwrap()
    }

    #[test]
    fn test_ten_km_uber_go() {
        assert_eq!(estimate_fare("Uber Go", 10.0, &uber_go_only()), Ok(70.0));
    }

    #[test]
    fn test_zero_distance_is_base_fare() {
        let table = FareTable::default();
        for car_type in table.car_types() {
            let base = table.get(car_type).unwrap().base;
            assert_eq!(estimate_fare(car_type, 0.0, &table), Ok(base));
        }
    }

    #[test]
    fn test_rounds_to_cents() {
        let table = FareTable::default();
        assert_eq!(estimate_fare("UberX", 4.666, &table), Ok(56.99));
    }

    #[test]
    fn test_half_cent_ties_round_to_even() {
        // 10 + 6 * 0.1875 is exactly 11.125
        assert_eq!(estimate_fare("Uber Go", 0.1875, &uber_go_only()), Ok(11.12));
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.375), 0.38);
    }

    #[test]
    fn test_overflowing_fare_rejected() {
        let result = estimate_fare("Uber Go", 1e308, &FareTable::default());
        assert!(matches!(result, Err(CommuteCostError::InvalidArgument(_))));
    }

    #[test]
    fn test_unknown_car_type() {
        let result = estimate_fare("UberX", 10.0, &uber_go_only());
        assert!(matches!(
            result,
            Err(CommuteCostError::UnknownCarType { .. })
        ));
    }

    #[test]
    fn test_negative_distance() {
        let result = estimate_fare("Uber Go", -1.0, &uber_go_only());
        assert!(matches!(result, Err(CommuteCostError::InvalidArgument(_))));
    }

    #[test]
    fn test_quote_trip() {
        let hubs = sample_data::hub_locations();
        let origin = find_hub(&hubs, "Pretoria Station").unwrap();
        let destination = find_hub(&hubs, "Hatfield Gautrain").unwrap();
        let quote = quote_trip(
            origin,
            destination,
            "Uber Go",
            &FareTable::default(),
            DistanceCalculationPolicy::Haversine,
        )
        .unwrap();
        assert!((quote.distance_km - 4.7).abs() <= 0.2);
        assert_eq!(quote.fare, round_to_cents(10.0 + 6.0 * quote.distance_km));
    }

    #[test]
    fn test_quote_same_hub_rejected() {
        let hubs = sample_data::hub_locations();
        let hub = find_hub(&hubs, "Sandton Gautrain").unwrap();
        let result = quote_trip(
            hub,
            hub,
            "UberX",
            &FareTable::default(),
            DistanceCalculationPolicy::Haversine,
        );
        assert!(matches!(result, Err(CommuteCostError::InvalidArgument(_))));
    }

    #[test]
    fn test_find_unknown_hub() {
        let hubs = sample_data::hub_locations();
        assert!(find_hub(&hubs, "Durban Station").is_err());
    }
}
