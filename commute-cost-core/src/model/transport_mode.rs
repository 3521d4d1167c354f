use super::validation;
use crate::CommuteCostError;
use serde::{Deserialize, Serialize};

/// a single transport mode with its average cost and time attributes.
///
/// all numeric fields are finite and non-negative. the invariant is checked
/// by [`TransportMode::new`] and also when deserializing, since
/// deserialization goes through [`TransportModeRow`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "TransportModeRow")]
pub struct TransportMode {
    /// optional grouping key when more than one city is modeled
    #[serde(rename = "City", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "Mode")]
    pub name: String,
    #[serde(rename = "Avg Cost per Trip (ZAR)")]
    pub cost_per_trip: f64,
    /// stored rather than derived, since each mode has its own reference trip distance
    #[serde(rename = "Cost per km (ZAR/km)")]
    pub cost_per_km: f64,
    #[serde(rename = "Avg Monthly Cost (ZAR)")]
    pub monthly_cost: f64,
    #[serde(rename = "Avg Travel Time (min)")]
    pub travel_time_minutes: f64,
}

/// unvalidated row as it appears in a tabular source
#[derive(Deserialize, Clone, Debug)]
pub struct TransportModeRow {
    #[serde(rename = "City", default)]
    pub city: Option<String>,
    #[serde(rename = "Mode")]
    pub name: String,
    #[serde(rename = "Avg Cost per Trip (ZAR)")]
    pub cost_per_trip: f64,
    #[serde(rename = "Cost per km (ZAR/km)")]
    pub cost_per_km: f64,
    #[serde(rename = "Avg Monthly Cost (ZAR)")]
    pub monthly_cost: f64,
    #[serde(rename = "Avg Travel Time (min)")]
    pub travel_time_minutes: f64,
}

impl TransportMode {
    pub fn new(
        name: &str,
        cost_per_trip: f64,
        cost_per_km: f64,
        monthly_cost: f64,
        travel_time_minutes: f64,
    ) -> Result<TransportMode, CommuteCostError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CommuteCostError::invalid_argument(
                "transport mode name must not be empty",
            ));
        }
        let field = |column: &str| format!("'{name}' {column}");
        Ok(TransportMode {
            city: None,
            name: name.to_string(),
            cost_per_trip: validation::non_negative(&field("cost per trip"), cost_per_trip)?,
            cost_per_km: validation::non_negative(&field("cost per km"), cost_per_km)?,
            monthly_cost: validation::non_negative(&field("monthly cost"), monthly_cost)?,
            travel_time_minutes: validation::non_negative(
                &field("travel time"),
                travel_time_minutes,
            )?,
        })
    }

    /// assigns this mode to a city. blank city names are treated as no city.
    pub fn with_city(self, city: &str) -> TransportMode {
        let city = city.trim();
        TransportMode {
            city: (!city.is_empty()).then(|| city.to_string()),
            ..self
        }
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
}

impl TryFrom<TransportModeRow> for TransportMode {
    type Error = CommuteCostError;

    fn try_from(row: TransportModeRow) -> Result<Self, Self::Error> {
        let mode = TransportMode::new(
            &row.name,
            row.cost_per_trip,
            row.cost_per_km,
            row.monthly_cost,
            row.travel_time_minutes,
        )?;
        match row.city {
            Some(city) => Ok(mode.with_city(&city)),
            None => Ok(mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walking_is_a_valid_zero_cost_mode() {
        let walking = TransportMode::new("Walking", 0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(walking.cost_per_trip, 0.0);
        assert_eq!(walking.city(), None);
    }

    #[test]
    fn test_zero_cost_mode_may_take_time() {
        let walking = TransportMode::new("Walking", 0.0, 0.0, 0.0, 45.0).unwrap();
        assert_eq!(walking.travel_time_minutes, 45.0);
    }

    #[test]
    fn test_negative_cost_rejected() {
        let result = TransportMode::new("Minibus Taxi", -13.0, 0.8, 572.0, 63.0);
        match result {
            Err(CommuteCostError::InvalidArgument(msg)) => {
                assert!(msg.contains("Minibus Taxi"), "{msg}")
            }
            other => panic!("expected InvalidArgument, found {other:?}"),
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(TransportMode::new("  ", 1.0, 1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_blank_city_is_none() {
        let mode = TransportMode::new("Gautrain", 92.0, 2.5, 3254.0, 38.0)
            .unwrap()
            .with_city(" ");
        assert_eq!(mode.city(), None);
    }

    #[test]
    fn test_deserialize_validates_row() {
        let json = serde_json::json!({
            "City": "Pretoria",
            "Mode": "MetroBus",
            "Avg Cost per Trip (ZAR)": 9.0,
            "Cost per km (ZAR/km)": 0.9,
            "Avg Monthly Cost (ZAR)": 352.0,
            "Avg Travel Time (min)": 84.0
        });
        let mode: TransportMode = serde_json::from_value(json).unwrap();
        assert_eq!(mode.city(), Some("Pretoria"));
        assert_eq!(mode.name, "MetroBus");

        let bad = serde_json::json!({
            "Mode": "MetroBus",
            "Avg Cost per Trip (ZAR)": 9.0,
            "Cost per km (ZAR/km)": -0.9,
            "Avg Monthly Cost (ZAR)": 352.0,
            "Avg Travel Time (min)": 84.0
        });
        assert!(serde_json::from_value::<TransportMode>(bad).is_err());
    }
}
