use super::TransportMode;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

pub const CITY_COLUMN: &str = "City";
pub const MODE_COLUMN: &str = "Mode";
pub const COST_PER_TRIP_COLUMN: &str = "Avg Cost per Trip (ZAR)";
pub const COST_PER_KM_COLUMN: &str = "Cost per km (ZAR/km)";
pub const MONTHLY_COST_COLUMN: &str = "Avg Monthly Cost (ZAR)";
pub const TRAVEL_TIME_COLUMN: &str = "Avg Travel Time (min)";
pub const SIMULATED_MONTHLY_COST_COLUMN: &str = "Simulated Monthly Cost (ZAR)";

/// the numeric columns of a [`TransportMode`] that a table can be ordered by.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModeField {
    #[default]
    CostPerTrip,
    CostPerKm,
    MonthlyCost,
    TravelTime,
}

impl ModeField {
    pub const ALL: [ModeField; 4] = [
        ModeField::CostPerTrip,
        ModeField::CostPerKm,
        ModeField::MonthlyCost,
        ModeField::TravelTime,
    ];

    /// header used for this field in tabular files
    pub fn column_name(&self) -> &'static str {
        match self {
            ModeField::CostPerTrip => COST_PER_TRIP_COLUMN,
            ModeField::CostPerKm => COST_PER_KM_COLUMN,
            ModeField::MonthlyCost => MONTHLY_COST_COLUMN,
            ModeField::TravelTime => TRAVEL_TIME_COLUMN,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            ModeField::CostPerTrip => "cost-per-trip",
            ModeField::CostPerKm => "cost-per-km",
            ModeField::MonthlyCost => "monthly-cost",
            ModeField::TravelTime => "travel-time",
        }
    }

    pub fn value(&self, mode: &TransportMode) -> f64 {
        match self {
            ModeField::CostPerTrip => mode.cost_per_trip,
            ModeField::CostPerKm => mode.cost_per_km,
            ModeField::MonthlyCost => mode.monthly_cost,
            ModeField::TravelTime => mode.travel_time_minutes,
        }
    }
}

impl Display for ModeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for ModeField {
    type Err = String;

    /// accepts either the short name or the tabular column header
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ModeField::ALL
            .into_iter()
            .find(|f| {
                f.short_name().eq_ignore_ascii_case(trimmed)
                    || f.column_name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| {
                let valid = ModeField::ALL
                    .iter()
                    .map(|f| f.short_name())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("unknown field '{s}', expected one of: {valid}")
            })
    }
}
