use super::validation;
use crate::CommuteCostError;
use serde::{Deserialize, Serialize};

/// rates of a ride-hailing service class
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(try_from = "FareTierRates")]
pub struct FareTier {
    pub base: f64,
    pub per_km: f64,
}

#[derive(Deserialize)]
struct FareTierRates {
    base: f64,
    per_km: f64,
}

impl FareTier {
    pub fn new(base: f64, per_km: f64) -> Result<FareTier, CommuteCostError> {
        Ok(FareTier {
            base: validation::non_negative("base fare", base)?,
            per_km: validation::non_negative("per km rate", per_km)?,
        })
    }

    /// unrounded fare for a distance in kilometers
    pub fn fare(&self, distance_km: f64) -> f64 {
        self.base + self.per_km * distance_km
    }
}

impl TryFrom<FareTierRates> for FareTier {
    type Error = CommuteCostError;

    fn try_from(value: FareTierRates) -> Result<Self, Self::Error> {
        FareTier::new(value.base, value.per_km)
    }
}
