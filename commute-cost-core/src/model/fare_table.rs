use super::FareTier;
use crate::CommuteCostError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// fare tiers by name, such as "Uber Go" or "UberX".
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(
    try_from = "BTreeMap<String, FareTier>",
    into = "BTreeMap<String, FareTier>"
)]
pub struct FareTable {
    tiers: BTreeMap<String, FareTier>,
}

impl FareTable {
    pub fn try_new<I>(tiers: I) -> Result<FareTable, CommuteCostError>
    where
        I: IntoIterator<Item = (String, FareTier)>,
    {
        let mut result = BTreeMap::new();
        for (name, tier) in tiers {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CommuteCostError::invalid_argument(
                    "fare tier name must not be empty",
                ));
            }
            if result.insert(name.clone(), tier).is_some() {
                return Err(CommuteCostError::invalid_argument(format!(
                    "duplicate fare tier '{name}'"
                )));
            }
        }
        Ok(FareTable { tiers: result })
    }

    pub fn get(&self, car_type: &str) -> Result<&FareTier, CommuteCostError> {
        self.tiers
            .get(car_type)
            .ok_or_else(|| CommuteCostError::UnknownCarType {
                car_type: car_type.to_string(),
                known: self.car_types().join(", "),
            })
    }

    pub fn car_types(&self) -> Vec<&str> {
        self.tiers.keys().map(|k| k.as_str()).collect_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FareTier)> {
        self.tiers.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl Default for FareTable {
    fn default() -> Self {
        FareTable {
            tiers: BTreeMap::from([
                (
                    String::from("Uber Go"),
                    FareTier {
                        base: 10.0,
                        per_km: 6.0,
                    },
                ),
                (
                    String::from("UberX"),
                    FareTier {
                        base: 15.0,
                        per_km: 9.0,
                    },
                ),
            ]),
        }
    }
}

impl TryFrom<BTreeMap<String, FareTier>> for FareTable {
    type Error = CommuteCostError;

    fn try_from(value: BTreeMap<String, FareTier>) -> Result<Self, Self::Error> {
        FareTable::try_new(value)
    }
}

impl From<FareTable> for BTreeMap<String, FareTier> {
    fn from(value: FareTable) -> Self {
        value.tiers
    }
}
