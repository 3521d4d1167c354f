use super::{ModeField, TransportMode};
use crate::CommuteCostError;
use itertools::Itertools;
use std::collections::HashSet;

/// an immutable collection of transport modes, unique by (city, name).
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ModeTable {
    modes: Vec<TransportMode>,
}

impl ModeTable {
    pub fn try_new(modes: Vec<TransportMode>) -> Result<ModeTable, CommuteCostError> {
        let mut seen: HashSet<(Option<&str>, &str)> = HashSet::new();
        for mode in modes.iter() {
            if !seen.insert((mode.city(), mode.name.as_str())) {
                let location = match mode.city() {
                    Some(city) => format!(" in city '{city}'"),
                    None => String::new(),
                };
                return Err(CommuteCostError::invalid_argument(format!(
                    "duplicate transport mode '{}'{location}",
                    mode.name
                )));
            }
        }
        Ok(ModeTable { modes })
    }

    pub fn modes(&self) -> &[TransportMode] {
        &self.modes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransportMode> {
        self.modes.iter()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// true when any row carries a city grouping key
    pub fn has_cities(&self) -> bool {
        self.modes.iter().any(|m| m.city.is_some())
    }

    /// distinct cities in order of first appearance
    pub fn cities(&self) -> Vec<&str> {
        self.modes.iter().filter_map(|m| m.city()).unique().collect()
    }

    pub fn filter_city(&self, city: &str) -> ModeTable {
        let modes = self
            .modes
            .iter()
            .filter(|m| m.city() == Some(city))
            .cloned()
            .collect();
        ModeTable { modes }
    }

    /// rows ordered by a numeric column. ties keep table order.
    pub fn sorted_by(&self, field: ModeField, descending: bool) -> Vec<&TransportMode> {
        let mut rows = self.modes.iter().collect_vec();
        rows.sort_by(|a, b| {
            let ord = field.value(a).total_cmp(&field.value(b));
            if descending {
                ord.reverse()
            } else {
                ord
            }
        });
        rows
    }

    pub fn get(&self, name: &str, city: Option<&str>) -> Option<&TransportMode> {
        self.modes
            .iter()
            .find(|m| m.name == name && m.city() == city)
    }
}

impl TryFrom<Vec<TransportMode>> for ModeTable {
    type Error = CommuteCostError;

    fn try_from(value: Vec<TransportMode>) -> Result<Self, Self::Error> {
        ModeTable::try_new(value)
    }
}

impl<'a> IntoIterator for &'a ModeTable {
    type Item = &'a TransportMode;
    type IntoIter = std::slice::Iter<'a, TransportMode>;

    fn into_iter(self) -> Self::IntoIter {
        self.modes.iter()
    }
}
