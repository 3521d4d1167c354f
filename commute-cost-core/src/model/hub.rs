use super::Coordinate;
use serde::{Deserialize, Serialize};

/// a named transport hub, used as a trip origin or destination
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Hub {
    pub name: String,
    pub coordinate: Coordinate,
}

impl Hub {
    pub fn new(name: &str, coordinate: Coordinate) -> Hub {
        Hub {
            name: name.to_string(),
            coordinate,
        }
    }
}
