use super::TransportMode;
use serde::Serialize;

/// a transport mode with its projected monthly cost for a given commute
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SimulatedMode {
    #[serde(flatten)]
    pub mode: TransportMode,
    #[serde(rename = "Simulated Monthly Cost (ZAR)")]
    pub simulated_monthly_cost: f64,
}
