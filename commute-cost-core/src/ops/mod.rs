mod cost_ops;
mod distance_calculation_policy;
mod fare_ops;

pub use cost_ops::{simulate_monthly_cost, simulate_table};
pub use distance_calculation_policy::{
    compute_distance, distance_km, great_circle_distance_km, DistanceCalculationPolicy,
};
pub use fare_ops::{estimate_fare, find_hub, quote_trip, round_to_cents, FareQuote};
