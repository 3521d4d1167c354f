mod coordinate;
mod fare_table;
mod fare_tier;
mod hub;
mod mode_field;
mod mode_table;
pub mod sample_data;
mod simulated_mode;
mod transport_mode;
pub(crate) mod validation;

pub use coordinate::Coordinate;
pub use fare_table::FareTable;
pub use fare_tier::FareTier;
pub use hub::Hub;
pub use mode_field::{
    ModeField, CITY_COLUMN, COST_PER_KM_COLUMN, COST_PER_TRIP_COLUMN, MODE_COLUMN,
    MONTHLY_COST_COLUMN, SIMULATED_MONTHLY_COST_COLUMN, TRAVEL_TIME_COLUMN,
};
pub use mode_table::ModeTable;
pub use simulated_mode::SimulatedMode;
pub use transport_mode::{TransportMode, TransportModeRow};
