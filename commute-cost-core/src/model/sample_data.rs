//! built-in sample data for Gauteng (Pretoria and Johannesburg). costs are in
//! ZAR. per-km rates divide the trip cost by each mode's own reference trip
//! distance, and monthly costs assume 22 commuting days where not surveyed.
use super::{Coordinate, Hub, ModeTable, TransportMode};
use crate::CommuteCostError;

/// (name, cost per trip, cost per km, monthly cost, travel time in minutes)
type ModeRecord = (&'static str, f64, f64, f64, f64);

const GAUTENG_MODES: [ModeRecord; 8] = [
    ("Minibus Taxi", 13.0, 13.0 / 15.0, 572.0, 63.0),
    ("Uber Go", 312.0 / 15.0, 312.0 / 56.0, 312.0 * 22.0, 50.0),
    ("UberX", 420.0 / 15.0, 420.0 / 56.0, 420.0 * 22.0, 48.0),
    ("Gautrain", 92.0, 92.0 / 36.0, 3254.0, 38.0),
    ("Metrorail", 13.0, 13.0 / 15.0, 581.0, 107.0),
    ("MetroBus", 9.0, 9.0 / 10.0, 352.0, 84.0),
    ("Rea Vaya", 10.5, 10.5 / 12.0, 420.0, 75.0),
    ("Walking", 0.0, 0.0, 0.0, 0.0),
];

const CITY_MODES: [ModeRecord; 4] = [
    ("Minibus Taxi", 13.0, 13.0 / 15.0, 572.0, 63.0),
    ("Uber Go", 312.0 / 15.0, 312.0 / 56.0, 312.0 * 22.0, 50.0),
    ("Gautrain", 92.0, 92.0 / 36.0, 3254.0, 38.0),
    ("MetroBus", 9.0, 9.0 / 10.0, 352.0, 84.0),
];

pub const CITIES: [&str; 2] = ["Pretoria", "Johannesburg"];

const HUBS: [(&str, f64, f64); 5] = [
    ("Pretoria Station", -25.7461, 28.1881),
    ("Hatfield Gautrain", -25.7479, 28.2346),
    ("Joburg Park Station", -26.2010, 28.0436),
    ("Sandton Gautrain", -26.1076, 28.0567),
    ("OR Tambo Airport", -26.1392, 28.2460),
];

/// the eight Gauteng transport modes without a city grouping
pub fn gauteng_modes() -> ModeTable {
    or_log_empty("Gauteng modes", mode_table(&GAUTENG_MODES, &[]))
}

/// four transport modes for each of Pretoria and Johannesburg, the default
/// dataset when no other data is supplied
pub fn two_city_modes() -> ModeTable {
    or_log_empty("two-city modes", mode_table(&CITY_MODES, &CITIES))
}

pub fn hub_locations() -> Vec<Hub> {
    let hubs = HUBS
        .iter()
        .map(|(name, lat, lon)| Coordinate::try_new(*lat, *lon).map(|c| Hub::new(name, c)))
        .collect();
    or_log_empty("hub locations", hubs)
}

/// builds a table from records, repeated once per city when cities are given.
fn mode_table(records: &[ModeRecord], cities: &[&str]) -> Result<ModeTable, CommuteCostError> {
    let modes = if cities.is_empty() {
        records.iter().map(build_mode).collect::<Result<Vec<_>, _>>()?
    } else {
        cities
            .iter()
            .flat_map(|city| {
                records
                    .iter()
                    .map(move |record| build_mode(record).map(|m| m.with_city(city)))
            })
            .collect::<Result<Vec<_>, _>>()?
    };
    ModeTable::try_new(modes)
}

fn build_mode(record: &ModeRecord) -> Result<TransportMode, CommuteCostError> {
    let (name, cost_per_trip, cost_per_km, monthly_cost, travel_time) = *record;
    TransportMode::new(name, cost_per_trip, cost_per_km, monthly_cost, travel_time)
}

fn or_log_empty<T: Default>(dataset: &str, result: Result<T, CommuteCostError>) -> T {
    result.unwrap_or_else(|e| {
        log::error!("built-in {dataset} are invalid: {e}");
        T::default()
    })
}
