use super::{report, CommuteAppError};
use crate::{config::CommuteConfig, io};
use clap::Subcommand;
use commute_cost_core::model::{ModeField, ModeTable};
use commute_cost_core::ops::{self, DistanceCalculationPolicy};
use commute_cost_core::CommuteCostError;
use itertools::Itertools;
use std::path::Path;

#[derive(Debug, Clone, Subcommand)]
pub enum CommuteOperation {
    /// list transport modes with their cost and time attributes
    Modes {
        /// only list modes of this city
        #[arg(long)]
        city: Option<String>,
        /// column to order by, most expensive or slowest first
        #[arg(long, default_value_t = ModeField::CostPerTrip)]
        sort_by: ModeField,
    },
    /// list the cities present in the dataset
    Cities,
    /// project monthly costs for a daily return commute
    Simulate {
        #[arg(long)]
        city: Option<String>,
        /// one-way trip distance, defaults to the configured value
        #[arg(long)]
        distance_km: Option<f64>,
        /// commuting days per month, defaults to the configured value
        #[arg(long)]
        days: Option<u32>,
        /// write the simulated table as CSV to this file
        #[arg(long)]
        output: Option<String>,
        /// write the simulated table to the configured export file
        #[arg(long, conflicts_with = "output")]
        export: bool,
    },
    /// estimate a ride-hailing fare between two hubs
    Fare {
        #[arg(long)]
        origin: String,
        #[arg(long)]
        destination: String,
        #[arg(long, default_value_t = String::from("Uber Go"))]
        car_type: String,
        /// overrides the configured distance policy
        #[arg(long)]
        distance_policy: Option<DistanceCalculationPolicy>,
    },
    /// list known hubs and fare tiers
    Hubs,
    /// print the effective configuration
    Config {
        /// print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
}

impl CommuteOperation {
    pub fn run(
        &self,
        conf: &CommuteConfig,
        table: &ModeTable,
    ) -> Result<String, CommuteAppError> {
        match self {
            CommuteOperation::Modes { city, sort_by } => {
                let selected = select_city(table, city.as_deref())?;
                let rows = selected.sorted_by(*sort_by, true);
                Ok(report::mode_listing(&rows, *sort_by))
            }
            CommuteOperation::Cities => {
                let cities = table.cities();
                if cities.is_empty() {
                    Ok(String::from("dataset has no cities"))
                } else {
                    Ok(cities.join("\n"))
                }
            }
            CommuteOperation::Simulate {
                city,
                distance_km,
                days,
                output,
                export,
            } => {
                let selected = select_city(table, city.as_deref())?;
                let distance_km = distance_km.unwrap_or(conf.trip_distance_km);
                let days = days.unwrap_or(conf.days_per_month);
                let rows = ops::simulate_table(&selected, distance_km, days)?;
                let output_file = match (output, export) {
                    (Some(f), _) => Some(f.as_str()),
                    (None, true) => Some(conf.export_file.as_str()),
                    (None, false) => None,
                };
                if let Some(f) = output_file {
                    io::write_simulation_to_path(Path::new(f), &rows)?;
                }
                Ok(report::simulation_listing(&rows, distance_km, days))
            }
            CommuteOperation::Fare {
                origin,
                destination,
                car_type,
                distance_policy,
            } => {
                let origin = ops::find_hub(&conf.hubs, origin)?;
                let destination = ops::find_hub(&conf.hubs, destination)?;
                let policy = distance_policy.unwrap_or(conf.distance_policy);
                let quote =
                    ops::quote_trip(origin, destination, car_type, &conf.fare_tiers, policy)?;
                Ok(report::fare_quote_summary(&quote))
            }
            CommuteOperation::Hubs => Ok(report::hub_listing(&conf.hubs, &conf.fare_tiers)),
            CommuteOperation::Config { json } => {
                if *json {
                    conf.to_json_string()
                } else {
                    conf.to_toml_string()
                }
            }
        }
    }
}

/// the rows of one city, or the whole table when no city is requested
fn select_city(table: &ModeTable, city: Option<&str>) -> Result<ModeTable, CommuteAppError> {
    match city {
        None => Ok(table.clone()),
        Some(c) => {
            let selected = table.filter_city(c);
            if selected.is_empty() {
                let known = table.cities().iter().join(", ");
                Err(CommuteCostError::invalid_argument(format!(
                    "unknown city '{c}', expected one of: [{known}]"
                ))
                .into())
            } else {
                Ok(selected)
            }
        }
    }
}
