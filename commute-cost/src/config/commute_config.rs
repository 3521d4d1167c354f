use crate::app::CommuteAppError;
use commute_cost_core::model::{sample_data, FareTable, Hub};
use commute_cost_core::ops::DistanceCalculationPolicy;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPORT_FILE: &str = "simulated_transport_costs.csv";

/// environment variables with this prefix override file values,
/// for example `COMMUTE_DAYS_PER_MONTH=20`.
pub const ENV_PREFIX: &str = "COMMUTE";

/// run parameters for the commute cost tools
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct CommuteConfig {
    /// one-way trip distance used by the commute simulation
    pub trip_distance_km: f64,
    pub days_per_month: u32,
    pub distance_policy: DistanceCalculationPolicy,
    pub fare_tiers: FareTable,
    pub hubs: Vec<Hub>,
    /// CSV of transport modes. the built-in two-city dataset is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,
    pub export_file: String,
}

impl Default for CommuteConfig {
    fn default() -> Self {
        Self {
            trip_distance_km: 15.0,
            days_per_month: 22,
            distance_policy: DistanceCalculationPolicy::default(),
            fare_tiers: FareTable::default(),
            hubs: sample_data::hub_locations(),
            data_file: None,
            export_file: String::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl CommuteConfig {
    /// reads a .toml or .json configuration file, with `COMMUTE_` environment
    /// variables layered on top.
    pub fn from_file(filepath: &str) -> Result<CommuteConfig, CommuteAppError> {
        let format = file_format(filepath)?;
        log::info!("reading commute configuration from {filepath}");
        let builder = Config::builder()
            .add_source(File::new(filepath, format))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        build(builder, filepath)
    }

    /// reads configuration from an in-memory document
    pub fn from_document(
        contents: &str,
        format: FileFormat,
    ) -> Result<CommuteConfig, CommuteAppError> {
        let builder = Config::builder().add_source(File::from_str(contents, format));
        build(builder, "<string>")
    }

    pub fn to_toml_string(&self) -> Result<String, CommuteAppError> {
        toml::to_string_pretty(self).map_err(|e| CommuteAppError::EncodingError(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String, CommuteAppError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CommuteAppError::EncodingError(e.to_string()))
    }
}

fn file_format(filepath: &str) -> Result<FileFormat, CommuteAppError> {
    if filepath.ends_with(".toml") {
        Ok(FileFormat::Toml)
    } else if filepath.ends_with(".json") {
        Ok(FileFormat::Json)
    } else {
        Err(CommuteAppError::ConfigurationError(format!(
            "unsupported file type: {filepath}"
        )))
    }
}

fn build(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    source_name: &str,
) -> Result<CommuteConfig, CommuteAppError> {
    let config = builder
        .build()
        .map_err(|e| CommuteAppError::ConfigReadError {
            msg: format!("failed reading '{source_name}'"),
            source: e,
        })?;
    config
        .try_deserialize::<CommuteConfig>()
        .map_err(|e| CommuteAppError::ConfigReadError {
            msg: format!("failed decoding '{source_name}'"),
            source: e,
        })
}
