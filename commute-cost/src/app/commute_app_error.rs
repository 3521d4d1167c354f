use commute_cost_core::CommuteCostError;

#[derive(thiserror::Error, Debug)]
pub enum CommuteAppError {
    #[error("failed loading transport modes from '{filepath}': {msg}")]
    DataLoadError { filepath: String, msg: String },
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failure writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure writing output: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
    #[error(transparent)]
    ModelError {
        #[from]
        source: CommuteCostError,
    },
    #[error("failure encoding output: {0}")]
    EncodingError(String),
}
