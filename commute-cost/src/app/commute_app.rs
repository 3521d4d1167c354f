use super::{CommuteAppError, CommuteOperation};
use crate::{config::CommuteConfig, io};
use clap::Parser;

/// command line tool for comparing commute costs across transport modes
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CommuteApp {
    #[command(subcommand)]
    pub op: CommuteOperation,
    /// .toml or .json file with run configuration
    #[arg(long, global = true)]
    pub config_file: Option<String>,
    /// CSV of transport modes, overrides the configured data file
    #[arg(long, global = true)]
    pub data_file: Option<String>,
}

impl CommuteApp {
    /// loads the configuration and transport modes, then runs the operation.
    pub fn run(&self) -> Result<String, CommuteAppError> {
        let conf = match &self.config_file {
            None => CommuteConfig::default(),
            Some(f) => CommuteConfig::from_file(f)?,
        };
        let data_file = self.data_file.as_deref().or(conf.data_file.as_deref());
        let table = io::load_or_default(data_file);
        self.op.run(&conf, &table)
    }
}
