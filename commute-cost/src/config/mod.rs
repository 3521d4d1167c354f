mod commute_config;

pub use commute_config::{CommuteConfig, DEFAULT_EXPORT_FILE, ENV_PREFIX};
