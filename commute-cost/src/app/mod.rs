mod commute_app;
mod commute_app_error;
mod commute_operation;
pub mod report;

pub use commute_app::CommuteApp;
pub use commute_app_error::CommuteAppError;
pub use commute_operation::CommuteOperation;
