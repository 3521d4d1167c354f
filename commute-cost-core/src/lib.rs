pub mod model;
pub mod ops;

mod error;

pub use error::CommuteCostError;
