#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CommuteCostError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unknown car type '{car_type}', expected one of: [{known}]")]
    UnknownCarType { car_type: String, known: String },
}

impl CommuteCostError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
