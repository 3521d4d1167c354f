use crate::CommuteCostError;

/// rejects NaN, infinite and negative values.
pub fn non_negative(name: &str, value: f64) -> Result<f64, CommuteCostError> {
    if !value.is_finite() {
        Err(CommuteCostError::invalid_argument(format!(
            "{name} must be finite, found {value}"
        )))
    } else if value < 0.0 {
        Err(CommuteCostError::invalid_argument(format!(
            "{name} must be non-negative, found {value}"
        )))
    } else {
        Ok(value)
    }
}

/// rejects NaN, infinite, zero and negative values.
pub fn positive(name: &str, value: f64) -> Result<f64, CommuteCostError> {
    let value = non_negative(name, value)?;
    if value == 0.0 {
        Err(CommuteCostError::invalid_argument(format!(
            "{name} must be greater than zero"
        )))
    } else {
        Ok(value)
    }
}
