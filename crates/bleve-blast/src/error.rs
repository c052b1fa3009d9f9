//! Blast model errors.

use thiserror::Error;

/// Result type for blast model operations.
pub type BlastResult<T> = Result<T, BlastError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlastError {
    /// The threshold list held nothing usable after filtering.
    #[error("At least one positive overpressure threshold is required")]
    NoThresholds,

    /// Energy is negative or non-finite.
    #[error("Effective energy must be a non-negative finite number of joules (got {value})")]
    InvalidEnergy { value: f64 },

    /// Calibration table is unusable.
    #[error("Invalid TNO table: {what}")]
    InvalidTable { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert!(BlastError::NoThresholds.to_string().contains("threshold"));
        let err = BlastError::InvalidEnergy { value: -1.0 };
        assert!(err.to_string().contains("-1"));
    }
}
