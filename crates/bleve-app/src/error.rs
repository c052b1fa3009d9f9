//! Error types for the bleve-app service layer.

use std::path::PathBuf;

use bleve_blast::BlastError;
use bleve_thermo::ThermoError;

/// Application error type that wraps errors from the engine crates and
/// provides a unified error interface for front ends.
///
/// Every variant is terminal for the calculation that raised it.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Physically inconsistent state: {0}")]
    PhysicalInconsistency(String),

    #[error("{0}")]
    PropertyRange(String),

    #[error("{0}")]
    PropertyRetrieval(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for bleve-app operations.
pub type AppResult<T> = Result<T, AppError>;

/// Coarse error category, for callers that branch without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input; correct it and resubmit.
    Validation,
    /// Inputs imply a state the model cannot reach.
    PhysicalInconsistency,
    /// Pressure outside the property table.
    PropertyRange,
    /// Property service unavailable or answered garbage.
    PropertyRetrieval,
    Config,
    Io,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::PhysicalInconsistency(_) => ErrorKind::PhysicalInconsistency,
            AppError::PropertyRange(_) => ErrorKind::PropertyRange,
            AppError::PropertyRetrieval(_) => ErrorKind::PropertyRetrieval,
            AppError::Config(_) | AppError::Yaml(_) | AppError::Json(_) => ErrorKind::Config,
            AppError::FileRead { .. } | AppError::Io(_) => ErrorKind::Io,
        }
    }
}

// Conversions from backend error types
impl From<ThermoError> for AppError {
    fn from(err: ThermoError) -> Self {
        match err {
            ThermoError::OutOfRange { .. } => AppError::PropertyRange(err.to_string()),
            ThermoError::Retrieval { .. } => AppError::PropertyRetrieval(err.to_string()),
            ThermoError::NonPhysical { .. } => AppError::Validation(err.to_string()),
        }
    }
}

impl From<BlastError> for AppError {
    fn from(err: BlastError) -> Self {
        match err {
            BlastError::NoThresholds => AppError::Validation(
                "At least one positive overpressure threshold (mbar) is required".to_string(),
            ),
            BlastError::InvalidEnergy { .. } => AppError::Validation(err.to_string()),
            BlastError::InvalidTable { .. } => AppError::Config(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thermo_errors_keep_their_category() {
        let range: AppError = ThermoError::OutOfRange {
            pressure_pa: 301e5,
            min_pa: 101_325.0,
            max_pa: 40e5,
        }
        .into();
        assert_eq!(range.kind(), ErrorKind::PropertyRange);
        assert!(range.to_string().contains("outside the supported range"));

        let retrieval: AppError = ThermoError::Retrieval {
            message: "503".into(),
        }
        .into();
        assert_eq!(retrieval.kind(), ErrorKind::PropertyRetrieval);
        assert!(retrieval.to_string().contains("unable to retrieve"));
    }

    #[test]
    fn missing_thresholds_is_validation() {
        let err: AppError = BlastError::NoThresholds.into();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("threshold"));
    }
}
