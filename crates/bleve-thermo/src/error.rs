//! Property lookup errors.

use bleve_core::CoreError;
use thiserror::Error;

/// Result type for property lookups.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors that can occur while resolving a saturation state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// Pressure lies outside the calibration table. No extrapolation is done.
    #[error(
        "Pressure {:.3} bar is outside the supported range of the steam table ({:.3} to {:.3} bar)",
        .pressure_pa / 1e5,
        .min_pa / 1e5,
        .max_pa / 1e5
    )]
    OutOfRange {
        pressure_pa: f64,
        min_pa: f64,
        max_pa: f64,
    },

    /// Remote service failed, was unreachable, or sent a malformed payload.
    #[error("Thermo API error ({message}): unable to retrieve properties")]
    Retrieval { message: String },

    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },
}

impl ThermoError {
    pub(crate) fn retrieval(message: impl Into<String>) -> Self {
        Self::Retrieval {
            message: message.into(),
        }
    }
}

impl From<CoreError> for ThermoError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, .. } => ThermoError::NonPhysical { what },
        }
    }
}
