//! Saturation provider trait and backend selection.

use crate::error::ThermoResult;
use crate::props::SaturationProps;
use bleve_core::units::Pressure;
use serde::{Deserialize, Serialize};

/// Trait for saturation property backends.
///
/// Implementations must be thread-safe (Send + Sync) so independent
/// calculations can share one provider. A lookup either resolves the pressure
/// or fails; retries, if any, are the implementation's own business.
pub trait SaturationProvider: Send + Sync {
    /// Get the provider name (for debugging/logging).
    fn name(&self) -> &str;

    /// Resolve the saturated liquid/vapor state at an absolute pressure.
    fn saturation(&self, p: Pressure) -> ThermoResult<SaturationProps>;
}

impl<T: SaturationProvider + ?Sized> SaturationProvider for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn saturation(&self, p: Pressure) -> ThermoResult<SaturationProps> {
        (**self).saturation(p)
    }
}

/// Which backend answers property lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Built-in calibration table.
    #[default]
    Table,
    /// Remote thermo property service.
    Api,
}

impl ProviderKind {
    /// Resolve a configuration value. Anything unrecognized selects the table.
    pub fn from_setting(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "api" | "remote" => ProviderKind::Api,
            "table" | "mock" | "" => ProviderKind::Table,
            other => {
                tracing::warn!(provider = other, "unknown thermo provider, using table");
                ProviderKind::Table
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Api => "api",
        }
    }
}
