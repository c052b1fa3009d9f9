//! Engine configuration: property provider selection and curve tuning.
//!
//! Precedence, lowest first: built-in defaults, optional YAML/JSON file,
//! environment variables, then whatever the front end applies on top.

use std::path::Path;
use std::time::Duration;

use bleve_blast::{BlastModel, CurveSettings, TnoTable};
use bleve_thermo::{ProviderKind, RemoteProvider, SaturationProvider, SteamTableProvider};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Selects the property provider ("table" or "api").
pub const ENV_PROVIDER: &str = "BLEVE_THERMO_PROVIDER";
/// Base URL of the remote thermo service.
pub const ENV_API_BASE_URL: &str = "BLEVE_THERMO_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThermoConfig {
    /// Raw provider setting; unrecognized values select the table.
    pub provider: String,
    pub api_base_url: String,
    /// Per-request timeout for the remote provider [s]
    pub timeout_s: f64,
}

impl Default for ThermoConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Table.label().to_string(),
            api_base_url: "http://localhost:8000".to_string(),
            timeout_s: RemoteProvider::DEFAULT_TIMEOUT.as_secs_f64(),
        }
    }
}

impl ThermoConfig {
    pub fn kind(&self) -> ProviderKind {
        ProviderKind::from_setting(&self.provider)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub thermo: ThermoConfig,
    pub curve: CurveSettings,
}

impl EngineConfig {
    /// Load from a file; `.json` is read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: EngineConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the environment, in production).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(provider) = lookup(ENV_PROVIDER) {
            self.thermo.provider = provider;
        }
        if let Some(url) = lookup(ENV_API_BASE_URL) {
            self.thermo.api_base_url = url;
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.thermo.kind() == ProviderKind::Api && self.thermo.api_base_url.trim().is_empty() {
            return Err(AppError::Config(
                "thermo.api_base_url is required when the api provider is selected".into(),
            ));
        }
        if !self.thermo.timeout_s.is_finite() || self.thermo.timeout_s <= 0.0 {
            return Err(AppError::Config(
                "thermo.timeout_s must be a positive number of seconds".into(),
            ));
        }
        let c = &self.curve;
        if c.samples == 0 {
            return Err(AppError::Config("curve.samples must be at least 1".into()));
        }
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(c.floor_mbar) || !positive(c.ceiling_mbar) || c.floor_mbar >= c.ceiling_mbar
        {
            return Err(AppError::Config(
                "curve.floor_mbar and curve.ceiling_mbar must be positive with floor < ceiling"
                    .into(),
            ));
        }
        if !positive(c.low_factor) || !positive(c.distance_cutoff_factor) {
            return Err(AppError::Config(
                "curve.low_factor and curve.distance_cutoff_factor must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the configured provider.
    pub fn build_provider(&self) -> Box<dyn SaturationProvider> {
        match self.thermo.kind() {
            ProviderKind::Api => {
                tracing::debug!(base_url = %self.thermo.api_base_url, "using remote thermo provider");
                Box::new(RemoteProvider::new(
                    &self.thermo.api_base_url,
                    Duration::from_secs_f64(self.thermo.timeout_s),
                ))
            }
            ProviderKind::Table => Box::new(SteamTableProvider::new()),
        }
    }

    pub fn blast_model(&self) -> BlastModel {
        BlastModel::new(TnoTable::index_10(), self.curve.clone())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_select_table() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.thermo.kind(), ProviderKind::Table);
        assert_eq!(config.build_provider().name(), "steam-table");
    }

    #[test]
    fn overrides_select_api() {
        let env: HashMap<&str, &str> = [
            (ENV_PROVIDER, "api"),
            (ENV_API_BASE_URL, "http://thermo.internal:9000/"),
        ]
        .into_iter()
        .collect();
        let mut config = EngineConfig::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.thermo.kind(), ProviderKind::Api);
        assert_eq!(config.build_provider().name(), "thermo-api");
    }

    #[test]
    fn unknown_provider_falls_back_to_table() {
        let mut config = EngineConfig::default();
        config.thermo.provider = "coolprop".into();
        assert_eq!(config.build_provider().name(), "steam-table");
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: EngineConfig = serde_yaml::from_str("curve:\n  samples: 50\n").unwrap();
        assert_eq!(config.curve.samples, 50);
        assert_eq!(config.curve.ceiling_mbar, 300.0);
        assert_eq!(config.thermo, ThermoConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_yaml::from_str::<EngineConfig>("thermo:\n  provder: api\n").is_err());
        assert!(serde_yaml::from_str::<EngineConfig>("curves:\n  samples: 10\n").is_err());
    }

    #[test]
    fn rejects_bad_curve_settings() {
        let mut config = EngineConfig::default();
        config.curve.floor_mbar = 400.0;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn rejects_api_without_url() {
        let mut config = EngineConfig::default();
        config.thermo.provider = "api".into();
        config.thermo.api_base_url = "  ".into();
        assert!(config.validate().is_err());
    }
}
