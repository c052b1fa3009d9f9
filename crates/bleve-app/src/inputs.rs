//! Calculation inputs and their validation.

use std::path::Path;

use bleve_blast::parse_thresholds;
use bleve_core::units::bar;
use bleve_core::units::constants::p_atm;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Vessel and rupture description for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct CalculationInputs {
    /// Vessel volume [m³]
    pub volume: f64,
    /// Liquid share of the vessel volume, in (0, 1]
    pub liquid_fraction: f64,
    /// Rupture pressure above atmospheric [bar]
    pub pressure_rel: f64,
    /// Ground reflectivity / surface factor Asb [-]
    pub asb: f64,
    /// Comma-separated overpressure thresholds [mbar]
    pub thresholds: String,
}

impl Default for CalculationInputs {
    fn default() -> Self {
        Self {
            volume: 1.0,
            liquid_fraction: 0.7,
            pressure_rel: 30.0,
            asb: 2.0,
            thresholds: "50, 140, 200".to_string(),
        }
    }
}

/// Inputs that passed validation, with the threshold list already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInputs {
    pub volume_m3: f64,
    pub liquid_fraction: f64,
    pub pressure_rel_bar: f64,
    pub asb: f64,
    pub thresholds_mbar: Vec<f64>,
}

impl ValidatedInputs {
    /// Absolute rupture pressure [Pa].
    pub fn pressure_abs_pa(&self) -> f64 {
        (bar(self.pressure_rel_bar) + p_atm()).value
    }
}

impl CalculationInputs {
    /// Read inputs from a `.json` file, or YAML for any other extension.
    /// Missing fields take their defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Ok(serde_yaml::from_str(&content)?),
        }
    }

    /// Check every quantity for physical plausibility.
    ///
    /// Runs before any property lookup, so a bad input never costs a
    /// provider call.
    pub fn validate(&self) -> AppResult<ValidatedInputs> {
        if !self.volume.is_finite() || self.volume <= 0.0 {
            return Err(AppError::Validation(format!(
                "Vessel volume (m³) must be a positive number, got {}",
                self.volume
            )));
        }
        if !self.liquid_fraction.is_finite()
            || self.liquid_fraction <= 0.0
            || self.liquid_fraction > 1.0
        {
            return Err(AppError::Validation(format!(
                "Liquid volume fraction (-) must be greater than 0 and at most 1, got {}",
                self.liquid_fraction
            )));
        }
        if !self.pressure_rel.is_finite() || self.pressure_rel < 0.0 {
            return Err(AppError::Validation(format!(
                "Relative rupture pressure (bar) must be a non-negative number, got {}",
                self.pressure_rel
            )));
        }
        if !self.asb.is_finite() || self.asb <= 0.0 {
            return Err(AppError::Validation(format!(
                "Surface factor Asb (-) must be greater than 0, got {}",
                self.asb
            )));
        }
        let thresholds_mbar = parse_thresholds(&self.thresholds)?;

        Ok(ValidatedInputs {
            volume_m3: self.volume,
            liquid_fraction: self.liquid_fraction,
            pressure_rel_bar: self.pressure_rel,
            asb: self.asb,
            thresholds_mbar,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn defaults_are_valid() {
        let v = CalculationInputs::default().validate().unwrap();
        assert_eq!(v.thresholds_mbar, vec![50.0, 140.0, 200.0]);
        assert!((v.pressure_abs_pa() - 3_101_325.0).abs() < 1e-6);
    }

    #[test]
    fn each_quantity_is_named() {
        let cases = [
            (
                CalculationInputs {
                    volume: 0.0,
                    ..Default::default()
                },
                "volume",
            ),
            (
                CalculationInputs {
                    volume: f64::INFINITY,
                    ..Default::default()
                },
                "volume",
            ),
            (
                CalculationInputs {
                    liquid_fraction: 1.2,
                    ..Default::default()
                },
                "fraction",
            ),
            (
                CalculationInputs {
                    liquid_fraction: 0.0,
                    ..Default::default()
                },
                "fraction",
            ),
            (
                CalculationInputs {
                    pressure_rel: -0.1,
                    ..Default::default()
                },
                "pressure",
            ),
            (
                CalculationInputs {
                    asb: 0.0,
                    ..Default::default()
                },
                "Asb",
            ),
            (
                CalculationInputs {
                    thresholds: "foo, -1, 0".into(),
                    ..Default::default()
                },
                "threshold",
            ),
        ];
        for (inputs, needle) in cases {
            let err = inputs.validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
            assert!(err.to_string().contains(needle), "{err}");
        }
    }

    #[test]
    fn full_liquid_vessel_is_valid() {
        let inputs = CalculationInputs {
            liquid_fraction: 1.0,
            ..Default::default()
        };
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let err = CalculationInputs::load(Path::new("no/such/inputs.yaml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("inputs.yaml"));
    }

    #[test]
    fn misspelled_key_is_rejected() {
        let err = serde_yaml::from_str::<CalculationInputs>("liquidfraction: 0.2\n").unwrap_err();
        assert!(err.to_string().contains("liquidfraction"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo.yaml");
        std::fs::write(&path, "volume: 2.0\nliquidfraction: 0.2\n").unwrap();
        let err = CalculationInputs::load(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let inputs: CalculationInputs =
            serde_json::from_str(r#"{"volume": 5.0, "pressureRel": 12.5}"#).unwrap();
        assert_eq!(inputs.volume, 5.0);
        assert_eq!(inputs.pressure_rel, 12.5);
        assert_eq!(inputs.liquid_fraction, 0.7);
    }
}
