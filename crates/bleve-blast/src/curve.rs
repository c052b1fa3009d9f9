//! Overpressure-vs-distance curve sampling.
//!
//! The sampling range and the outlier cutoff are presentation parameters
//! tuned for readable charts, not part of the blast physics.

use serde::{Deserialize, Serialize};

/// One sample of the overpressure curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverpressurePoint {
    /// Distance from the vessel [m]
    pub distance: f64,
    /// Peak side-on overpressure [mbar]
    pub overpressure: f64,
}

/// Tunable sampling parameters for the curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurveSettings {
    /// Number of intervals; `samples + 1` pressures are evaluated.
    pub samples: usize,
    /// The sampled range always reaches down to at least this [mbar] (before `low_factor`).
    pub floor_mbar: f64,
    /// The sampled range always reaches up to at least this [mbar].
    pub ceiling_mbar: f64,
    /// Lower end of the range is `low_factor × min(thresholds, floor_mbar)`.
    pub low_factor: f64,
    /// Samples farther than this multiple of the largest threshold distance are dropped.
    pub distance_cutoff_factor: f64,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            samples: 100,
            floor_mbar: 10.0,
            ceiling_mbar: 300.0,
            low_factor: 0.5,
            distance_cutoff_factor: 2.4,
        }
    }
}

impl CurveSettings {
    /// Reference distance used when no threshold distances exist [m].
    pub const FALLBACK_REFERENCE_DISTANCE_M: f64 = 1000.0;

    /// Sampled pressure range `(low, high)` [mbar] for the given thresholds.
    pub fn pressure_range(&self, thresholds: &[f64]) -> (f64, f64) {
        let high = thresholds.iter().copied().fold(self.ceiling_mbar, f64::max);
        let low = thresholds.iter().copied().fold(self.floor_mbar, f64::min) * self.low_factor;
        (low, high)
    }

    /// Sampled pressures, from the high end of the range down to the low end.
    pub fn sample_pressures(&self, thresholds: &[f64]) -> Vec<f64> {
        let (low, high) = self.pressure_range(thresholds);
        let n = self.samples.max(1);
        (0..=n)
            .map(|i| high - (i as f64) * (high - low) / (n as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_covers_defaults() {
        let s = CurveSettings::default();
        assert_eq!(s.pressure_range(&[50.0, 140.0, 200.0]), (5.0, 300.0));
    }

    #[test]
    fn range_widens_for_extreme_thresholds() {
        let s = CurveSettings::default();
        assert_eq!(s.pressure_range(&[4.0, 500.0]), (2.0, 500.0));
    }

    #[test]
    fn samples_are_evenly_spaced_and_descending() {
        let s = CurveSettings::default();
        let p = s.sample_pressures(&[50.0]);
        assert_eq!(p.len(), 101);
        assert_eq!(p[0], 300.0);
        assert!((p[100] - 5.0).abs() < 1e-9);
        assert!(p.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn settings_deserialize_with_defaults() {
        let s: CurveSettings = serde_json::from_str(r#"{"samples": 20}"#).unwrap();
        assert_eq!(s.samples, 20);
        assert_eq!(s.distance_cutoff_factor, 2.4);
    }
}
