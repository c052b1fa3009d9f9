//! Energy to effect-distance mapping.

use crate::curve::{CurveSettings, OverpressurePoint};
use crate::error::{BlastError, BlastResult};
use crate::tno::TnoTable;
use serde::{Deserialize, Serialize};

/// Effect distance for one requested threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    /// Overpressure threshold [mbar]
    pub threshold: f64,
    /// Distance at which the threshold is reached [m]
    pub distance: f64,
}

/// Cube-root scaling law over a coefficient table, plus curve sampling settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlastModel {
    table: TnoTable,
    curve: CurveSettings,
}

impl BlastModel {
    pub fn new(table: TnoTable, curve: CurveSettings) -> Self {
        Self { table, curve }
    }

    pub fn table(&self) -> &TnoTable {
        &self.table
    }

    pub fn curve_settings(&self) -> &CurveSettings {
        &self.curve
    }

    /// Reject energies the scaling law cannot use.
    pub fn validate_energy(energy_j: f64) -> BlastResult<f64> {
        if !energy_j.is_finite() || energy_j < 0.0 {
            return Err(BlastError::InvalidEnergy { value: energy_j });
        }
        Ok(energy_j)
    }

    /// Distance [m] at which `threshold_mbar` is reached: `D = C(p) · E^(1/3)`.
    ///
    /// A non-positive threshold has no finite radius and yields `+inf`.
    pub fn distance_for(&self, threshold_mbar: f64, energy_j: f64) -> f64 {
        if threshold_mbar <= 0.0 {
            return f64::INFINITY;
        }
        self.table.coefficient(threshold_mbar) * energy_j.cbrt()
    }

    /// One distance per threshold, in threshold order.
    pub fn distances(&self, thresholds: &[f64], energy_j: f64) -> Vec<DistanceResult> {
        thresholds
            .iter()
            .map(|&threshold| DistanceResult {
                threshold,
                distance: self.distance_for(threshold, energy_j),
            })
            .collect()
    }

    /// Overpressure [mbar] reached at `distance_m`, or `None` outside the
    /// calibrated coefficient span (including non-positive inputs).
    pub fn overpressure_at(&self, distance_m: f64, energy_j: f64) -> Option<f64> {
        if !(distance_m > 0.0 && energy_j > 0.0) || !energy_j.is_finite() {
            return None;
        }
        self.table.pressure_for_coefficient(distance_m / energy_j.cbrt())
    }

    /// Sampled curve, sorted by ascending distance.
    ///
    /// Samples with non-positive distance, or beyond the cutoff relative to the
    /// largest threshold distance, are dropped.
    pub fn curve(&self, thresholds: &[f64], energy_j: f64) -> Vec<OverpressurePoint> {
        let reference = thresholds
            .iter()
            .map(|&t| self.distance_for(t, energy_j))
            .filter(|d| d.is_finite())
            .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.max(d))))
            .unwrap_or(CurveSettings::FALLBACK_REFERENCE_DISTANCE_M);
        let cutoff = reference * self.curve.distance_cutoff_factor;

        let mut points: Vec<OverpressurePoint> = self
            .curve
            .sample_pressures(thresholds)
            .into_iter()
            .filter(|&p| p > 0.0)
            .filter_map(|p| {
                let distance = self.distance_for(p, energy_j);
                (distance > 0.0 && distance < cutoff).then_some(OverpressurePoint {
                    distance,
                    overpressure: p,
                })
            })
            .collect();

        points.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        tracing::debug!(
            samples = points.len(),
            cutoff_m = cutoff,
            "sampled overpressure curve"
        );
        points
    }
}
