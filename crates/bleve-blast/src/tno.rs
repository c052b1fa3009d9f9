//! TNO multi-energy scaling coefficients.

use bleve_core::lerp;

use crate::error::{BlastError, BlastResult};

/// Label for distances produced with the default coefficient table.
pub const METHOD_LABEL: &str = "TNO Multi-Energy (Index 10)";

/// One calibration point: overpressure [mbar] and its dimensionless coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TnoPoint {
    pub p_mbar: f64,
    pub c: f64,
}

/// Blast strength index 10 (detonation-like curve).
const INDEX_10: [TnoPoint; 4] = [
    TnoPoint { p_mbar: 50.0, c: 0.11 },
    TnoPoint { p_mbar: 140.0, c: 0.05 },
    TnoPoint { p_mbar: 200.0, c: 0.032 },
    TnoPoint { p_mbar: 300.0, c: 0.028 },
];

/// Coefficient table ordered by ascending overpressure.
///
/// Coefficients are non-increasing in pressure, which is what makes effect
/// distances shrink as the threshold grows.
#[derive(Debug, Clone, PartialEq)]
pub struct TnoTable {
    points: Vec<TnoPoint>,
}

impl Default for TnoTable {
    fn default() -> Self {
        Self::index_10()
    }
}

impl TnoTable {
    pub fn index_10() -> Self {
        Self {
            points: INDEX_10.to_vec(),
        }
    }

    /// Build a custom table, checking ordering and positivity.
    pub fn new(points: Vec<TnoPoint>) -> BlastResult<Self> {
        if points.is_empty() {
            return Err(BlastError::InvalidTable {
                what: "at least one calibration point is required",
            });
        }
        if points
            .iter()
            .any(|pt| !(pt.p_mbar.is_finite() && pt.p_mbar > 0.0 && pt.c.is_finite() && pt.c > 0.0))
        {
            return Err(BlastError::InvalidTable {
                what: "pressures and coefficients must be positive and finite",
            });
        }
        if points.windows(2).any(|w| w[0].p_mbar >= w[1].p_mbar) {
            return Err(BlastError::InvalidTable {
                what: "pressures must be strictly ascending",
            });
        }
        if points.windows(2).any(|w| w[0].c < w[1].c) {
            return Err(BlastError::InvalidTable {
                what: "coefficients must not increase with pressure",
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[TnoPoint] {
        &self.points
    }

    fn first(&self) -> TnoPoint {
        self.points[0]
    }

    fn last(&self) -> TnoPoint {
        self.points[self.points.len() - 1]
    }

    /// Coefficient at `p_mbar`.
    ///
    /// Clamped to the boundary coefficients outside the table; log-linear
    /// (ln C against ln p) between bracketing points.
    pub fn coefficient(&self, p_mbar: f64) -> f64 {
        let first = self.first();
        let last = self.last();
        if p_mbar <= first.p_mbar {
            return first.c;
        }
        if p_mbar >= last.p_mbar {
            return last.c;
        }

        for w in self.points.windows(2) {
            let (a, b) = (w[0], w[1]);
            if p_mbar < a.p_mbar || p_mbar > b.p_mbar {
                continue;
            }
            if p_mbar == a.p_mbar {
                return a.c;
            }
            if p_mbar == b.p_mbar {
                return b.c;
            }
            return lerp(p_mbar.ln(), a.p_mbar.ln(), b.p_mbar.ln(), a.c.ln(), b.c.ln()).exp();
        }

        // Unreachable for a validated table; NaN pressures land here.
        f64::NAN
    }

    /// Overpressure [mbar] whose coefficient equals `c`, or `None` when `c`
    /// lies outside the table's coefficient span.
    ///
    /// Inside a flat segment the lowest pressure of that segment is returned.
    pub fn pressure_for_coefficient(&self, c: f64) -> Option<f64> {
        // Snap values that miss a boundary coefficient only by rounding.
        const REL_TOL: f64 = 1e-9;
        let (hi_c, lo_c) = (self.first().c, self.last().c);
        let c = if c > hi_c && c <= hi_c * (1.0 + REL_TOL) {
            hi_c
        } else if c < lo_c && c >= lo_c * (1.0 - REL_TOL) {
            lo_c
        } else {
            c
        };
        if !c.is_finite() || c <= 0.0 || c > hi_c || c < lo_c {
            return None;
        }
        for w in self.points.windows(2) {
            let (a, b) = (w[0], w[1]);
            if c > a.c || c < b.c {
                continue;
            }
            if c == a.c {
                return Some(a.p_mbar);
            }
            if c == b.c {
                return Some(b.p_mbar);
            }
            return Some(lerp(c.ln(), a.c.ln(), b.c.ln(), a.p_mbar.ln(), b.p_mbar.ln()).exp());
        }
        // Single-point table.
        Some(self.first().p_mbar)
    }
}

/// Coefficient from the index 10 table.
pub fn tno_coefficient(p_mbar: f64) -> f64 {
    TnoTable::index_10().coefficient(p_mbar)
}
