//! Water saturation properties by linear interpolation over a calibration table.
//!
//! The table is illustrative: it is accurate enough for engineering estimates
//! between 1 atm and 40 bar, and nothing outside that range is extrapolated.

use crate::error::{ThermoError, ThermoResult};
use crate::props::{SaturationProps, SaturationRecord, validation};
use crate::provider::SaturationProvider;
use bleve_core::units::Pressure;

/// Calibration points, ascending in pressure [Pa].
const STEAM_TABLE: [(f64, SaturationRecord); 5] = [
    (
        101_325.0, // 1 atm
        SaturationRecord {
            t_k: 373.12,
            h_l: 419.06e3,
            h_v: 2675.4e3,
            rho_l: 958.35,
            rho_v: 0.597,
            s_l: 1.3069e3,
            s_v: 7.3549e3,
        },
    ),
    (
        1_000_000.0, // 10 bar
        SaturationRecord {
            t_k: 453.03,
            h_l: 762.5e3,
            h_v: 2777.1e3,
            rho_l: 887.3,
            rho_v: 5.14,
            s_l: 2.1381e3,
            s_v: 6.5850e3,
        },
    ),
    (
        2_000_000.0, // 20 bar
        SaturationRecord {
            t_k: 485.53,
            h_l: 908.4e3,
            h_v: 2798.3e3,
            rho_l: 850.5,
            rho_v: 9.95,
            s_l: 2.4465e3,
            s_v: 6.3390e3,
        },
    ),
    (
        3_000_000.0, // 30 bar
        SaturationRecord {
            t_k: 506.96,
            h_l: 1008.3e3,
            h_v: 2803.2e3,
            rho_l: 822.4,
            rho_v: 15.9,
            s_l: 2.6454e3,
            s_v: 6.1856e3,
        },
    ),
    (
        4_000_000.0, // 40 bar
        SaturationRecord {
            t_k: 523.01,
            h_l: 1087.4e3,
            h_v: 2800.3e3,
            rho_l: 799.3,
            rho_v: 21.3,
            s_l: 2.7968e3,
            s_v: 6.0695e3,
        },
    ),
];

/// Table-backed saturation provider for water.
///
/// Stateless; the calibration data is process-wide constant data.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteamTableProvider;

impl SteamTableProvider {
    pub fn new() -> Self {
        Self
    }

    /// Supported pressure range `(min, max)` [Pa].
    pub fn range_pa(&self) -> (f64, f64) {
        (STEAM_TABLE[0].0, STEAM_TABLE[STEAM_TABLE.len() - 1].0)
    }

    /// Calibration pressures [Pa], ascending.
    pub fn calibration_pressures(&self) -> impl Iterator<Item = f64> {
        STEAM_TABLE.iter().map(|(p, _)| *p)
    }

    fn lookup(&self, p_pa: f64) -> ThermoResult<SaturationProps> {
        validation::validate_pressure(p_pa)?;

        let (min_pa, max_pa) = self.range_pa();
        if p_pa < min_pa || p_pa > max_pa {
            return Err(ThermoError::OutOfRange {
                pressure_pa: p_pa,
                min_pa,
                max_pa,
            });
        }

        if let Some((_, rec)) = STEAM_TABLE.iter().find(|(p, _)| *p == p_pa) {
            return SaturationProps::from_record(p_pa, rec);
        }

        let (lo, hi) = STEAM_TABLE
            .windows(2)
            .map(|w| (&w[0], &w[1]))
            .find(|((p0, _), (p1, _))| *p0 <= p_pa && p_pa <= *p1)
            .ok_or(ThermoError::OutOfRange {
                pressure_pa: p_pa,
                min_pa,
                max_pa,
            })?;

        let rec = SaturationRecord::interpolate(p_pa, lo.0, &lo.1, hi.0, &hi.1);
        SaturationProps::from_record(p_pa, &rec)
    }
}

impl SaturationProvider for SteamTableProvider {
    fn name(&self) -> &str {
        "steam-table"
    }

    fn saturation(&self, p: Pressure) -> ThermoResult<SaturationProps> {
        let p_pa = p.value;
        tracing::debug!(p_pa, "steam table lookup");
        self.lookup(p_pa)
    }
}
