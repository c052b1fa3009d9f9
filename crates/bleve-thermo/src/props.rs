//! Saturation state records.

use crate::error::{ThermoError, ThermoResult};
use bleve_core::{ensure_finite, lerp};
use bleve_core::units::{Density, Pressure, SpecEnergy, SpecEntropy, Temperature, k, kg_per_m3};

/// Specific internal energy from enthalpy and density: `u = h - P/ρ` [J/kg].
#[inline]
pub fn internal_energy(h: SpecEnergy, p_pa: f64, rho_kg_m3: f64) -> SpecEnergy {
    h - p_pa / rho_kg_m3
}

/// Saturation data at one pressure, without the pressure itself and without
/// internal energies (those are always derived).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SaturationRecord {
    /// Saturation temperature [K]
    pub t_k: f64,
    /// Saturated liquid enthalpy [J/kg]
    pub h_l: SpecEnergy,
    /// Saturated vapor enthalpy [J/kg]
    pub h_v: SpecEnergy,
    /// Saturated liquid density [kg/m³]
    pub rho_l: f64,
    /// Saturated vapor density [kg/m³]
    pub rho_v: f64,
    /// Saturated liquid entropy [J/(kg·K)]
    pub s_l: SpecEntropy,
    /// Saturated vapor entropy [J/(kg·K)]
    pub s_v: SpecEntropy,
}

impl SaturationRecord {
    /// Linear interpolation of every field at `p` between two bracketing records.
    pub fn interpolate(p: f64, p0: f64, lo: &Self, p1: f64, hi: &Self) -> Self {
        Self {
            t_k: lerp(p, p0, p1, lo.t_k, hi.t_k),
            h_l: lerp(p, p0, p1, lo.h_l, hi.h_l),
            h_v: lerp(p, p0, p1, lo.h_v, hi.h_v),
            rho_l: lerp(p, p0, p1, lo.rho_l, hi.rho_l),
            rho_v: lerp(p, p0, p1, lo.rho_v, hi.rho_v),
            s_l: lerp(p, p0, p1, lo.s_l, hi.s_l),
            s_v: lerp(p, p0, p1, lo.s_v, hi.s_v),
        }
    }
}

/// A single liquid/vapor saturation state.
///
/// Produced fresh per lookup and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SaturationProps {
    /// Pressure [Pa]
    pub p: Pressure,

    /// Saturation temperature [K]
    pub t: Temperature,

    /// Saturated liquid specific enthalpy [J/kg]
    pub h_l: SpecEnergy,

    /// Saturated vapor specific enthalpy [J/kg]
    pub h_v: SpecEnergy,

    /// Saturated liquid density [kg/m³]
    pub rho_l: Density,

    /// Saturated vapor density [kg/m³]
    pub rho_v: Density,

    /// Saturated liquid specific entropy [J/(kg·K)]
    pub s_l: SpecEntropy,

    /// Saturated vapor specific entropy [J/(kg·K)]
    pub s_v: SpecEntropy,

    /// Saturated liquid specific internal energy [J/kg]
    pub u_l: SpecEnergy,

    /// Saturated vapor specific internal energy [J/kg]
    pub u_v: SpecEnergy,
}

impl SaturationProps {
    /// Build a state from a record, deriving internal energies from `u = h - P/ρ`.
    pub fn from_record(p_pa: f64, rec: &SaturationRecord) -> ThermoResult<Self> {
        Self::with_internal_energy(p_pa, rec, None, None)
    }

    /// Build a state from a record, using supplied internal energies where
    /// present and deriving the missing ones.
    pub fn with_internal_energy(
        p_pa: f64,
        rec: &SaturationRecord,
        u_l: Option<SpecEnergy>,
        u_v: Option<SpecEnergy>,
    ) -> ThermoResult<Self> {
        validation::validate_record(p_pa, rec)?;
        let u_l = u_l.unwrap_or_else(|| internal_energy(rec.h_l, p_pa, rec.rho_l));
        let u_v = u_v.unwrap_or_else(|| internal_energy(rec.h_v, p_pa, rec.rho_v));
        if !u_l.is_finite() || !u_v.is_finite() {
            return Err(ThermoError::NonPhysical {
                what: "internal energy must be finite",
            });
        }

        Ok(Self {
            p: bleve_core::units::pa(p_pa),
            t: k(rec.t_k),
            h_l: rec.h_l,
            h_v: rec.h_v,
            rho_l: kg_per_m3(rec.rho_l),
            rho_v: kg_per_m3(rec.rho_v),
            s_l: rec.s_l,
            s_v: rec.s_v,
            u_l,
            u_v,
        })
    }

    pub fn pressure_pa(&self) -> f64 {
        self.p.value
    }

    pub fn temperature_k(&self) -> f64 {
        self.t.value
    }

    pub fn rho_l_kg_m3(&self) -> f64 {
        self.rho_l.value
    }

    pub fn rho_v_kg_m3(&self) -> f64 {
        self.rho_v.value
    }

    /// Latent heat of vaporization [J/kg].
    pub fn h_lv(&self) -> SpecEnergy {
        self.h_v - self.h_l
    }

    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Sat(P={:.0}Pa,T={:.2}K,h_l={:.1},h_v={:.1}J/kg,ρ_l={:.3},ρ_v={:.4}kg/m³,s_l={:.1},s_v={:.1}J/kg·K)",
            self.pressure_pa(),
            self.temperature_k(),
            self.h_l,
            self.h_v,
            self.rho_l_kg_m3(),
            self.rho_v_kg_m3(),
            self.s_l,
            self.s_v
        )
    }
}

/// Validation helpers for saturation data.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p_pa: f64) -> ThermoResult<()> {
        if !p_pa.is_finite() || p_pa <= 0.0 {
            return Err(ThermoError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn validate_record(p_pa: f64, rec: &SaturationRecord) -> ThermoResult<()> {
        validate_pressure(p_pa)?;
        if !rec.t_k.is_finite() || rec.t_k <= 0.0 {
            return Err(ThermoError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        for rho in [rec.rho_l, rec.rho_v] {
            if !rho.is_finite() || rho <= 0.0 {
                return Err(ThermoError::NonPhysical {
                    what: "density must be positive and finite",
                });
            }
        }
        for (v, what) in [
            (rec.h_l, "liquid enthalpy"),
            (rec.h_v, "vapor enthalpy"),
            (rec.s_l, "liquid entropy"),
            (rec.s_v, "vapor entropy"),
        ] {
            ensure_finite(v, what)?;
        }
        Ok(())
    }
}
