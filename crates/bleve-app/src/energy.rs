//! Energy balance for a flashing liquid release.
//!
//! The vessel content is taken at saturation at the rupture pressure and
//! expanded isentropically to atmospheric pressure. The available energy is
//! the drop in total internal energy between those two states:
//!
//! ```text
//! y       = (s_i - s_l,f) / (s_v,f - s_l,f)
//! U_f     = M_tot · [(1 - y)·u_l,f + y·u_v,f]
//! E_avail = U_i - U_f
//! E_eff   = Asb · E_avail
//! ```

use bleve_core::units::constants::{ATMOSPHERIC_PRESSURE_PA, PA_PER_BAR};
use bleve_core::units::{celsius, pa};
use bleve_core::{Tolerances, nearly_equal};
use bleve_thermo::{SaturationProps, SaturationProvider};

use crate::error::{AppError, AppResult};
use crate::inputs::ValidatedInputs;
use crate::trace::CalculationTrace;

/// Outcome of the energy balance.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyBalance {
    /// Internal energy released by the flash [J]
    pub available_energy: f64,
    /// Available energy scaled by the surface factor [J]
    pub effective_energy: f64,
    /// Vapor mass fraction after the flash [-]
    pub vapor_fraction: f64,
    pub trace: CalculationTrace,
}

/// Liquid/vapor split of the vessel content at rupture.
#[derive(Debug, Clone, Copy)]
struct Inventory {
    v_l: f64,
    v_v: f64,
    m_l: f64,
    m_v: f64,
}

impl Inventory {
    fn new(inputs: &ValidatedInputs, sat: &SaturationProps) -> Self {
        let v_l = inputs.volume_m3 * inputs.liquid_fraction;
        let v_v = inputs.volume_m3 - v_l;
        Self {
            v_l,
            v_v,
            m_l: sat.rho_l_kg_m3() * v_l,
            m_v: sat.rho_v_kg_m3() * v_v,
        }
    }

    fn m_total(&self) -> f64 {
        self.m_l + self.m_v
    }

    /// Total internal energy [J].
    fn internal_energy(&self, sat: &SaturationProps) -> f64 {
        self.m_l * sat.u_l + self.m_v * sat.u_v
    }

    /// Mass-weighted specific entropy [J/(kg·K)].
    fn mean_entropy(&self, sat: &SaturationProps) -> f64 {
        (self.m_l * sat.s_l + self.m_v * sat.s_v) / self.m_total()
    }
}

/// Vapor fraction reached by an isentropic flash from entropy `s_i` into the
/// saturation state `fin`. Fails unless it lies in [0, 1].
fn flash_fraction(s_i: f64, fin: &SaturationProps) -> AppResult<f64> {
    let y = (s_i - fin.s_l) / (fin.s_v - fin.s_l);
    if !(0.0..=1.0).contains(&y) {
        return Err(AppError::PhysicalInconsistency(format!(
            "final vapor mass fraction y = {y:.4} is outside [0, 1]; the rupture state \
             cannot reach atmospheric pressure isentropically. Check input parameters."
        )));
    }
    Ok(y)
}

/// Run the energy balance, consulting `provider` at the rupture pressure and
/// at atmospheric pressure.
pub fn compute_energy_balance(
    inputs: &ValidatedInputs,
    provider: &dyn SaturationProvider,
) -> AppResult<EnergyBalance> {
    let mut trace = CalculationTrace::new();

    trace.record("Total Volume (V_tot)", inputs.volume_m3, "m³");
    trace.record("Liquid Volume Fraction (φ_l)", inputs.liquid_fraction, "-");
    trace.record(
        "Initial Relative Pressure (P_rel)",
        inputs.pressure_rel_bar,
        "bar",
    );
    let p_i = inputs.pressure_abs_pa();
    trace.record("Initial Absolute Pressure (P_i)", p_i / PA_PER_BAR, "bar");

    let init = provider.saturation(pa(p_i))?;
    tracing::debug!(provider = provider.name(), state = %init.summary(), "initial state");
    trace.record(
        "Initial Temperature",
        format!("{:.2}", celsius(init.t)),
        "°C",
    );
    trace.record("Initial Liquid Enthalpy (h_l_i)", init.h_l / 1e3, "kJ/kg");
    trace.record("Initial Vapor Enthalpy (h_v_i)", init.h_v / 1e3, "kJ/kg");
    trace.record(
        "Initial Liquid Density (ρ_l_i)",
        init.rho_l_kg_m3(),
        "kg/m³",
    );
    trace.record("Initial Vapor Density (ρ_v_i)", init.rho_v_kg_m3(), "kg/m³");
    trace.record("Initial Liquid Entropy (s_l_i)", init.s_l / 1e3, "kJ/kg.K");
    trace.record("Initial Vapor Entropy (s_v_i)", init.s_v / 1e3, "kJ/kg.K");

    let inv = Inventory::new(inputs, &init);
    let m_total = inv.m_total();
    trace.record("Liquid Volume (V_l)", inv.v_l, "m³");
    trace.record("Vapor Volume (V_v)", inv.v_v, "m³");
    trace.record("Liquid Mass (m_l)", inv.m_l, "kg");
    trace.record("Vapor Mass (m_v)", inv.m_v, "kg");
    trace.record("Total Mass (M_tot)", m_total, "kg");

    let u_i = inv.internal_energy(&init);
    trace.record(
        "Initial Liquid Internal Energy (u_l_i)",
        init.u_l / 1e3,
        "kJ/kg",
    );
    trace.record(
        "Initial Vapor Internal Energy (u_v_i)",
        init.u_v / 1e3,
        "kJ/kg",
    );
    trace.record("Total Initial Internal Energy (U_i)", u_i / 1e6, "MJ");

    let s_i = inv.mean_entropy(&init);
    trace.record("Average Initial Entropy (s_i)", s_i / 1e3, "kJ/kg.K");

    let fin = provider.saturation(pa(ATMOSPHERIC_PRESSURE_PA))?;
    tracing::debug!(provider = provider.name(), state = %fin.summary(), "final state");
    trace.record("Final Liquid Entropy (s_l_f)", fin.s_l / 1e3, "kJ/kg.K");
    trace.record("Final Vapor Entropy (s_v_f)", fin.s_v / 1e3, "kJ/kg.K");

    let y = flash_fraction(s_i, &fin)?;
    trace.record("Final Vapor Mass Fraction (y)", y, "-");

    let u_f = m_total * ((1.0 - y) * fin.u_l + y * fin.u_v);
    trace.record(
        "Final Liquid Internal Energy (u_l_f)",
        fin.u_l / 1e3,
        "kJ/kg",
    );
    trace.record(
        "Final Vapor Internal Energy (u_v_f)",
        fin.u_v / 1e3,
        "kJ/kg",
    );
    trace.record("Total Final Internal Energy (U_f)", u_f / 1e6, "MJ");

    // Coincident states release nothing; rounding noise is clamped to zero.
    let available_energy = if nearly_equal(u_i, u_f, Tolerances::default()) {
        0.0
    } else {
        (u_i - u_f).max(0.0)
    };
    trace.record(
        "Available Energy (E_available = Ui - Uf)",
        available_energy / 1e6,
        "MJ",
    );

    let effective_energy = inputs.asb * available_energy;
    trace.record("Surface Factor (Asb)", inputs.asb, "-");
    trace.record(
        "Effective Energy (E_effective = Asb * E_available)",
        effective_energy / 1e6,
        "MJ",
    );

    Ok(EnergyBalance {
        available_energy,
        effective_energy,
        vapor_fraction: y,
        trace,
    })
}
