//! Saturation properties from a remote thermo property service.
//!
//! Wire contract: `GET {base}/thermo/properties?pressurePa=<Pa>` answers with a
//! JSON [`PropertyPayload`] in SI base units. Internal energies are optional;
//! when absent they are derived from `u = h - P/ρ` like the table provider does.

use std::time::Duration;

use crate::error::{ThermoError, ThermoResult};
use crate::props::validation::validate_pressure;
use crate::props::{SaturationProps, SaturationRecord};
use crate::provider::SaturationProvider;
use bleve_core::units::Pressure;
use serde::{Deserialize, Serialize};

/// JSON body returned by the property endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyPayload {
    pub pressure: f64,
    pub temperature: f64,
    pub h_l: f64,
    pub h_v: f64,
    pub rho_l: f64,
    pub rho_v: f64,
    pub s_l: f64,
    pub s_v: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u_l: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u_v: Option<f64>,
}

impl PropertyPayload {
    /// Convert into a saturation state. Non-physical payloads count as malformed.
    pub fn into_props(self) -> ThermoResult<SaturationProps> {
        let rec = SaturationRecord {
            t_k: self.temperature,
            h_l: self.h_l,
            h_v: self.h_v,
            rho_l: self.rho_l,
            rho_v: self.rho_v,
            s_l: self.s_l,
            s_v: self.s_v,
        };
        SaturationProps::with_internal_energy(self.pressure, &rec, self.u_l, self.u_v).map_err(
            |e| ThermoError::retrieval(format!("malformed payload: {e}")),
        )
    }
}

impl From<&SaturationProps> for PropertyPayload {
    fn from(sat: &SaturationProps) -> Self {
        Self {
            pressure: sat.pressure_pa(),
            temperature: sat.temperature_k(),
            h_l: sat.h_l,
            h_v: sat.h_v,
            rho_l: sat.rho_l_kg_m3(),
            rho_v: sat.rho_v_kg_m3(),
            s_l: sat.s_l,
            s_v: sat.s_v,
            u_l: Some(sat.u_l),
            u_v: Some(sat.u_v),
        }
    }
}

/// HTTP-backed saturation provider.
///
/// Blocking; every lookup is one request with the agent's timeout. Failures
/// are reported as [`ThermoError::Retrieval`] and never retried here.
#[derive(Debug, Clone)]
pub struct RemoteProvider {
    base_url: String,
    agent: ureq::Agent,
}

impl RemoteProvider {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a provider for the service at `base_url`. Trailing slashes are ignored.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Check that the service answers `GET /healthz`.
    pub fn health(&self) -> ThermoResult<()> {
        let url = self.endpoint("healthz");
        self.agent.get(&url).call().map_err(request_error)?;
        Ok(())
    }

    fn fetch(&self, p_pa: f64) -> ThermoResult<SaturationProps> {
        let url = self.endpoint("thermo/properties");
        let response = self
            .agent
            .get(&url)
            .query("pressurePa", &p_pa.to_string())
            .call()
            .map_err(request_error)?;

        let payload: PropertyPayload = response
            .into_json()
            .map_err(|e| ThermoError::retrieval(format!("malformed payload: {e}")))?;
        payload.into_props()
    }
}

fn request_error(err: ureq::Error) -> ThermoError {
    match err {
        ureq::Error::Status(code, _) => ThermoError::retrieval(code.to_string()),
        ureq::Error::Transport(t) => ThermoError::retrieval(format!("transport: {t}")),
    }
}

impl SaturationProvider for RemoteProvider {
    fn name(&self) -> &str {
        "thermo-api"
    }

    fn saturation(&self, p: Pressure) -> ThermoResult<SaturationProps> {
        let p_pa = p.value;
        validate_pressure(p_pa)?;
        tracing::debug!(p_pa, base_url = %self.base_url, "remote property lookup");
        self.fetch(p_pa)
    }
}
