//! Engine entry point: inputs in, complete results out.

use bleve_blast::{BlastModel, DistanceResult, OverpressurePoint};
use bleve_thermo::SaturationProvider;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::energy::compute_energy_balance;
use crate::error::AppResult;
use crate::inputs::CalculationInputs;
use crate::trace::CalculationStep;

/// Everything one calculation produces. Built once; never partially filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResults {
    /// [J]
    pub available_energy: f64,
    /// [J]
    pub effective_energy: f64,
    pub distance_results: Vec<DistanceResult>,
    pub calculation_steps: Vec<CalculationStep>,
    pub overpressure_curve: Vec<OverpressurePoint>,
}

/// Run a full calculation against an explicit provider and blast model.
///
/// Inputs are validated before the provider is consulted.
pub fn calculate_bleve(
    inputs: &CalculationInputs,
    provider: &dyn SaturationProvider,
    blast: &BlastModel,
) -> AppResult<CalculationResults> {
    let validated = inputs.validate()?;
    let balance = compute_energy_balance(&validated, provider)?;

    let thresholds = &validated.thresholds_mbar;
    let distance_results = blast.distances(thresholds, balance.effective_energy);
    let overpressure_curve = blast.curve(thresholds, balance.effective_energy);

    tracing::info!(
        provider = provider.name(),
        available_mj = balance.available_energy / 1e6,
        effective_mj = balance.effective_energy / 1e6,
        vapor_fraction = balance.vapor_fraction,
        thresholds = thresholds.len(),
        "BLEVE calculation complete"
    );

    Ok(CalculationResults {
        available_energy: balance.available_energy,
        effective_energy: balance.effective_energy,
        distance_results,
        calculation_steps: balance.trace.into_steps(),
        overpressure_curve,
    })
}

/// A configured provider and blast model, shareable across threads.
///
/// Calculations hold no shared mutable state, so one engine can serve any
/// number of concurrent callers.
pub struct Engine {
    provider: Box<dyn SaturationProvider>,
    blast: BlastModel,
}

impl Engine {
    pub fn new(provider: Box<dyn SaturationProvider>, blast: BlastModel) -> Self {
        Self { provider, blast }
    }

    /// Build the provider and blast model described by `config`.
    pub fn from_config(config: &EngineConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self::new(config.build_provider(), config.blast_model()))
    }

    pub fn provider(&self) -> &dyn SaturationProvider {
        self.provider.as_ref()
    }

    pub fn blast(&self) -> &BlastModel {
        &self.blast
    }

    pub fn calculate(&self, inputs: &CalculationInputs) -> AppResult<CalculationResults> {
        calculate_bleve(inputs, self.provider.as_ref(), &self.blast)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(
            Box::new(bleve_thermo::SteamTableProvider::new()),
            BlastModel::default(),
        )
    }
}
