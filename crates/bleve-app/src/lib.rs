//! Shared application layer for the BLEVE consequence engine.
//!
//! This crate provides the single entry point front ends depend on: it takes
//! `CalculationInputs`, runs the energy balance against the configured
//! saturation provider, maps the effective energy to blast distances, and
//! returns `CalculationResults` with a full audit trace.

pub mod config;
pub mod energy;
pub mod engine;
pub mod error;
pub mod inputs;
pub mod report;
pub mod trace;

// Re-export key types for convenience
pub use config::{EngineConfig, ThermoConfig};
pub use energy::{EnergyBalance, compute_energy_balance};
pub use engine::{CalculationResults, Engine, calculate_bleve};
pub use error::{AppError, AppResult, ErrorKind};
pub use inputs::{CalculationInputs, ValidatedInputs};
pub use report::{ReportPaths, write_report};
pub use trace::{CalculationStep, CalculationTrace, StepValue};

pub use bleve_blast::{DistanceResult, OverpressurePoint};
