//! Audit trail of a calculation.
//!
//! Steps are appended in the order the derivation proceeds and are never
//! reordered or removed; the sequence itself is part of the output.

use std::fmt;

use bleve_core::round_sig;
use serde::{Deserialize, Serialize};

/// Significant digits kept for numeric trace values.
pub const TRACE_SIGNIFICANT_DIGITS: usize = 5;

/// A trace value: a number, or preformatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StepValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepValue::Number(v) => write!(f, "{v}"),
            StepValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for StepValue {
    fn from(v: f64) -> Self {
        StepValue::Number(round_sig(v, TRACE_SIGNIFICANT_DIGITS))
    }
}

impl From<String> for StepValue {
    fn from(s: String) -> Self {
        StepValue::Text(s)
    }
}

/// One audit entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    pub description: String,
    pub value: StepValue,
    pub unit: String,
}

/// Append-only trace owned by a single calculation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationTrace {
    steps: Vec<CalculationStep>,
}

impl CalculationTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step. Numbers are rounded for display only.
    pub fn record(&mut self, description: &str, value: impl Into<StepValue>, unit: &str) {
        self.steps.push(CalculationStep {
            description: description.to_string(),
            value: value.into(),
            unit: unit.to_string(),
        });
    }

    pub fn steps(&self) -> &[CalculationStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<CalculationStep> {
        self.steps
    }
}
