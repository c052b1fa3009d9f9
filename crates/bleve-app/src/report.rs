//! Report export: one JSON document plus flat CSV tables.

use std::fs;
use std::path::{Path, PathBuf};

use bleve_blast::METHOD_LABEL;
use serde::Serialize;

use crate::engine::CalculationResults;
use crate::error::AppResult;
use crate::inputs::CalculationInputs;

/// Files produced by [`write_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub steps: PathBuf,
    pub distances: PathBuf,
    pub curve: PathBuf,
}

impl ReportPaths {
    fn in_dir(dir: &Path) -> Self {
        Self {
            json: dir.join("results.json"),
            steps: dir.join("steps.csv"),
            distances: dir.join("distances.csv"),
            curve: dir.join("curve.csv"),
        }
    }
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    method: &'static str,
    inputs: &'a CalculationInputs,
    results: &'a CalculationResults,
}

/// Write `results.json`, `steps.csv`, `distances.csv` and `curve.csv` into
/// `dir`, creating it if needed.
pub fn write_report(
    dir: &Path,
    inputs: &CalculationInputs,
    results: &CalculationResults,
) -> AppResult<ReportPaths> {
    fs::create_dir_all(dir)?;
    let paths = ReportPaths::in_dir(dir);

    let doc = ReportDocument {
        method: METHOD_LABEL,
        inputs,
        results,
    };
    fs::write(&paths.json, serde_json::to_string_pretty(&doc)?)?;
    fs::write(&paths.steps, steps_csv(results))?;
    fs::write(&paths.distances, distances_csv(results))?;
    fs::write(&paths.curve, curve_csv(results))?;

    tracing::debug!(dir = %dir.display(), "report written");
    Ok(paths)
}

pub fn steps_csv(results: &CalculationResults) -> String {
    let mut csv = String::from("description,value,unit\n");
    for step in &results.calculation_steps {
        csv.push_str(&format!(
            "{},{},{}\n",
            csv_field(&step.description),
            csv_field(&step.value.to_string()),
            csv_field(&step.unit)
        ));
    }
    csv
}

pub fn distances_csv(results: &CalculationResults) -> String {
    let mut csv = String::from("threshold_mbar,distance_m,method\n");
    for d in &results.distance_results {
        csv.push_str(&format!(
            "{},{:.2},{}\n",
            d.threshold,
            d.distance,
            csv_field(METHOD_LABEL)
        ));
    }
    csv
}

pub fn curve_csv(results: &CalculationResults) -> String {
    let mut csv = String::from("distance_m,overpressure_mbar\n");
    for p in &results.overpressure_curve {
        csv.push_str(&format!("{:.2},{:.2}\n", p.distance, p.overpressure));
    }
    csv
}

/// Quote a field when it carries a separator, quote or newline.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_with_separators_are_quoted() {
        assert_eq!(csv_field("Total Mass (M_tot)"), "Total Mass (M_tot)");
        assert_eq!(csv_field("a, b"), "\"a, b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn paths_share_the_directory() {
        let paths = ReportPaths::in_dir(Path::new("out"));
        assert_eq!(paths.json, Path::new("out/results.json"));
        assert_eq!(paths.curve, Path::new("out/curve.csv"));
    }
}
