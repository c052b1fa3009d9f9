use std::sync::atomic::{AtomicUsize, Ordering};

use bleve_app::{
    AppError, CalculationInputs, Engine, ErrorKind, StepValue, calculate_bleve,
};
use bleve_blast::BlastModel;
use bleve_core::units::Pressure;
use bleve_core::{Tolerances, nearly_equal};
use bleve_thermo::{SaturationProps, SaturationProvider, SteamTableProvider, ThermoResult};
use proptest::prelude::*;

#[test]
fn nominal_vessel() {
    let results = Engine::default()
        .calculate(&CalculationInputs::default())
        .unwrap();

    assert!(results.available_energy > 0.0);
    assert!(results.effective_energy > results.available_energy);
    assert_eq!(results.calculation_steps.len(), 29);

    let thresholds: Vec<f64> = results.distance_results.iter().map(|d| d.threshold).collect();
    assert_eq!(thresholds, vec![50.0, 140.0, 200.0]);
    let distances: Vec<f64> = results.distance_results.iter().map(|d| d.distance).collect();
    assert!(distances[0] > distances[1] && distances[1] > distances[2]);

    assert!(results.overpressure_curve.len() > 10);
    assert!(
        results
            .overpressure_curve
            .windows(2)
            .all(|w| w[0].distance <= w[1].distance)
    );
}

#[test]
fn trace_reports_temperature_as_text() {
    let results = Engine::default()
        .calculate(&CalculationInputs::default())
        .unwrap();
    let step = &results.calculation_steps[4];
    assert_eq!(step.description, "Initial Temperature");
    match &step.value {
        StepValue::Text(t) => {
            let (_, decimals) = t.split_once('.').unwrap();
            assert_eq!(decimals.len(), 2);
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn garbage_thresholds_are_rejected() {
    let inputs = CalculationInputs {
        thresholds: "foo, -1, 0".into(),
        ..Default::default()
    };
    let err = Engine::default().calculate(&inputs).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("threshold"));
}

#[test]
fn liquid_fraction_above_one_is_rejected() {
    let inputs = CalculationInputs {
        liquid_fraction: 1.2,
        ..Default::default()
    };
    let err = Engine::default().calculate(&inputs).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn pressure_beyond_table_is_a_range_error() {
    let inputs = CalculationInputs {
        pressure_rel: 300.0,
        ..Default::default()
    };
    let err = Engine::default().calculate(&inputs).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PropertyRange);
    assert!(err.to_string().contains("outside the supported range"));
}

#[test]
fn zero_relative_pressure_gives_zero_effect() {
    for liquid_fraction in [0.01, 0.3, 0.7, 1.0] {
        let inputs = CalculationInputs {
            pressure_rel: 0.0,
            liquid_fraction,
            ..Default::default()
        };
        let results = Engine::default().calculate(&inputs).unwrap();
        assert_eq!(results.available_energy, 0.0);
        assert_eq!(results.effective_energy, 0.0);
        assert_eq!(results.calculation_steps.len(), 29);
        assert_eq!(results.distance_results.len(), 3);
        assert!(results.distance_results.iter().all(|d| d.distance == 0.0));
        assert!(results.overpressure_curve.is_empty());
    }
}

#[test]
fn tiny_pressure_drop_still_releases_energy() {
    let inputs = CalculationInputs {
        pressure_rel: 1e-6,
        ..Default::default()
    };
    let results = Engine::default().calculate(&inputs).unwrap();
    assert!(results.available_energy > 0.0);
    assert!(!results.overpressure_curve.is_empty());
}

/// Counts lookups before delegating to the steam table.
#[derive(Default)]
struct Counting {
    calls: AtomicUsize,
}

impl SaturationProvider for Counting {
    fn name(&self) -> &str {
        "counting"
    }

    fn saturation(&self, p: Pressure) -> ThermoResult<SaturationProps> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        SteamTableProvider::new().saturation(p)
    }
}

#[test]
fn invalid_inputs_never_reach_the_provider() {
    let provider = Counting::default();
    let inputs = CalculationInputs {
        volume: -1.0,
        ..Default::default()
    };
    assert!(calculate_bleve(&inputs, &provider, &BlastModel::default()).is_err());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

    let inputs = CalculationInputs {
        thresholds: "".into(),
        ..Default::default()
    };
    assert!(calculate_bleve(&inputs, &provider, &BlastModel::default()).is_err());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

    calculate_bleve(&CalculationInputs::default(), &provider, &BlastModel::default()).unwrap();
    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn concurrent_calculations_agree() {
    let engine = Engine::default();
    let expected = engine.calculate(&CalculationInputs::default()).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| engine.calculate(&CalculationInputs::default())))
            .collect();
        for handle in handles {
            let results = handle.join().unwrap().unwrap();
            assert_eq!(results, expected);
        }
    });
}

proptest! {
    #[test]
    fn effective_energy_scales_with_surface_factor(
        volume in 0.1f64..100.0,
        liquid_fraction in 0.2f64..=1.0,
        pressure_rel in 5.0f64..35.0,
        asb in 0.1f64..5.0,
    ) {
        let inputs = CalculationInputs {
            volume,
            liquid_fraction,
            pressure_rel,
            asb,
            ..Default::default()
        };
        let results = Engine::default().calculate(&inputs).unwrap();
        prop_assert!(results.available_energy > 0.0);
        prop_assert!(nearly_equal(
            results.effective_energy,
            asb * results.available_energy,
            Tolerances::default()
        ));
    }
}
