//! Properties of the scaling law that hold for any energy.

use bleve_blast::{BlastModel, TnoTable, tno_coefficient};
use proptest::prelude::*;

#[test]
fn boundary_coefficients_are_not_extrapolated() {
    let table = TnoTable::index_10();
    let first = table.points()[0];
    let last = table.points()[table.points().len() - 1];
    assert_eq!(tno_coefficient(first.p_mbar * 0.1), first.c);
    assert_eq!(tno_coefficient(last.p_mbar * 10.0), last.c);
}

proptest! {
    #[test]
    fn smaller_overpressure_reaches_farther(
        p1 in 0.1f64..1000.0,
        p2 in 0.1f64..1000.0,
        energy in 1.0e3f64..1.0e12,
    ) {
        let model = BlastModel::default();
        let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        let d_lo = model.distance_for(lo, energy);
        let d_hi = model.distance_for(hi, energy);
        prop_assert!(d_lo >= d_hi * (1.0 - 1e-12));
    }

    #[test]
    fn distance_round_trips_inside_calibration(
        p in 50.0f64..=300.0,
        energy in 1.0e3f64..1.0e12,
    ) {
        let model = BlastModel::default();
        let d = model.distance_for(p, energy);
        let back = model.overpressure_at(d, energy).unwrap();
        prop_assert!((back - p).abs() <= 1e-6 * p, "{} -> {}", p, back);
    }

    #[test]
    fn curve_is_sorted_for_any_thresholds(
        thresholds in prop::collection::vec(1.0f64..2000.0, 1..6),
        energy in 1.0e3f64..1.0e12,
    ) {
        let model = BlastModel::default();
        let curve = model.curve(&thresholds, energy);
        prop_assert!(curve.windows(2).all(|w| w[0].distance <= w[1].distance));
        prop_assert!(curve.len() <= 101);
    }
}
