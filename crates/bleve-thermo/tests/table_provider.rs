use bleve_core::units::pa;
use bleve_thermo::{SaturationProvider, SteamTableProvider, ThermoError, internal_energy};
use proptest::prelude::*;

#[test]
fn atmospheric_state_is_boiling_water() {
    let sat = SteamTableProvider::new().saturation(pa(101_325.0)).unwrap();
    assert!((sat.temperature_k() - 373.15).abs() < 0.1);
    assert!(sat.h_lv() > 2.0e6);
}

#[test]
fn out_of_range_message_is_descriptive() {
    let err = SteamTableProvider::new()
        .saturation(pa(30.0e5 * 10.0 + 101_325.0))
        .unwrap_err();
    assert!(matches!(err, ThermoError::OutOfRange { .. }));
    assert!(err.to_string().contains("outside the supported range"));
}

proptest! {
    #[test]
    fn interpolated_states_are_consistent(p_pa in 101_325.0f64..4.0e6) {
        let sat = SteamTableProvider::new().saturation(pa(p_pa)).unwrap();
        prop_assert_eq!(sat.u_l, internal_energy(sat.h_l, p_pa, sat.rho_l_kg_m3()));
        prop_assert_eq!(sat.u_v, internal_energy(sat.h_v, p_pa, sat.rho_v_kg_m3()));
        prop_assert!(sat.s_v > sat.s_l);
        prop_assert!(sat.rho_l_kg_m3() > sat.rho_v_kg_m3());
    }

    #[test]
    fn saturation_temperature_rises_with_pressure(a in 101_325.0f64..4.0e6, b in 101_325.0f64..4.0e6) {
        let provider = SteamTableProvider::new();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let t_lo = provider.saturation(pa(lo)).unwrap().temperature_k();
        let t_hi = provider.saturation(pa(hi)).unwrap().temperature_k();
        prop_assert!(t_lo <= t_hi + 1e-9);
    }
}
