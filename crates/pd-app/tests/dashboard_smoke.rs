//! End-to-end dashboard evaluation over the service layer.

use pd_app::{evaluate, Material, MotorClass, PumpSeries, PumpSpec};

#[test]
fn reference_installation_end_to_end() {
    let spec = PumpSpec::new(
        50.0,
        100.0,
        5.0,
        3.5,
        MotorClass::Ie2,
        Material::Aisi316,
        PumpSeries::EndSuction,
        4000,
    )
    .unwrap();

    let state = evaluate(&spec);

    // P_hyd = 50*100*1000*9.81/3.6e6 = 13.625 kW; shaft at eta 0.74
    assert!((state.sizing.hydraulic_power_kw - 13.625).abs() < 1e-9);
    assert!((state.sizing.shaft_power_kw - 13.625 / 0.74).abs() < 1e-9);
    assert!((state.sizing.shaft_power_kw - 18.41).abs() < 0.01);

    assert!((state.sizing.npsh_margin_m - 1.5).abs() < 1e-12);
    assert!(!state.sizing.cavitation_risk);

    // Energy and carbon follow the IE2 efficiency
    let expected_energy = state.sizing.shaft_power_kw / 0.88 * 4000.0;
    assert!((state.sizing.annual_energy_kwh - expected_energy).abs() < 1e-6);
    assert!(
        (state.sizing.annual_co2_tons - expected_energy * 0.42 / 1000.0).abs() < 1e-9
    );

    // Curve shape around the duty point
    assert_eq!(state.curve.flows_m3h.len(), 50);
    assert!((state.curve.heads_m[0] - 125.0).abs() < 1e-9);
    assert_eq!(state.curve.operating_point, (50.0, 100.0));
}

#[test]
fn dashboard_stays_usable_for_risky_duty_points() {
    let spec = PumpSpec::new(
        50.0,
        100.0,
        3.0,
        3.5,
        MotorClass::Ie4,
        Material::CastIron,
        PumpSeries::Multistage,
        8000,
    )
    .unwrap();

    let state = evaluate(&spec);
    assert!(state.sizing.cavitation_risk);
    assert!((state.sizing.npsh_margin_m + 0.5).abs() < 1e-12);
    // Sizing still produced despite the risk flag
    assert!(state.sizing.suggested_motor_kw > 0.0);
}
