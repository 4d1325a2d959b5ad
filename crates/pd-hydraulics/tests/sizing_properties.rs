//! Property tests over the sizing and curve math.

use pd_hydraulics::{characteristic_curve, size_pump, Material, MotorClass, PumpSeries, PumpSpec};
use proptest::prelude::*;

fn arb_motor_class() -> impl Strategy<Value = MotorClass> {
    prop::sample::select(MotorClass::ALL.to_vec())
}

proptest! {
    #[test]
    fn curve_is_non_increasing_for_any_duty_point(
        flow in 0.1f64..5000.0,
        head in 0.1f64..1000.0,
    ) {
        let curve = characteristic_curve(flow, head);
        prop_assert!((curve.heads_m[0] - 1.25 * head).abs() < 1e-9 * head.max(1.0));
        for pair in curve.heads_m.windows(2) {
            prop_assert!(pair[1] <= pair[0] + 1e-12);
        }
    }

    #[test]
    fn suggested_motor_tracks_shaft_power(
        flow in 0.0f64..5000.0,
        head in 0.0f64..1000.0,
        class in arb_motor_class(),
        op_hours in 1000u32..=8760,
    ) {
        let spec = PumpSpec::new(
            flow, head, 5.0, 3.5,
            class, Material::Aisi316, PumpSeries::EndSuction, op_hours,
        ).unwrap();
        let result = size_pump(&spec);

        // Rounded to one decimal, so within 0.05 of the raw value
        prop_assert!((result.suggested_motor_kw - result.shaft_power_kw * 1.15).abs() <= 0.05 + 1e-9);
        prop_assert!(result.shaft_power_kw >= result.hydraulic_power_kw);
    }

    #[test]
    fn better_motor_class_never_costs_more_energy(
        flow in 0.1f64..5000.0,
        head in 0.1f64..1000.0,
        op_hours in 1000u32..=8760,
    ) {
        let mut previous: Option<f64> = None;
        for class in MotorClass::ALL {
            let spec = PumpSpec::new(
                flow, head, 5.0, 3.5,
                class, Material::Aisi316, PumpSeries::EndSuction, op_hours,
            ).unwrap();
            let energy = size_pump(&spec).annual_energy_kwh;
            if let Some(prev) = previous {
                prop_assert!(energy < prev);
            }
            previous = Some(energy);
        }
    }

    #[test]
    fn npsh_margin_is_exact_difference(
        npsha in 0.0f64..50.0,
        npshr in 0.0f64..50.0,
    ) {
        let spec = PumpSpec::new(
            50.0, 100.0, npsha, npshr,
            MotorClass::Ie3, Material::Aisi304, PumpSeries::Inline, 4000,
        ).unwrap();
        let result = size_pump(&spec);
        prop_assert_eq!(result.npsh_margin_m, npsha - npshr);
        prop_assert_eq!(result.cavitation_risk, (npsha - npshr) < 0.5);
    }
}
