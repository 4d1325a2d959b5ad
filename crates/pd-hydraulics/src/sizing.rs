//! Closed-form pump sizing.
//!
//! ## Model
//!
//! ```text
//! P_hyd   = Q * H * rho * g / 3.6e6          (kW)
//! P_shaft = P_hyd / eta_pump
//! P_motor = round(P_shaft * 1.15, 1 decimal)
//! E_year  = P_shaft / eta_motor * op_hours   (kWh)
//! CO2     = E_year * 0.42 / 1000             (t/year)
//! ```
//!
//! NPSH margin is compared against a fixed 0.5 m safety threshold; a
//! margin of exactly 0.5 m counts as safe.

use crate::spec::{MotorClass, PumpSpec};
use pd_core::units::{constants, hours, in_kw, in_kwh, kw, m, m3h, Energy, Power};
use pd_core::round_to;
use serde::{Deserialize, Serialize};

/// Assumed pump hydraulic efficiency at the duty point.
pub const ETA_PUMP: f64 = 0.74;
/// Motor rating safety factor over computed shaft power.
pub const MOTOR_SAFETY_FACTOR: f64 = 1.15;
/// Grid carbon intensity (kg CO2 per kWh).
pub const CO2_KG_PER_KWH: f64 = 0.42;
/// NPSH margin below this flags cavitation risk (m).
pub const CAVITATION_MARGIN_M: f64 = 0.5;
/// Energy price used for the IE2-baseline savings figure (USD/kWh).
pub const ENERGY_PRICE_USD_PER_KWH: f64 = 0.15;

/// Derived sizing figures for one [`PumpSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    pub hydraulic_power_kw: f64,
    pub shaft_power_kw: f64,
    /// Shaft power with safety factor, rounded to one decimal
    pub suggested_motor_kw: f64,
    pub npsh_margin_m: f64,
    pub cavitation_risk: bool,
    pub annual_energy_kwh: f64,
    pub annual_co2_tons: f64,
    /// Yearly energy cost saved versus an IE2 motor on the same shaft load
    pub annual_savings_vs_ie2_usd: f64,
}

impl SizingResult {
    pub fn npsh_label(&self) -> &'static str {
        if self.cavitation_risk {
            "cavitation risk"
        } else {
            "safe"
        }
    }
}

/// Size the pump for a validated spec. Pure function, no I/O.
pub fn size_pump(spec: &PumpSpec) -> SizingResult {
    let p_hyd: Power = constants::rho_water() * constants::g() * m3h(spec.flow_m3h) * m(spec.head_m);
    let hydraulic_power_kw = in_kw(p_hyd);
    let shaft_power_kw = hydraulic_power_kw / ETA_PUMP;
    let suggested_motor_kw = round_to(shaft_power_kw * MOTOR_SAFETY_FACTOR, 1);

    let eta_motor = spec.motor_class.efficiency();
    let annual_energy: Energy = kw(shaft_power_kw / eta_motor) * hours(spec.op_hours as f64);
    let annual_energy_kwh = in_kwh(annual_energy);
    let annual_co2_tons = annual_energy_kwh * CO2_KG_PER_KWH / 1000.0;

    // Savings relative to the lowest accepted class at the same shaft load
    let baseline_kw = shaft_power_kw / MotorClass::Ie2.efficiency();
    let actual_kw = shaft_power_kw / eta_motor;
    let annual_savings_vs_ie2_usd =
        (baseline_kw - actual_kw) * spec.op_hours as f64 * ENERGY_PRICE_USD_PER_KWH;

    let npsh_margin_m = spec.npsha_m - spec.npshr_m;
    let cavitation_risk = npsh_margin_m < CAVITATION_MARGIN_M;

    SizingResult {
        hydraulic_power_kw,
        shaft_power_kw,
        suggested_motor_kw,
        npsh_margin_m,
        cavitation_risk,
        annual_energy_kwh,
        annual_co2_tons,
        annual_savings_vs_ie2_usd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Material, PumpSeries};
    use pd_core::{nearly_equal, Tolerances};

    fn spec(flow: f64, head: f64, class: MotorClass, op_hours: u32) -> PumpSpec {
        PumpSpec::new(
            flow,
            head,
            5.0,
            3.5,
            class,
            Material::Aisi316,
            PumpSeries::EndSuction,
            op_hours,
        )
        .unwrap()
    }

    #[test]
    fn reference_duty_point() {
        // 60 m3/h at 120 m: P_hyd = 60*120*1000*9.81/3.6e6 = 19.62 kW
        let tol = Tolerances::default();
        let result = size_pump(&spec(60.0, 120.0, MotorClass::Ie3, 4500));
        assert!(nearly_equal(result.hydraulic_power_kw, 19.62, tol));
        assert!(nearly_equal(result.shaft_power_kw, 19.62 / 0.74, tol));
        assert_eq!(result.suggested_motor_kw, 30.5);
    }

    #[test]
    fn zero_flow_gives_zero_power() {
        let result = size_pump(&spec(0.0, 120.0, MotorClass::Ie2, 4000));
        assert_eq!(result.hydraulic_power_kw, 0.0);
        assert_eq!(result.shaft_power_kw, 0.0);
        assert_eq!(result.suggested_motor_kw, 0.0);
        assert_eq!(result.annual_energy_kwh, 0.0);
        assert_eq!(result.annual_co2_tons, 0.0);
    }

    #[test]
    fn zero_head_gives_zero_power() {
        let result = size_pump(&spec(60.0, 0.0, MotorClass::Ie2, 4000));
        assert_eq!(result.hydraulic_power_kw, 0.0);
        assert_eq!(result.shaft_power_kw, 0.0);
    }

    #[test]
    fn higher_class_uses_less_energy() {
        let ie2 = size_pump(&spec(60.0, 120.0, MotorClass::Ie2, 4500));
        let ie3 = size_pump(&spec(60.0, 120.0, MotorClass::Ie3, 4500));
        assert!(ie2.annual_energy_kwh > ie3.annual_energy_kwh);
        assert!(ie2.annual_co2_tons > ie3.annual_co2_tons);
    }

    #[test]
    fn savings_are_zero_for_ie2_baseline() {
        let result = size_pump(&spec(60.0, 120.0, MotorClass::Ie2, 4500));
        assert!(result.annual_savings_vs_ie2_usd.abs() < 1e-9);

        let better = size_pump(&spec(60.0, 120.0, MotorClass::Ie5, 4500));
        assert!(better.annual_savings_vs_ie2_usd > 0.0);
    }

    #[test]
    fn npsh_margin_boundary_is_safe() {
        let mut s = spec(50.0, 100.0, MotorClass::Ie2, 4000);
        s.npsha_m = 4.0;
        s.npshr_m = 3.5;
        let result = size_pump(&s);
        assert!((result.npsh_margin_m - 0.5).abs() < 1e-12);
        assert!(!result.cavitation_risk);

        s.npsha_m = 3.99;
        assert!(size_pump(&s).cavitation_risk);
    }

    #[test]
    fn negative_margin_is_reported_not_rejected() {
        let mut s = spec(50.0, 100.0, MotorClass::Ie2, 4000);
        s.npsha_m = 2.0;
        s.npshr_m = 3.5;
        let result = size_pump(&s);
        assert!((result.npsh_margin_m + 1.5).abs() < 1e-12);
        assert!(result.cavitation_risk);
    }
}
