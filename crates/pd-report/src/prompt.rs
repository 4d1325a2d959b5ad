//! Compliance-report prompt template.

use pd_hydraulics::{PumpSpec, SizingResult};

/// Build the natural-language prompt sent to the text-generation service.
///
/// Purely a formatting concern: values are already validated upstream and
/// are embedded rounded to one or two decimals.
pub fn build_report_prompt(spec: &PumpSpec, sizing: &SizingResult) -> String {
    format!(
        "You are a senior mechanical design engineer. Prepare a technical \
         declaration for the following pump installation:\n\
         - Pump: {series} series, {material} construction, rated \
         {flow:.1} m3/h at {head:.1} m head.\n\
         - NPSH: NPSHa = {npsha:.2} m, NPSHr = {npshr:.2} m, margin = \
         {margin:.2} m ({npsh_label}).\n\
         - Motor: {class} efficiency class; shaft power {shaft:.2} kW, \
         suggested motor rating {motor:.1} kW.\n\
         - Energy: {energy:.0} kWh per year over {hours} operating hours.\n\
         - Carbon: {co2:.2} tonnes of operational CO2 per year.\n\
         \n\
         Tasks:\n\
         1. Analyse the cavitation safety of this installation in \
         technical language.\n\
         2. Highlight the impact of the {class} motor class on operating \
         cost.\n\
         3. Write a professional closing paragraph confirming conformity \
         with the EU 2026 Ecodesign regulation.\n",
        series = spec.series,
        material = spec.material,
        flow = spec.flow_m3h,
        head = spec.head_m,
        npsha = spec.npsha_m,
        npshr = spec.npshr_m,
        margin = sizing.npsh_margin_m,
        npsh_label = sizing.npsh_label(),
        class = spec.motor_class,
        shaft = sizing.shaft_power_kw,
        motor = sizing.suggested_motor_kw,
        energy = sizing.annual_energy_kwh,
        hours = spec.op_hours,
        co2 = sizing.annual_co2_tons,
    )
}
