//! Dashboard evaluation: one spec in, everything the frontends display out.

use pd_hydraulics::{characteristic_curve, size_pump, CurveData, PumpSpec, SizingResult};
use serde::{Deserialize, Serialize};

/// Everything derived from one spec evaluation.
///
/// Rebuilt fresh on every input change; nothing here is cached or stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    pub spec: PumpSpec,
    pub sizing: SizingResult,
    pub curve: CurveData,
}

/// Evaluate the full dashboard for a validated spec.
pub fn evaluate(spec: &PumpSpec) -> DashboardState {
    let sizing = size_pump(spec);
    let curve = characteristic_curve(spec.flow_m3h, spec.head_m);
    DashboardState {
        spec: spec.clone(),
        sizing,
        curve,
    }
}
