//! pd-hydraulics: pump sizing and characteristic-curve models.
//!
//! Everything here is a closed-form evaluation over a validated
//! [`PumpSpec`]: no I/O, no state, deterministic for a given input.

pub mod curve;
pub mod error;
pub mod sizing;
pub mod spec;

pub use curve::{characteristic_curve, CurveData, CURVE_SAMPLES};
pub use error::{HydraulicsError, HydraulicsResult};
pub use sizing::{size_pump, SizingResult};
pub use spec::{Material, MotorClass, PumpSeries, PumpSpec};
