//! Pump specification types.
//!
//! A [`PumpSpec`] is an immutable snapshot of the operator's inputs,
//! validated once at construction. The sizing functions take it by
//! reference and never mutate it.

use crate::error::{HydraulicsError, HydraulicsResult};
use pd_core::{ensure_finite, PdError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Allowed range for annual operating hours (a year has 8760 of them).
pub const OP_HOURS_MIN: u32 = 1000;
pub const OP_HOURS_MAX: u32 = 8760;

/// IEC 60034-30-1 motor efficiency class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotorClass {
    Ie2,
    Ie3,
    Ie4,
    Ie5,
}

impl MotorClass {
    pub const ALL: [MotorClass; 4] = [
        MotorClass::Ie2,
        MotorClass::Ie3,
        MotorClass::Ie4,
        MotorClass::Ie5,
    ];

    /// Nominal motor efficiency fraction for the class.
    pub fn efficiency(self) -> f64 {
        match self {
            MotorClass::Ie2 => 0.88,
            MotorClass::Ie3 => 0.91,
            MotorClass::Ie4 => 0.94,
            MotorClass::Ie5 => 0.96,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MotorClass::Ie2 => "IE2",
            MotorClass::Ie3 => "IE3",
            MotorClass::Ie4 => "IE4",
            MotorClass::Ie5 => "IE5",
        }
    }
}

impl fmt::Display for MotorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MotorClass {
    type Err = HydraulicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IE2" => Ok(MotorClass::Ie2),
            "IE3" => Ok(MotorClass::Ie3),
            "IE4" => Ok(MotorClass::Ie4),
            "IE5" => Ok(MotorClass::Ie5),
            _ => Err(HydraulicsError::UnknownVariant {
                kind: "motor class",
                value: s.to_string(),
            }),
        }
    }
}

/// Wetted-part material options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Aisi316,
    Aisi304,
    CastIron,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Aisi316, Material::Aisi304, Material::CastIron];

    pub fn label(self) -> &'static str {
        match self {
            Material::Aisi316 => "AISI 316",
            Material::Aisi304 => "AISI 304",
            Material::CastIron => "Cast Iron",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Material {
    type Err = HydraulicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "aisi316" | "316" => Ok(Material::Aisi316),
            "aisi304" | "304" => Ok(Material::Aisi304),
            "castiron" | "iron" => Ok(Material::CastIron),
            _ => Err(HydraulicsError::UnknownVariant {
                kind: "material",
                value: s.to_string(),
            }),
        }
    }
}

/// Pump construction family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PumpSeries {
    EndSuction,
    Inline,
    Multistage,
    SplitCase,
}

impl PumpSeries {
    pub const ALL: [PumpSeries; 4] = [
        PumpSeries::EndSuction,
        PumpSeries::Inline,
        PumpSeries::Multistage,
        PumpSeries::SplitCase,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PumpSeries::EndSuction => "End-suction",
            PumpSeries::Inline => "Inline",
            PumpSeries::Multistage => "Multistage",
            PumpSeries::SplitCase => "Split-case",
        }
    }
}

impl fmt::Display for PumpSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PumpSeries {
    type Err = HydraulicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "endsuction" => Ok(PumpSeries::EndSuction),
            "inline" => Ok(PumpSeries::Inline),
            "multistage" => Ok(PumpSeries::Multistage),
            "splitcase" => Ok(PumpSeries::SplitCase),
            _ => Err(HydraulicsError::UnknownVariant {
                kind: "pump series",
                value: s.to_string(),
            }),
        }
    }
}

/// Operator-entered duty point and selection data for one pump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpSpec {
    /// Duty flow rate (m³/h)
    pub flow_m3h: f64,
    /// Duty head (m of liquid column)
    pub head_m: f64,
    /// Available NPSH at the suction flange (m)
    pub npsha_m: f64,
    /// Required NPSH from the pump curve sheet (m)
    pub npshr_m: f64,
    pub motor_class: MotorClass,
    pub material: Material,
    pub series: PumpSeries,
    /// Annual operating hours
    pub op_hours: u32,
}

impl PumpSpec {
    /// Validate and freeze a specification.
    ///
    /// Zero flow or head is accepted (the duty point may be degenerate,
    /// the sizing then reports zero power); negative hydraulic values and
    /// out-of-range operating hours are rejected.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flow_m3h: f64,
        head_m: f64,
        npsha_m: f64,
        npshr_m: f64,
        motor_class: MotorClass,
        material: Material,
        series: PumpSeries,
        op_hours: u32,
    ) -> HydraulicsResult<Self> {
        for (value, what) in [
            (flow_m3h, "flow (m3/h)"),
            (head_m, "head (m)"),
            (npsha_m, "NPSHa (m)"),
            (npshr_m, "NPSHr (m)"),
        ] {
            if ensure_finite(value, what)? < 0.0 {
                return Err(PdError::OutOfRange {
                    what,
                    value,
                    min: 0.0,
                    max: f64::INFINITY,
                }
                .into());
            }
        }
        if !(OP_HOURS_MIN..=OP_HOURS_MAX).contains(&op_hours) {
            return Err(PdError::OutOfRange {
                what: "annual operating hours",
                value: op_hours as f64,
                min: OP_HOURS_MIN as f64,
                max: OP_HOURS_MAX as f64,
            }
            .into());
        }

        Ok(Self {
            flow_m3h,
            head_m,
            npsha_m,
            npshr_m,
            motor_class,
            material,
            series,
            op_hours,
        })
    }
}

impl Default for PumpSpec {
    /// Reference duty point used to seed the input form.
    fn default() -> Self {
        Self {
            flow_m3h: 50.0,
            head_m: 100.0,
            npsha_m: 5.0,
            npshr_m: 3.5,
            motor_class: MotorClass::Ie2,
            material: Material::Aisi316,
            series: PumpSeries::EndSuction,
            op_hours: 4000,
        }
    }
}
