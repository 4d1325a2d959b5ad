//! Shared application service layer for pumpdoc.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing dashboard evaluation and remote report generation.

pub mod dashboard;
pub mod error;
pub mod report_service;

// Re-export key types for convenience
pub use dashboard::{evaluate, DashboardState};
pub use error::{AppError, AppResult};
pub use report_service::{generate_report, ReportRequest};

// Frontends talk in these domain types; re-export so they rarely need the
// backend crates directly.
pub use pd_hydraulics::{
    characteristic_curve, size_pump, CurveData, Material, MotorClass, PumpSeries, PumpSpec,
    SizingResult,
};
pub use pd_report::{build_report_prompt, GeneratedReport, ReportError, ReportPhase};
