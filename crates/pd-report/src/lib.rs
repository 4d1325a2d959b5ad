//! pd-report: compliance-report generation against a hosted
//! text-generation service.
//!
//! Split so the decision logic stays testable without a network:
//! - prompt (pure template over spec + sizing figures)
//! - model_select (pure ordered-preference selection + phase type)
//! - client (blocking REST calls, the only I/O in the crate)

pub mod client;
pub mod error;
pub mod model_select;
pub mod prompt;

pub use client::{GeneratedReport, ReportClient, DEFAULT_BASE_URL};
pub use error::{ReportError, ReportResult};
pub use model_select::{select_model, ReportPhase, PREFERRED_MODELS, RETRY_FALLBACK_MODEL};
pub use prompt::build_report_prompt;
