//! Model discovery fallback logic, kept separate from the HTTP client so
//! the "which model got selected" decision is testable on its own.

use crate::error::ReportError;

/// Ordered preference list; the first identifier found in the service's
/// available set wins.
pub const PREFERRED_MODELS: &[&str] = &[
    "models/gemini-1.5-flash",
    "models/gemini-1.5-pro",
    "models/gemini-pro",
];

/// Single hardcoded model retried once when the selected model's call
/// fails at the transport level.
pub const RETRY_FALLBACK_MODEL: &str = "models/gemini-pro";

/// Pick a model from the service's available set.
///
/// Preference order first; otherwise the first available identifier in
/// whatever order the service returned it (callers must not rely on that
/// ordering). An empty set is `NoModelAvailable`.
pub fn select_model(available: &[String]) -> Result<&str, ReportError> {
    if available.is_empty() {
        return Err(ReportError::NoModelAvailable);
    }
    for preferred in PREFERRED_MODELS {
        if let Some(found) = available.iter().find(|name| name.as_str() == *preferred) {
            return Ok(found.as_str());
        }
    }
    Ok(available[0].as_str())
}

/// Progress through one report-generation request.
///
/// `Authenticating -> DiscoveringModels -> Generating`, then the call
/// resolves to a result. Frontends use this for their busy indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPhase {
    Authenticating,
    DiscoveringModels,
    Generating,
}

impl ReportPhase {
    pub fn label(self) -> &'static str {
        match self {
            ReportPhase::Authenticating => "Authenticating",
            ReportPhase::DiscoveringModels => "Discovering models",
            ReportPhase::Generating => "Generating report",
        }
    }
}
