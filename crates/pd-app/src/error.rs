//! Error types for the pd-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid pump specification: {0}")]
    Hydraulics(#[from] pd_hydraulics::HydraulicsError),

    #[error(transparent)]
    Report(#[from] pd_report::ReportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pd-app operations.
pub type AppResult<T> = Result<T, AppError>;
