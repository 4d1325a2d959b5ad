use pd_core::PdError;
use thiserror::Error;

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

#[derive(Error, Debug)]
pub enum HydraulicsError {
    /// Numeric validation failure (non-finite or out-of-range input).
    #[error(transparent)]
    Core(#[from] PdError),

    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}
