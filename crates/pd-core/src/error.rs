use thiserror::Error;

pub type PdResult<T> = Result<T, PdError>;

/// Foundation errors shared by the calculation crates.
#[derive(Error, Debug)]
pub enum PdError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value out of range: {what} (value={value}, min={min}, max={max})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
