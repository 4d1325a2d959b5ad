//! Error taxonomy for report generation.
//!
//! None of these are fatal to a session: the frontends surface them
//! inline and the numeric dashboard stays usable.

use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("API credential is missing")]
    MissingCredential,

    #[error("No text-generation model is available")]
    NoModelAvailable,

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Remote call failed: {message}")]
    RemoteCallFailed { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_presentable_inline() {
        assert_eq!(
            ReportError::MissingCredential.to_string(),
            "API credential is missing"
        );
        let err = ReportError::RemoteCallFailed {
            message: "401 Unauthorized".to_string(),
        };
        assert!(err.to_string().contains("401 Unauthorized"));
    }
}
