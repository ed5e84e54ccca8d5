// Monitoring error taxonomy
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MonitorError {
    /// Bad user input, reported before any backend call
    #[error("{0}")]
    Validation(String),

    /// The request failed at the network layer or returned a non-success status
    #[error("monitoring backend unreachable: {0}")]
    Transport(String),

    /// The backend answered but the body was not what we expected
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),

    /// A newer start or stop superseded this request while it was in flight
    #[error("monitoring request was superseded")]
    Cancelled,
}

impl MonitorError {
    pub fn no_target() -> Self {
        Self::Validation("Please select a network to monitor".to_string())
    }
}
