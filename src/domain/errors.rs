use std::time::Duration;

use thiserror::Error;

/// Terminal failures of a single relay call. Nothing here is retried
/// internally; every failure propagates to the caller as-is.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("delivery endpoint must not be empty")]
    InvalidEndpoint,
    #[error("unsupported intent: {0}")]
    UnsupportedIntent(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("transport failure: {0}")]
    Transport(#[source] anyhow::Error),
    #[error("transmit failure: {0}")]
    Transmit(#[source] anyhow::Error),
    #[error("connection closed by peer before send completed (code {code}: {reason})")]
    PrematureClose { code: u16, reason: String },
    #[error("delivery timed out after {0:?}")]
    Timeout(Duration),
    #[error("receipt rendering failed: {0}")]
    Render(#[source] anyhow::Error),
    #[error("receipt upload failed: {0}")]
    Upload(#[source] anyhow::Error),
}

impl RelayError {
    /// True when the failure is the caller's input, not the remote side.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            RelayError::InvalidEndpoint
                | RelayError::UnsupportedIntent(_)
                | RelayError::MissingField(_)
        )
    }
}
