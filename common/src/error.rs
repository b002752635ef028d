//! Error types for the console workflows.

use thiserror::Error;

/// Failure of a single GET against the shim server.
///
/// Only the transport-reported status is interpreted; response bodies of
/// failed requests are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// No response arrived (connection refused, CORS, aborted...).
    #[error("request failed: {0}")]
    Network(String),
    /// A success response whose body could not be decoded.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status of the failure, `0` when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            Self::Status(status) => *status,
            Self::Network(_) => 0,
            Self::Decode(_) => 200,
        }
    }
}

/// Raised while inspecting or focusing a popup window.
///
/// Never leaves the popup watcher: a failed probe counts as "still open".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("popup probe failed: {0}")]
pub struct ProbeError(pub String);
