//! Error types for the Lara client boundary

use thiserror::Error;

use crate::StatusCode;

/// Errors a [`LaraClient`](crate::LaraClient) can report to its caller
///
/// Every failure to reach the device (socket errors, a connection closed by
/// the peer, a reply that cannot be decoded, a timeout) is folded into
/// [`ClientError::TransportUnavailable`]. Callers that only care about
/// "is the device reachable" match on that one variant.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The device could not be reached or did not answer usefully
    #[error("Transport unavailable: {0}")]
    TransportUnavailable(String),

    /// A command was issued before the client finished initialization
    #[error("Client not initialized")]
    NotInitialized,

    /// The device answered but refused the command
    #[error("Command rejected by device: status {0}")]
    Rejected(StatusCode),
}

impl ClientError {
    /// Socket-level failure
    pub fn io(error: std::io::Error) -> Self {
        Self::TransportUnavailable(format!("I/O error: {}", error))
    }

    /// The peer closed the connection
    pub fn connection_closed(reason: impl Into<String>) -> Self {
        Self::TransportUnavailable(format!("connection closed: {}", reason.into()))
    }

    /// No reply within the configured timeout
    pub fn timeout(after: std::time::Duration) -> Self {
        Self::TransportUnavailable(format!("timed out after {:?}", after))
    }

    /// The reply could not be decoded
    pub fn invalid_response(detail: impl Into<String>) -> Self {
        Self::TransportUnavailable(format!("invalid response: {}", detail.into()))
    }

    /// Whether this error means the device is unreachable
    pub fn is_transport_unavailable(&self) -> bool {
        matches!(self, Self::TransportUnavailable(_))
    }
}

impl From<std::io::Error> for ClientError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error)
    }
}

/// Type alias for results returned by client operations
pub type Result<T> = std::result::Result<T, ClientError>;
