//! # Common Error Types
//!
//! Consolidated error handling for the storefront SDK.
//!
//! Two kinds of remote failure exist (and stay distinguishable for callers):
//! transport failure (network unreachable, malformed body) and application
//! failure (non-2xx status with a service-supplied message). Application
//! failures carry the service's `error` text verbatim when present, or a
//! fixed per-operation fallback. Nothing is retried; the caller decides what
//! to show and stops there.

use thiserror::Error;

/// SDK-wide error type.
///
/// Each variant carries a human-readable message; `Display` yields the text a
/// UI would show directly to the user.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never produced a response (connection refused, timeout, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// Response arrived but its body did not match the expected shape.
    #[error("failed to parse response: {0}")]
    Decode(String),

    /// The service answered with a non-2xx status.
    ///
    /// `message` is the service's `error` field verbatim when the body
    /// carried one, otherwise the operation's fallback string.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Session persistence failure (read/write of the session file).
    #[error("session storage error: {0}")]
    Storage(String),

    /// Client-side input validation failure, raised before any round trip.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenience alias used throughout the SDK.
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Status code of an application failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_service_message_only() {
        let err = ClientError::Api {
            status: 400,
            message: "Сделка не оплачена".to_string(),
        };
        assert_eq!(err.to_string(), "Сделка не оплачена");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn transport_errors_have_no_status() {
        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(err.status(), None);
    }
}
