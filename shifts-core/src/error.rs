//! Failure taxonomy of a single fetch.

use std::time::Duration;
use thiserror::Error;

/// Why a fetch did not produce a new list.
///
/// Every variant is terminal for the fetch that raised it. The store keeps
/// the kind only long enough to log it, then publishes a flat message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The platform denied permission or has no fix.
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),

    /// No fix arrived in time.
    #[error("location request timed out after {0:?}")]
    LocationTimeout(Duration),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    HttpError(u16),

    /// The body was not a valid `{ data, status }` envelope.
    #[error("invalid response body: {0}")]
    DecodeError(String),

    /// The request failed before a response arrived.
    #[error("network error: {0}")]
    NetworkError(String),
}

impl FetchError {
    /// Whether the failure happened before any network request was made.
    pub fn is_location_failure(&self) -> bool {
        matches!(self, Self::LocationUnavailable(_) | Self::LocationTimeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_matches_server_wording() {
        assert_eq!(FetchError::HttpError(500).to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn location_failures_are_classified() {
        assert!(FetchError::LocationTimeout(Duration::from_secs(15)).is_location_failure());
        assert!(FetchError::LocationUnavailable("denied".into()).is_location_failure());
        assert!(!FetchError::NetworkError("reset".into()).is_location_failure());
        assert!(!FetchError::DecodeError("eof".into()).is_location_failure());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FetchError>();
    }
}
