//! Shifts endpoint abstraction.
//!
//! This module provides a pluggable client for the shifts endpoint
//! (HTTP, mock for testing).
//!
//! # Design
//!
//! One operation, one request: `fetch_shifts()` issues a single GET for the
//! given position and classifies the outcome. No retries, no caching.
//!
//! # Example
//!
//! ```ignore
//! let api = MockShiftsApi::new();
//! api.queue_shifts(vec![record]);
//! let shifts = api.fetch_shifts(Coordinates::new(55.75, 37.61)).await?;
//! ```

mod http;
mod mock;

pub use http::HttpShiftsApi;
pub use mock::{MockGate, MockShiftsApi};

use async_trait::async_trait;
use shifts_core::FetchError;
use shifts_types::{Coordinates, ShiftRecord};
use std::time::Duration;
use thiserror::Error;

/// Production host of the shifts endpoint.
pub const DEFAULT_BASE_URL: &str = "https://mobile.handswork.pro";

/// Path of the unauthenticated map-list endpoint.
pub const SHIFTS_PATH: &str = "/api/shifts/map-list-unauthorized";

/// Endpoint errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Body was not a valid envelope.
    #[error("decode failed: {0}")]
    Decode(String),

    /// Request failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The HTTP client could not be built.
    #[error("client setup failed: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if let Some(status) = e.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<ApiError> for FetchError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Status(status) => FetchError::HttpError(status),
            ApiError::Decode(msg) => FetchError::DecodeError(msg),
            other => FetchError::NetworkError(other.to_string()),
        }
    }
}

/// Configuration for [`HttpShiftsApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme and host, without trailing path.
    pub base_url: String,
    /// Upper bound on a whole request, connect to last body byte.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the shifts endpoint, without query.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), SHIFTS_PATH)
    }
}

/// Client for the shifts endpoint.
///
/// Implementations handle the underlying mechanism (HTTP, mock, etc).
#[async_trait]
pub trait ShiftsApi: Send + Sync {
    /// Fetch the shifts around `at`, in server order.
    async fn fetch_shifts(&self, at: Coordinates) -> Result<Vec<ShiftRecord>, ApiError>;
}
