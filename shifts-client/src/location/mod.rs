//! Location providers.
//!
//! The store asks a [`LocationProvider`] for one fix per fetch. Which
//! provider is used is decided when the store is built:
//!
//! - [`FixedCoordinateProvider`] always answers with the same pair
//! - [`LiveLocationProvider`] asks a platform [`PositionSource`], bounded by a
//!   timeout and short-circuited by a recent cached fix
//! - [`MockLocationProvider`] replays queued results in tests

mod live;
mod mock;

pub use live::{LiveLocationProvider, PositionSource};
pub use mock::{MockLocationProvider, MockPositionSource};

use async_trait::async_trait;
use shifts_core::FetchError;
use shifts_types::Coordinates;
use std::time::Duration;
use thiserror::Error;

/// Search position used when no live location is configured.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates::new(55.7558, 37.6173);

/// Location errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Permission denied or no fix available.
    #[error("location unavailable: {0}")]
    Unavailable(String),

    /// No fix within the configured timeout.
    #[error("location request timed out after {0:?}")]
    Timeout(Duration),
}

impl From<LocationError> for FetchError {
    fn from(e: LocationError) -> Self {
        match e {
            LocationError::Unavailable(msg) => FetchError::LocationUnavailable(msg),
            LocationError::Timeout(after) => FetchError::LocationTimeout(after),
        }
    }
}

/// Options passed to the platform location API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationOptions {
    /// Ask for a high-accuracy (GPS) fix.
    pub high_accuracy: bool,
    /// How long a request may stay pending.
    pub timeout: Duration,
    /// A cached fix younger than this is returned instead of a new request.
    pub max_cached_age: Duration,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(15),
            max_cached_age: Duration::from_secs(10),
        }
    }
}

impl LocationOptions {
    /// Set high accuracy.
    pub fn with_high_accuracy(mut self, high_accuracy: bool) -> Self {
        self.high_accuracy = high_accuracy;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum cached fix age.
    pub fn with_max_cached_age(mut self, max_cached_age: Duration) -> Self {
        self.max_cached_age = max_cached_age;
        self
    }
}

/// Source of the caller's current position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolve a single fix. No retries.
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Provider that always answers with the same coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCoordinateProvider {
    coordinates: Coordinates,
}

impl FixedCoordinateProvider {
    /// Always answer with `coordinates`.
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }

    /// The fixed coordinates.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

impl Default for FixedCoordinateProvider {
    fn default() -> Self {
        Self::new(DEFAULT_COORDINATES)
    }
}

#[async_trait]
impl LocationProvider for FixedCoordinateProvider {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_provider_returns_its_coordinates() {
        let provider = FixedCoordinateProvider::new(Coordinates::new(1.5, -2.5));
        assert_eq!(
            provider.current_position().await.unwrap(),
            Coordinates::new(1.5, -2.5)
        );
    }

    #[tokio::test]
    async fn default_fixed_provider_uses_default_coordinates() {
        let provider = FixedCoordinateProvider::default();
        assert_eq!(provider.current_position().await.unwrap(), DEFAULT_COORDINATES);
    }

    #[test]
    fn default_options_match_platform_request() {
        let options = LocationOptions::default();
        assert!(options.high_accuracy);
        assert_eq!(options.timeout, Duration::from_secs(15));
        assert_eq!(options.max_cached_age, Duration::from_secs(10));
    }

    #[test]
    fn location_errors_map_to_fetch_taxonomy() {
        assert_eq!(
            FetchError::from(LocationError::Timeout(Duration::from_secs(15))),
            FetchError::LocationTimeout(Duration::from_secs(15))
        );
        assert_eq!(
            FetchError::from(LocationError::Unavailable("denied".into())),
            FetchError::LocationUnavailable("denied".into())
        );
    }
}
