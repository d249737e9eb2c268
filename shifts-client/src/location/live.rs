//! Location provider backed by a platform position source.

use async_trait::async_trait;
use shifts_types::Coordinates;
use std::sync::{Mutex, PoisonError};
use tokio::time::Instant;

use super::{LocationError, LocationOptions, LocationProvider};

/// The platform capability that actually produces fixes.
///
/// Implemented by the embedding application (GPS, OS location service).
/// May prompt the user for permission.
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Request one fresh fix.
    async fn request_fix(&self, high_accuracy: bool) -> Result<Coordinates, LocationError>;
}

#[derive(Debug, Clone, Copy)]
struct CachedFix {
    coordinates: Coordinates,
    taken_at: Instant,
}

/// Provider that asks a [`PositionSource`] for a fix.
///
/// A pending request is abandoned after `options.timeout`. A fix younger
/// than `options.max_cached_age` is reused without asking the source.
#[derive(Debug)]
pub struct LiveLocationProvider<S> {
    source: S,
    options: LocationOptions,
    last_fix: Mutex<Option<CachedFix>>,
}

impl<S: PositionSource> LiveLocationProvider<S> {
    /// Wrap `source` with the given options.
    pub fn new(source: S, options: LocationOptions) -> Self {
        Self {
            source,
            options,
            last_fix: Mutex::new(None),
        }
    }

    /// The options in use.
    pub fn options(&self) -> &LocationOptions {
        &self.options
    }

    /// Get a reference to the underlying source (for testing).
    pub fn source(&self) -> &S {
        &self.source
    }

    fn cached(&self) -> Option<Coordinates> {
        let last = *self.last_fix.lock().unwrap_or_else(PoisonError::into_inner);
        last.filter(|fix| fix.taken_at.elapsed() < self.options.max_cached_age)
            .map(|fix| fix.coordinates)
    }

    fn remember(&self, coordinates: Coordinates) {
        *self.last_fix.lock().unwrap_or_else(PoisonError::into_inner) = Some(CachedFix {
            coordinates,
            taken_at: Instant::now(),
        });
    }
}

#[async_trait]
impl<S: PositionSource> LocationProvider for LiveLocationProvider<S> {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        if let Some(coordinates) = self.cached() {
            tracing::debug!(%coordinates, "using cached location fix");
            return Ok(coordinates);
        }

        let request = self.source.request_fix(self.options.high_accuracy);
        match tokio::time::timeout(self.options.timeout, request).await {
            Ok(Ok(coordinates)) => {
                self.remember(coordinates);
                Ok(coordinates)
            }
            Ok(Err(e)) => {
                tracing::debug!("location fix failed: {}", e);
                Err(e)
            }
            Err(_) => Err(LocationError::Timeout(self.options.timeout)),
        }
    }
}
