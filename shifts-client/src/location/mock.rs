//! Mock location provider and position source for testing.

use super::{LocationError, LocationProvider, PositionSource};
use async_trait::async_trait;
use shifts_types::Coordinates;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

type Fix = Result<Coordinates, LocationError>;

/// Mock location provider for testing.
///
/// Replays queued results in order; fails with `Unavailable` once the queue
/// is empty. Clones share state.
#[derive(Debug, Default)]
pub struct MockLocationProvider {
    inner: Arc<Mutex<MockLocationInner>>,
}

#[derive(Debug, Default)]
struct MockLocationInner {
    results: VecDeque<Fix>,
    calls: usize,
}

impl MockLocationProvider {
    /// Create a provider with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next `current_position()` call.
    pub fn queue_result(&self, result: Result<Coordinates, LocationError>) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .results
            .push_back(result);
    }

    /// Number of `current_position()` calls so far.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).calls
    }
}

impl Clone for MockLocationProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl LocationProvider for MockLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.calls += 1;
        inner
            .results
            .pop_front()
            .unwrap_or_else(|| Err(LocationError::Unavailable("no mock fix queued".into())))
    }
}

/// Mock platform position source for testing [`LiveLocationProvider`](super::LiveLocationProvider).
#[derive(Debug, Default)]
pub struct MockPositionSource {
    inner: Arc<Mutex<MockSourceInner>>,
}

#[derive(Debug, Default)]
struct MockSourceInner {
    fixes: VecDeque<Fix>,
    accuracy_requests: Vec<bool>,
    hang: bool,
}

impl MockPositionSource {
    /// Create a source with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockSourceInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue the result of the next request.
    pub fn queue_fix(&self, fix: Result<Coordinates, LocationError>) {
        self.lock().fixes.push_back(fix);
    }

    /// Make every following request stay pending forever.
    pub fn hang(&self) {
        self.lock().hang = true;
    }

    /// Number of requests so far.
    pub fn request_count(&self) -> usize {
        self.lock().accuracy_requests.len()
    }

    /// The `high_accuracy` flag of every request so far.
    pub fn accuracy_requests(&self) -> Vec<bool> {
        self.lock().accuracy_requests.clone()
    }
}

impl Clone for MockPositionSource {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PositionSource for MockPositionSource {
    async fn request_fix(&self, high_accuracy: bool) -> Result<Coordinates, LocationError> {
        let next = {
            let mut inner = self.lock();
            inner.accuracy_requests.push(high_accuracy);
            if inner.hang {
                None
            } else {
                Some(inner.fixes.pop_front().unwrap_or_else(|| {
                    Err(LocationError::Unavailable("no mock fix queued".into()))
                }))
            }
        };

        match next {
            Some(fix) => fix,
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn provider_replays_queue_then_fails() {
        let provider = MockLocationProvider::new();
        provider.queue_result(Ok(Coordinates::new(1.0, 2.0)));

        assert_eq!(
            provider.current_position().await.unwrap(),
            Coordinates::new(1.0, 2.0)
        );
        assert!(matches!(
            provider.current_position().await,
            Err(LocationError::Unavailable(_))
        ));
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn source_records_accuracy_flags() {
        let source = MockPositionSource::new();
        source.queue_fix(Ok(Coordinates::new(1.0, 2.0)));
        let _ = source.request_fix(true).await;
        let _ = source.request_fix(false).await;
        assert_eq!(source.accuracy_requests(), vec![true, false]);
    }
}
