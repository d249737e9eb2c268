//! Mock shifts endpoint for testing.
//!
//! Allows queueing replies and capturing requested positions for verification.
//! A reply can be gated so the test decides when it is delivered, which is
//! how overlapping fetches are settled in a chosen order.

use super::{ApiError, ShiftsApi};
use async_trait::async_trait;
use shifts_types::{Coordinates, ShiftRecord};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::oneshot;

type Reply = Result<Vec<ShiftRecord>, ApiError>;

#[derive(Debug)]
struct QueuedReply {
    reply: Reply,
    gate: Option<oneshot::Receiver<()>>,
}

/// Mock shifts endpoint for testing.
///
/// Clones share state, so a test can keep one handle while the store owns another.
#[derive(Debug, Default)]
pub struct MockShiftsApi {
    inner: Arc<Mutex<MockShiftsApiInner>>,
}

#[derive(Debug, Default)]
struct MockShiftsApiInner {
    replies: VecDeque<QueuedReply>,
    requests: Vec<Coordinates>,
}

/// Releases a gated reply.
#[derive(Debug)]
pub struct MockGate {
    tx: oneshot::Sender<()>,
}

impl MockGate {
    /// Let the gated reply through.
    pub fn open(self) {
        let _ = self.tx.send(());
    }
}

impl MockShiftsApi {
    /// Create a new mock endpoint with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockShiftsApiInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a successful reply.
    pub fn queue_shifts(&self, shifts: Vec<ShiftRecord>) {
        self.lock().replies.push_back(QueuedReply {
            reply: Ok(shifts),
            gate: None,
        });
    }

    /// Queue a failing reply.
    pub fn queue_error(&self, error: ApiError) {
        self.lock().replies.push_back(QueuedReply {
            reply: Err(error),
            gate: None,
        });
    }

    /// Queue a reply that is held back until the returned gate is opened.
    ///
    /// Dropping the gate releases the reply as well.
    pub fn queue_gated(&self, reply: Result<Vec<ShiftRecord>, ApiError>) -> MockGate {
        let (tx, rx) = oneshot::channel();
        self.lock().replies.push_back(QueuedReply {
            reply,
            gate: Some(rx),
        });
        MockGate { tx }
    }

    /// Positions of every request made so far.
    pub fn requests(&self) -> Vec<Coordinates> {
        self.lock().requests.clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Clear all state (queue, recorded requests).
    pub fn reset(&self) {
        *self.lock() = MockShiftsApiInner::default();
    }
}

impl Clone for MockShiftsApi {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl ShiftsApi for MockShiftsApi {
    async fn fetch_shifts(&self, at: Coordinates) -> Result<Vec<ShiftRecord>, ApiError> {
        let queued = {
            let mut inner = self.lock();
            inner.requests.push(at);
            inner.replies.pop_front()
        };

        let Some(QueuedReply { reply, gate }) = queued else {
            return Err(ApiError::Network("no mock reply queued".into()));
        };

        if let Some(gate) = gate {
            // A dropped gate releases too.
            let _ = gate.await;
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shifts_types::ShiftId;

    fn record(id: &str) -> ShiftRecord {
        ShiftRecord {
            id: ShiftId::new(id),
            coordinates: Coordinates::new(55.75, 37.61),
            address: "Street".into(),
            company_name: "Acme".into(),
            logo: None,
            date_start_by_city: "12.05.2025".into(),
            time_start_by_city: "09:00".into(),
            time_end_by_city: "18:00".into(),
            current_workers: 0,
            plan_workers: 1,
            work_types: vec![],
            price_worker: 1000.0,
            bonus_price_worker: 0.0,
            customer_feedbacks_count: "0".into(),
            customer_rating: None,
            is_promotion_enabled: false,
        }
    }

    const HERE: Coordinates = Coordinates::new(55.75, 37.61);

    #[tokio::test]
    async fn replies_in_queue_order() {
        let api = MockShiftsApi::new();
        api.queue_shifts(vec![record("a")]);
        api.queue_error(ApiError::Status(503));

        let first = api.fetch_shifts(HERE).await.unwrap();
        assert_eq!(first[0].id, ShiftId::new("a"));

        let second = api.fetch_shifts(HERE).await.unwrap_err();
        assert!(matches!(second, ApiError::Status(503)));
    }

    #[tokio::test]
    async fn empty_queue_is_network_error() {
        let api = MockShiftsApi::new();
        let err = api.fetch_shifts(HERE).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn records_requests() {
        let api = MockShiftsApi::new();
        let _ = api.fetch_shifts(HERE).await;
        let _ = api.fetch_shifts(Coordinates::new(1.0, 2.0)).await;

        assert_eq!(api.request_count(), 2);
        assert_eq!(api.requests()[1], Coordinates::new(1.0, 2.0));
    }

    #[tokio::test]
    async fn gated_reply_waits_for_gate() {
        let api = MockShiftsApi::new();
        let gate = api.queue_gated(Ok(vec![record("late")]));

        let handle = {
            let api = api.clone();
            tokio::spawn(async move { api.fetch_shifts(HERE).await })
        };
        tokio::task::yield_now().await;
        assert!(!handle.is_finished());

        gate.open();
        let shifts = handle.await.unwrap().unwrap();
        assert_eq!(shifts[0].id, ShiftId::new("late"));
    }

    #[tokio::test]
    async fn clone_shares_state_and_reset_clears() {
        let api = MockShiftsApi::new();
        let other = api.clone();
        other.queue_shifts(vec![]);
        let _ = api.fetch_shifts(HERE).await;
        assert_eq!(other.request_count(), 1);

        api.reset();
        assert_eq!(other.request_count(), 0);
    }
}
