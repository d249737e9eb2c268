//! ShiftsStore - the owner of the shift list and its fetch lifecycle.
//!
//! # Architecture
//!
//! ShiftsStore uses the pure fetch machine (from shifts-core) for state logic
//! and interprets its actions to perform the actual I/O.
//!
//! ```text
//! View → ShiftsStore → LocationProvider
//!            ↓       → ShiftsApi → Network
//!      shifts-core (pure state machine)
//! ```
//!
//! Every state change is applied and published under one lock, so
//! subscribers receive snapshots in the order they happened and never see a
//! half-applied update.
//!
//! # Example
//!
//! ```ignore
//! let api = MockShiftsApi::new();
//! api.queue_shifts(records);
//! let store = ShiftsStore::new(api, FixedCoordinateProvider::default(), StoreConfig::default());
//!
//! let mut updates = store.subscribe();
//! store.fetch_shifts().await;
//! ```

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shifts_core::{Action, ErrorReporting, Event, FetchMachine, StoreState};
use shifts_types::{Coordinates, ShiftRecord};
use tokio::sync::mpsc;

use crate::api::ShiftsApi;
use crate::location::LocationProvider;

/// Configuration for ShiftsStore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// How failures are worded in the published `error`.
    pub error_reporting: ErrorReporting,
}

impl StoreConfig {
    /// Set the error reporting mode.
    pub fn with_error_reporting(mut self, error_reporting: ErrorReporting) -> Self {
        self.error_reporting = error_reporting;
        self
    }
}

struct Shared {
    machine: FetchMachine,
    subscribers: Vec<mpsc::UnboundedSender<StoreState>>,
}

struct StoreInner<A, L> {
    api: A,
    location: L,
    shared: Mutex<Shared>,
}

/// The shifts store.
///
/// A cheap handle: clones share the same state. Create one per application
/// and hand it to whatever renders the list.
pub struct ShiftsStore<A, L> {
    inner: Arc<StoreInner<A, L>>,
}

impl<A, L> Clone for ShiftsStore<A, L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, L> ShiftsStore<A, L>
where
    A: ShiftsApi + 'static,
    L: LocationProvider + 'static,
{
    /// Create a store with an empty list.
    pub fn new(api: A, location: L, config: StoreConfig) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                api,
                location,
                shared: Mutex::new(Shared {
                    machine: FetchMachine::new(config.error_reporting),
                    subscribers: Vec::new(),
                }),
            }),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> StoreState {
        self.inner.lock().machine.state().clone()
    }

    /// Shifts from the latest successful fetch.
    pub fn items(&self) -> Arc<[ShiftRecord]> {
        Arc::clone(&self.inner.lock().machine.state().items)
    }

    /// True while the latest fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.lock().machine.state().loading
    }

    /// Message of the latest failure, if the latest fetch failed.
    pub fn error(&self) -> Option<String> {
        self.inner.lock().machine.state().error.clone()
    }

    /// Last resolved location.
    pub fn location(&self) -> Option<Coordinates> {
        self.inner.lock().machine.state().location
    }

    /// Receive every published state, starting with the current one.
    ///
    /// Snapshots arrive in publication order; none are skipped or merged.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<StoreState> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut shared = self.inner.lock();
        // Receiver is alive, cannot fail.
        let _ = tx.send(shared.machine.state().clone());
        shared.subscribers.push(tx);
        rx
    }

    /// Fetch the shift list.
    ///
    /// `loading = true` and `error = None` are published before this method
    /// returns. The returned future resolves the location, performs exactly
    /// one request and settles the state. It never fails: failures are
    /// published through `error`.
    ///
    /// Overlapping calls are allowed; only the most recently issued one may
    /// settle the state.
    ///
    /// The work runs on its own task. Dropping the returned future does not
    /// cancel it, it only stops waiting for it.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn fetch_shifts(&self) -> impl Future<Output = ()> + Send + 'static {
        let actions = self.inner.apply(Event::FetchRequested);
        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move { inner.drive(actions).await });
        async move {
            if let Err(e) = task.await {
                tracing::warn!("fetch task did not complete: {}", e);
            }
        }
    }

    /// Get a reference to the endpoint client (for testing).
    pub fn api(&self) -> &A {
        &self.inner.api
    }

    /// Get a reference to the location provider (for testing).
    pub fn location_provider(&self) -> &L {
        &self.inner.location
    }
}

impl<A, L> StoreInner<A, L>
where
    A: ShiftsApi,
    L: LocationProvider,
{
    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one event through the machine and publish if it asks to.
    ///
    /// Returns the remaining actions for the caller to execute.
    fn apply(&self, event: Event) -> Vec<Action> {
        let mut shared = self.lock();
        let (machine, actions) = shared.machine.clone().on_event(event);
        shared.machine = machine;

        if actions.contains(&Action::Publish) {
            let snapshot = shared.machine.state().clone();
            shared
                .subscribers
                .retain(|tx| tx.send(snapshot.clone()).is_ok());
        }

        actions
            .into_iter()
            .filter(|action| !matches!(action, Action::Publish))
            .collect()
    }

    async fn drive(&self, actions: Vec<Action>) {
        let mut queue = VecDeque::from(actions);

        while let Some(action) = queue.pop_front() {
            match action {
                Action::ResolveLocation { seq } => {
                    tracing::debug!(%seq, "fetch started, resolving location");
                    let event = match self.location.current_position().await {
                        Ok(coordinates) => Event::LocationResolved { seq, coordinates },
                        Err(e) => Event::FetchFailed {
                            seq,
                            error: e.into(),
                        },
                    };
                    queue.extend(self.apply(event));
                }
                Action::RequestShifts { seq, coordinates } => {
                    tracing::debug!(%seq, %coordinates, "requesting shifts");
                    let event = match self.api.fetch_shifts(coordinates).await {
                        Ok(items) => {
                            tracing::debug!(%seq, count = items.len(), "shifts received");
                            Event::ShiftsReceived { seq, items }
                        }
                        Err(e) => Event::FetchFailed {
                            seq,
                            error: e.into(),
                        },
                    };
                    queue.extend(self.apply(event));
                }
                Action::ReportFailure { seq, error } => {
                    tracing::warn!(%seq, "Fetch shifts error: {}", error);
                }
                Action::DiscardStale { seq } => {
                    tracing::debug!(%seq, "discarding result of superseded fetch");
                }
                Action::Publish => {}
            }
        }
    }
}
