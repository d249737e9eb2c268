//! Fetch state machine for the shifts store.
//!
//! This module provides a pure, side-effect-free state machine for the fetch
//! lifecycle. The machine takes events as input and produces a new state plus
//! a list of actions to execute.
//!
//! The actual I/O (asking for a location fix, calling the shifts endpoint) is
//! performed by shifts-client, not by this module.
//!
//! Every fetch gets a [`RequestSeq`]. Only the most recently issued request
//! may settle the observable state; results of superseded requests are
//! dropped with [`Action::DiscardStale`].

use std::fmt;
use std::sync::Arc;

use shifts_types::{Coordinates, ShiftRecord};

use crate::error::FetchError;

/// Message published for any failed fetch under [`ErrorReporting::Generic`].
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch shifts";

/// Monotonically increasing identifier of one `fetch_shifts()` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Create a sequence number from its raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How failures are worded in the published `error` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorReporting {
    /// Always publish [`GENERIC_FETCH_ERROR`].
    #[default]
    Generic,
    /// Publish the failure's own message.
    Detailed,
}

impl ErrorReporting {
    /// Flatten a failure into the string readers see.
    pub fn message(&self, error: &FetchError) -> String {
        match self {
            Self::Generic => GENERIC_FETCH_ERROR.to_string(),
            Self::Detailed => error.to_string(),
        }
    }
}

/// The observable store state.
///
/// Snapshots are cheap to clone: `items` is shared, never copied.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    /// Shifts from the latest successful fetch, in server order.
    pub items: Arc<[ShiftRecord]>,
    /// True while the most recent fetch is in flight.
    pub loading: bool,
    /// Message of the most recent failure, cleared when a fetch starts.
    pub error: Option<String>,
    /// Last resolved location.
    pub location: Option<Coordinates>,
}

impl StoreState {
    /// Initial state: no items, not loading, no error.
    pub fn new() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            loading: false,
            error: None,
            location: None,
        }
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the latest request stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// No fetch has been issued yet.
    Idle,
    /// The latest request is in flight.
    Fetching {
        /// The request allowed to settle the state.
        latest: RequestSeq,
    },
    /// The latest request produced a new list.
    Succeeded,
    /// The latest request failed.
    Failed,
}

/// Fetch state machine - NO I/O, just state transitions.
#[derive(Debug, Clone)]
pub struct FetchMachine {
    state: StoreState,
    phase: FetchPhase,
    issued: u64,
    reporting: ErrorReporting,
}

impl FetchMachine {
    /// Create a machine in the Idle phase with an empty list.
    pub fn new(reporting: ErrorReporting) -> Self {
        Self {
            state: StoreState::new(),
            phase: FetchPhase::Idle,
            issued: 0,
            reporting,
        }
    }

    /// Current observable state.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// The most recently issued request, if any.
    pub fn latest_request(&self) -> Option<RequestSeq> {
        (self.issued > 0).then(|| RequestSeq::new(self.issued))
    }

    /// Whether `seq` is the request currently allowed to settle the state.
    pub fn is_current(&self, seq: RequestSeq) -> bool {
        matches!(self.phase, FetchPhase::Fetching { latest } if latest == seq)
    }

    /// Process an event and return the new machine plus actions to execute.
    ///
    /// This is a pure function - no side effects. The caller (shifts-client)
    /// is responsible for executing the returned actions.
    pub fn on_event(mut self, event: Event) -> (Self, Vec<Action>) {
        match event {
            Event::FetchRequested => {
                self.issued += 1;
                let seq = RequestSeq::new(self.issued);
                self.phase = FetchPhase::Fetching { latest: seq };
                self.state.loading = true;
                self.state.error = None;
                (self, vec![Action::Publish, Action::ResolveLocation { seq }])
            }

            Event::LocationResolved { seq, coordinates } => {
                let mut actions = Vec::with_capacity(2);
                if self.is_current(seq) {
                    self.state.location = Some(coordinates);
                    actions.push(Action::Publish);
                }
                // A superseded request still makes its one network call;
                // its outcome is discarded when it settles.
                actions.push(Action::RequestShifts { seq, coordinates });
                (self, actions)
            }

            Event::ShiftsReceived { seq, items } => {
                if !self.is_current(seq) {
                    return (self, vec![Action::DiscardStale { seq }]);
                }
                self.state.items = Arc::from(items);
                self.state.error = None;
                self.state.loading = false;
                self.phase = FetchPhase::Succeeded;
                (self, vec![Action::Publish])
            }

            Event::FetchFailed { seq, error } => {
                if !self.is_current(seq) {
                    return (
                        self,
                        vec![Action::ReportFailure { seq, error }, Action::DiscardStale { seq }],
                    );
                }
                // items are left untouched: last-known-good
                self.state.error = Some(self.reporting.message(&error));
                self.state.loading = false;
                self.phase = FetchPhase::Failed;
                (self, vec![Action::ReportFailure { seq, error }, Action::Publish])
            }
        }
    }
}

impl Default for FetchMachine {
    fn default() -> Self {
        Self::new(ErrorReporting::default())
    }
}

/// Events that can occur in the fetch lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A caller invoked `fetch_shifts()`.
    FetchRequested,
    /// The location provider produced a fix.
    LocationResolved {
        /// Request the fix belongs to.
        seq: RequestSeq,
        /// The fix.
        coordinates: Coordinates,
    },
    /// The endpoint returned a well-formed list.
    ShiftsReceived {
        /// Request the response belongs to.
        seq: RequestSeq,
        /// Records in server order.
        items: Vec<ShiftRecord>,
    },
    /// Location or network step failed.
    FetchFailed {
        /// Request that failed.
        seq: RequestSeq,
        /// What went wrong.
        error: FetchError,
    },
}

/// Actions to be executed by shifts-client.
///
/// These are instructions, not side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Notify observers of the new state.
    Publish,
    /// Ask the location provider for a fix.
    ResolveLocation {
        /// Request the fix is for.
        seq: RequestSeq,
    },
    /// Call the shifts endpoint at the given position.
    RequestShifts {
        /// Request being served.
        seq: RequestSeq,
        /// Query position.
        coordinates: Coordinates,
    },
    /// Log a failure on the diagnostic channel.
    ReportFailure {
        /// Request that failed.
        seq: RequestSeq,
        /// Structured failure kind.
        error: FetchError,
    },
    /// A superseded request settled; its outcome was dropped.
    DiscardStale {
        /// The superseded request.
        seq: RequestSeq,
    },
}
