//! # shifts-core
//!
//! Pure logic for shift listings (no I/O, instant tests).
//!
//! This crate implements the fetch state machine and the list rendering
//! contract without any network, location or UI access.
//!
//! ## Design Philosophy
//!
//! All modules in this crate are **pure** - they take input and produce output
//! without side effects. The state machine consumes [`Event`]s and produces a
//! new state plus [`Action`]s; `shifts-client` performs the I/O those actions
//! ask for and feeds the outcome back as the next event.
//!
//! The list contract ([`ShiftListView`]) is a read-only projection of one
//! published [`StoreState`] snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod list;
pub mod state;
pub mod window;

pub use error::FetchError;
pub use list::{ListPresentation, NavigationIntent, ShiftListView, ShiftRow};
pub use state::{
    Action, ErrorReporting, Event, FetchMachine, FetchPhase, RequestSeq, StoreState,
    GENERIC_FETCH_ERROR,
};
pub use window::{Viewport, WindowConfig, DEFAULT_INITIAL_NUM_TO_RENDER};
