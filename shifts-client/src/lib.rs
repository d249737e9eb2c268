//! # shifts-client
//!
//! Store and I/O layer for Handswork shift listings.
//!
//! This is the library a view layer talks to. It owns the list of shifts and
//! its loading/error flags, fetches from the shifts endpoint, and asks a
//! location provider where to search.
//!
//! ## Features
//!
//! - **Store**: [`ShiftsStore`] drives the pure `shifts-core` state machine and
//!   publishes every state change, in order, to subscribers
//! - **API Abstraction**: Pluggable endpoint client ([`HttpShiftsApi`], [`MockShiftsApi`])
//! - **Location Abstraction**: [`FixedCoordinateProvider`], [`LiveLocationProvider`],
//!   [`MockLocationProvider`]
//! - **List Binding**: [`ListController`] keeps a windowed list view in step with the
//!   store and forwards row activations to a [`Navigator`]
//!
//! ## Example
//!
//! ```ignore
//! use shifts_client::{ApiConfig, FixedCoordinateProvider, HttpShiftsApi, ShiftsStore, StoreConfig};
//!
//! let api = HttpShiftsApi::new(ApiConfig::default())?;
//! let store = ShiftsStore::new(api, FixedCoordinateProvider::default(), StoreConfig::default());
//!
//! store.fetch_shifts().await;
//! println!("{} shifts", store.snapshot().items.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod controller;
pub mod location;
pub mod store;

pub use api::{
    ApiConfig, ApiError, HttpShiftsApi, MockGate, MockShiftsApi, ShiftsApi, DEFAULT_BASE_URL,
    SHIFTS_PATH,
};
pub use controller::{ListController, Navigator};
pub use location::{
    FixedCoordinateProvider, LiveLocationProvider, LocationError, LocationOptions,
    LocationProvider, MockLocationProvider, MockPositionSource, PositionSource,
    DEFAULT_COORDINATES,
};
pub use store::{ShiftsStore, StoreConfig};
