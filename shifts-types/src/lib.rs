//! # shifts-types
//!
//! Data model for Handswork shift listings.
//!
//! This crate provides the foundational types used across all shifts crates:
//! - [`ShiftId`], [`Coordinates`] - Identity and position types
//! - [`ShiftRecord`], [`WorkType`] - A single shift posting as received from the server
//! - [`ShiftsEnvelope`] - The `{ data, status }` response wrapper
//! - [`ShiftsError`] - Decode errors
//! - [`display`] - Stateless projections used by rendering layers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod display;
mod envelope;
mod error;
mod ids;
mod record;

pub use envelope::ShiftsEnvelope;
pub use error::ShiftsError;
pub use ids::{Coordinates, ShiftId};
pub use record::{ShiftRecord, WorkType};
