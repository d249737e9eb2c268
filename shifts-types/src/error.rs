//! Error types for the shifts data model.

use thiserror::Error;

/// Errors that can occur while decoding or encoding shift data.
#[derive(Debug, Error)]
pub enum ShiftsError {
    /// JSON body did not match the expected shape
    #[error("decode failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// JSON encoding failed
    #[error("encode failed: {0}")]
    Encode(#[source] serde_json::Error),
}
