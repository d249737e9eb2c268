//! Response envelope for the shifts endpoint.
//!
//! The server wraps every list in `{ "data": [...], "status": <number> }`.
//! The envelope is decoded as a unit: a body that does not match this shape
//! is a decode failure, never a partial list.

use serde::{Deserialize, Serialize};

use crate::error::ShiftsError;
use crate::record::ShiftRecord;

/// The `{ data, status }` wrapper around a shift list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftsEnvelope {
    /// Shifts in server order.
    pub data: Vec<ShiftRecord>,
    /// Application-level status code echoed by the server.
    pub status: i64,
}

impl ShiftsEnvelope {
    /// Wrap a list of records.
    pub fn new(data: Vec<ShiftRecord>, status: i64) -> Self {
        Self { data, status }
    }

    /// Decode an envelope from a JSON body.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ShiftsError> {
        serde_json::from_slice(bytes).map_err(ShiftsError::Decode)
    }

    /// Encode the envelope as JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, ShiftsError> {
        serde_json::to_vec(self).map_err(ShiftsError::Encode)
    }

    /// Consume the envelope, keeping the records verbatim.
    pub fn into_records(self) -> Vec<ShiftRecord> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_empty_list() {
        let env = ShiftsEnvelope::from_json(br#"{"data": [], "status": 200}"#).unwrap();
        assert!(env.data.is_empty());
        assert_eq!(env.status, 200);
    }

    #[test]
    fn rejects_body_without_data() {
        let err = ShiftsEnvelope::from_json(br#"{"status": 200}"#).unwrap_err();
        assert!(matches!(err, ShiftsError::Decode(_)));
    }

    #[test]
    fn rejects_non_json_body() {
        let err = ShiftsEnvelope::from_json(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(err.to_string().starts_with("decode failed"));
    }

    #[test]
    fn rejects_malformed_record_instead_of_dropping_it() {
        let body = br#"{"data": [{"id": "1"}], "status": 200}"#;
        assert!(ShiftsEnvelope::from_json(body).is_err());
    }
}
