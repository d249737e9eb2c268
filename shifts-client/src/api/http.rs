//! HTTP implementation of [`ShiftsApi`] on top of reqwest.

use async_trait::async_trait;
use shifts_types::{Coordinates, ShiftRecord, ShiftsEnvelope};

use super::{ApiConfig, ApiError, ShiftsApi};

/// Client for the live shifts endpoint.
#[derive(Debug, Clone)]
pub struct HttpShiftsApi {
    config: ApiConfig,
    http: reqwest::Client,
}

impl HttpShiftsApi {
    /// Build a client with the configured timeout.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Setup(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// The configuration in use.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait]
impl ShiftsApi for HttpShiftsApi {
    async fn fetch_shifts(&self, at: Coordinates) -> Result<Vec<ShiftRecord>, ApiError> {
        let url = self.config.endpoint();
        let response = self
            .http
            .get(&url)
            .query(&[("latitude", at.latitude), ("longitude", at.longitude)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let envelope =
            ShiftsEnvelope::from_json(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.into_records())
    }
}
