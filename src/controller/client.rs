use std::time::Duration;

use crate::constellation::{parse_response, Constellation, ConstellationRequest};

use super::error::GenerationError;

/// HTTP client for the external constellation generation service.
pub struct GenerationClient {
    http: reqwest::Client,
    base_url: String,
}

impl GenerationClient {
    /// With `timeout` unset a request may wait indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, GenerationError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /constellation`. Any non-2xx status is a failure; the body of a
    /// successful response must parse as a constellation.
    pub async fn generate(
        &self,
        request: &ConstellationRequest,
    ) -> Result<Constellation, GenerationError> {
        let url = format!("{}/constellation", self.base_url);
        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(parse_response(&body)?)
    }

    /// `GET /health`, succeeding on any 2xx status.
    pub async fn health(&self) -> Result<(), GenerationError> {
        let url = format!("{}/health", self.base_url);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(GenerationError::Status(status.as_u16()))
        }
    }
}
