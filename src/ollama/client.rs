//! HTTP client for the Ollama inference endpoint
//!
//! Wraps the `/api/generate` completion endpoint and the `/api/tags`
//! reachability check.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Inference endpoint errors
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    #[error("Endpoint returned status {status}: {body}")]
    EndpointStatus { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

/// Request body for `/api/generate`.
///
/// `stream` is always false; the full completion is read in one response.
#[derive(Clone, Debug, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

/// Response body of a non-streamed `/api/generate` call
#[derive(Clone, Debug, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

/// Client for a local Ollama server
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    host: String,
    model: String,
    timeout_secs: u64,
}

impl OllamaClient {
    /// Create a client for the given host and model
    pub fn new(
        host: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, OllamaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| OllamaError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            host: host.into().trim_end_matches('/').to_string(),
            model: model.into(),
            timeout_secs,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn map_transport_error(&self, url: &str, e: reqwest::Error) -> OllamaError {
        if e.is_timeout() {
            OllamaError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            OllamaError::ConnectionRefused(url.to_string())
        } else {
            OllamaError::RequestFailed(e.to_string())
        }
    }

    /// Send a prompt and return the full generated completion
    pub async fn generate(&self, prompt: &str) -> Result<String, OllamaError> {
        let url = format!("{}/api/generate", self.host);
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        debug!("Sending generate request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OllamaError::EndpointStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::InvalidResponse(e.to_string()))?;

        debug!("Received {} bytes of completion", body.response.len());

        Ok(body.response)
    }

    /// Verify the server is reachable before starting a run
    pub async fn check_health(&self) -> Result<(), OllamaError> {
        let url = format!("{}/api/tags", self.host);

        debug!("Checking endpoint health at {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OllamaError::EndpointStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
