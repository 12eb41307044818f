//! HTTP client for the venue endpoints.
//!
//! Wraps venue creation and deletion using [`reqwest`]. Every call returns
//! an explicit result; nothing is fired and forgotten.

use fyyur_core::{VenueForm, VenueId};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::VenueApiError;

/// HTTP client for a single venue server.
#[derive(Debug, Clone)]
pub struct VenueApi {
    client: reqwest::Client,
    base_url: String,
}

/// Body the server sends back from `DELETE /venues/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl VenueApi {
    /// Build a client from `config`, applying its request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, VenueApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a venue.
    ///
    /// Validates `form` first; an invalid record never reaches the network.
    /// Sends `POST /venues/create` with the record as a JSON body. Any 2xx
    /// status counts as success and the body is ignored.
    pub async fn create_venue(&self, form: &VenueForm) -> Result<(), VenueApiError> {
        form.check()?;

        tracing::debug!(name = %form.name, "Submitting venue");

        let response = self
            .client
            .post(format!("{}/venues/create", self.base_url))
            .json(form)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Delete a venue.
    ///
    /// Sends `DELETE /venues/{id}` with no body. A 2xx response whose JSON
    /// body reports `"success": false` is treated as a server error; empty
    /// or non-JSON bodies are accepted.
    pub async fn delete_venue(&self, id: &VenueId) -> Result<(), VenueApiError> {
        tracing::debug!(venue_id = %id, "Deleting venue");

        let response = self
            .client
            .delete(format!("{}/venues/{}", self.base_url, id.path_segment()))
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        match serde_json::from_str::<DeleteResponse>(&body) {
            Ok(DeleteResponse { success: false }) => Err(VenueApiError::Server { status, body }),
            _ => Ok(()),
        }
    }

    /// Pass 2xx responses through; anything else becomes
    /// [`VenueApiError::Server`] carrying the venue server's status and body.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, VenueApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(VenueApiError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Creation replies are not inspected beyond their status.
    async fn check_status(response: reqwest::Response) -> Result<(), VenueApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
