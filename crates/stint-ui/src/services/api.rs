//! HTTP client helpers (REST).
//!
//! # Design
//! - Every mutation is a single best-effort attempt; no retry or timeout.
//! - Paths are same-origin, matching the server-rendered page this client
//!   ships with.
//! - Callers receive the backend's acknowledgement verbatim and decide what
//!   to surface; this layer never alerts or reloads on its own.

use crate::logic::{STATS_PATH, contact_toggle_path, status_update_path};
use crate::state::{ApplicationId, ContactId};
use gloo_net::http::Request;
use stint_api_models::{ContactToggleAck, StatsSnapshot, StatusUpdateAck, StatusUpdateRequest};
use thiserror::Error;

/// Failure surfaced by the API client: transport errors and undecodable
/// bodies collapse into one diagnostic, mirroring how the page treats them.
#[derive(Debug, Error)]
#[error("request failed: {0}")]
pub struct ApiError(#[from] gloo_net::Error);

/// Thin client for the tracker's JSON endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiClient;

impl ApiClient {
    /// Request a status change for an application record.
    ///
    /// # Errors
    /// Returns [`ApiError`] when the request cannot be sent or the response
    /// body is not a valid acknowledgement.
    pub async fn update_application_status(
        self,
        id: ApplicationId,
        status: &str,
    ) -> Result<StatusUpdateAck, ApiError> {
        let ack = Request::post(&status_update_path(id))
            .json(&StatusUpdateRequest {
                status: status.to_string(),
            })?
            .send()
            .await?
            .json::<StatusUpdateAck>()
            .await?;
        Ok(ack)
    }

    /// Toggle the contacted flag of a contact record. The endpoint takes no
    /// body; only the content type travels.
    ///
    /// # Errors
    /// Returns [`ApiError`] when the request cannot be sent or the response
    /// body is not a valid acknowledgement.
    pub async fn toggle_contact(self, id: ContactId) -> Result<ContactToggleAck, ApiError> {
        let ack = Request::post(&contact_toggle_path(id))
            .header("Content-Type", "application/json")
            .send()
            .await?
            .json::<ContactToggleAck>()
            .await?;
        Ok(ack)
    }

    /// Fetch dashboard statistics.
    ///
    /// # Errors
    /// Returns [`ApiError`] when the request cannot be sent or the response
    /// body does not decode.
    pub async fn fetch_stats(self) -> Result<StatsSnapshot, ApiError> {
        Ok(Request::get(STATS_PATH)
            .send()
            .await?
            .json::<StatsSnapshot>()
            .await?)
    }
}
