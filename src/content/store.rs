use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app_config::ContentConfig;
use crate::content::record::ContentRecord;
use crate::errors::ContentError;

/// Request timeout for content store calls
const STORE_TIMEOUT_SECS: u64 = 30;

/// Access to the hosted content store.
///
/// `query_ready` is the status gate: records whose status is anything other
/// than the configured ready value, already-published ones included, are
/// never returned. `update_status` is a single call with no retry; a failed
/// update leaves the record eligible for the next run.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch all records currently eligible for publishing
    async fn query_ready(&self) -> Result<Vec<ContentRecord>, ContentError>;

    /// Set the status field of one record
    async fn update_status(&self, id: &str, status: &str) -> Result<(), ContentError>;
}

/// Query body sent to the content store
#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    filter: StatusFilter<'a>,
}

/// Status equality filter
#[derive(Debug, Serialize)]
struct StatusFilter<'a> {
    status: &'a str,
}

/// Query response from the content store
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<ContentRecord>,
}

/// Status mutation body
#[derive(Debug, Serialize)]
struct StatusUpdate<'a> {
    status: &'a str,
}

/// reqwest-backed client for the hosted content store API
pub struct HostedContentStore {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the store API
    endpoint: String,
    /// Bearer token
    api_key: String,
    /// Status value selecting publishable records
    ready_status: String,
}

impl HostedContentStore {
    /// Create a store client from the content configuration
    pub fn from_config(config: &ContentConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(STORE_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            ready_status: config.ready_status.clone(),
        }
    }
}

#[async_trait]
impl ContentStore for HostedContentStore {
    async fn query_ready(&self) -> Result<Vec<ContentRecord>, ContentError> {
        let url = format!("{}/query", self.endpoint);
        let request = QueryRequest { filter: StatusFilter { status: &self.ready_status } };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ContentError::RequestFailed(format!("query failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Content store query error ({}): {}", status, error_text);
            return Err(ContentError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let query_response = response
            .json::<QueryResponse>()
            .await
            .map_err(|e| ContentError::ParseError(format!("query response: {e}")))?;

        // Guard against stores that ignore the filter; published records
        // must never be selected.
        let mut records = query_response.results;
        records.retain(|record| record.status == self.ready_status);
        Ok(records)
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<(), ContentError> {
        let url = format!("{}/records/{}", self.endpoint, id);

        let response = self
            .client
            .patch(&url)
            .bearer_auth(&self.api_key)
            .json(&StatusUpdate { status })
            .send()
            .await
            .map_err(|e| ContentError::RequestFailed(format!("status update failed: {e}")))?;

        let http_status = response.status();
        if !http_status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Content store update error ({}): {}", http_status, error_text);
            return Err(ContentError::ApiError {
                status_code: http_status.as_u16(),
                message: error_text,
            });
        }

        Ok(())
    }
}
