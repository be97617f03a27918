//! Client for the WolframAlpha short-answer API.
//!
//! The `v1/result` endpoint returns a single plain-text answer; inputs it
//! cannot interpret come back as a non-success status.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use tutor_core::{BackendError, ComputeEngine};

const DEFAULT_API_BASE: &str = "https://api.wolframalpha.com/v1";

/// Client for WolframAlpha's short-answer endpoint.
pub struct WolframClient {
    client: Client,
    api_base: String,
    app_id: String,
}

impl WolframClient {
    /// Creates a client against the public API.
    pub fn new(app_id: &str) -> Self {
        Self::with_api_base(app_id, DEFAULT_API_BASE)
    }

    /// Creates a client against a custom API base URL (used by tests).
    pub fn with_api_base(app_id: &str, api_base: &str) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            app_id: app_id.to_string(),
        }
    }
}

#[async_trait]
impl ComputeEngine for WolframClient {
    fn name(&self) -> &str {
        "WolframAlpha"
    }

    async fn compute(&self, query: &str) -> Result<String, BackendError> {
        let url = format!("{}/result", self.api_base);

        let response = self
            .client
            .get(&url)
            .query(&[("appid", self.app_id.as_str()), ("i", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let answer = response.text().await?.trim().to_string();
        debug!("WolframAlpha answered with {} bytes", answer.len());
        Ok(answer)
    }
}
