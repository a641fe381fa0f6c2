//! HTTP client for the remote ranking service.

use crate::dispatch::RemoteRanker;
use async_trait::async_trait;
use concierge_common::{ConciergeError, ConciergeRequest, ConciergeResponse};
use std::time::Duration;
use tracing::info;

/// Remote concierge over HTTP. One POST per query; resilience is a single
/// attempt with a transport-level timeout, then the caller's local
/// fallback.
pub struct HttpConcierge {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpConcierge {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RemoteRanker for HttpConcierge {
    async fn fetch_concierge(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<ConciergeResponse, ConciergeError> {
        let url = format!("{}/concierge", self.base_url);
        let request = ConciergeRequest {
            text: text.to_string(),
            limit,
        };

        info!("[>] remote concierge call ({} chars, limit {})", text.len(), limit);

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ConciergeError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ConciergeError::RemoteStatus(response.status().as_u16()));
        }

        let payload: ConciergeResponse = response
            .json()
            .await
            .map_err(|e| ConciergeError::MalformedPayload(e.to_string()))?;

        info!("[<] remote concierge returned {} results", payload.results.len());
        Ok(payload)
    }
}
