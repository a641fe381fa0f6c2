//! Hybrid remote/local dispatch.
//!
//! The dispatch mode is resolved once from injected configuration. In `ai`
//! mode every discovery or prompt query makes exactly one remote attempt;
//! any failure — network, non-2xx, malformed payload — logs a warning and
//! falls through to the full local pipeline with the same utterance. No
//! retries, no extra timeout beyond the transport's own.

use crate::booking::detect_booking_intent;
use crate::compose::{compose_booking_reply, compose_discovery_reply};
use crate::recommend::{recommend_for_prompt, recommend_for_text};
use crate::remote::HttpConcierge;
use async_trait::async_trait;
use concierge_common::{
    ConciergeConfig, ConciergeError, ConciergeMessage, ConciergeResponse, DispatchMode, Prompt,
    RecommendationResult, VenueRecord,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Seam for the remote ranking call, so tests can inject failures.
#[async_trait]
pub trait RemoteRanker: Send + Sync {
    async fn fetch_concierge(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<ConciergeResponse, ConciergeError>;
}

/// The query pipeline: booking short-circuit, then remote-or-local
/// discovery, then response composition.
pub struct ConciergePipeline {
    mode: DispatchMode,
    limit: usize,
    remote: Option<Arc<dyn RemoteRanker>>,
}

impl ConciergePipeline {
    pub fn new(config: &ConciergeConfig) -> Self {
        let remote: Option<Arc<dyn RemoteRanker>> = match config.mode {
            DispatchMode::Ai => Some(Arc::new(HttpConcierge::new(
                config.remote_url.clone(),
                config.remote_timeout_secs,
            ))),
            DispatchMode::Local => None,
        };
        info!("concierge pipeline ready (mode: {:?})", config.mode);
        Self {
            mode: config.mode,
            limit: config.default_limit,
            remote,
        }
    }

    /// Build with a caller-supplied remote backend. Used by tests and by
    /// hosts that own their transport.
    pub fn with_remote(config: &ConciergeConfig, remote: Arc<dyn RemoteRanker>) -> Self {
        Self {
            mode: config.mode,
            limit: config.default_limit,
            remote: Some(remote),
        }
    }

    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    /// Answer a free-form utterance against a venue snapshot.
    pub async fn respond(&self, pool: &[VenueRecord], text: &str) -> ConciergeMessage {
        if let Some(intent) = detect_booking_intent(text, pool) {
            return compose_booking_reply(&intent);
        }

        if let Some(result) = self.try_remote(text).await {
            return compose_discovery_reply(&result, None);
        }

        let result = recommend_for_text(pool, text, self.limit);
        compose_discovery_reply(&result, None)
    }

    /// Answer a tapped curated prompt against a venue snapshot.
    pub async fn respond_to_prompt(
        &self,
        pool: &[VenueRecord],
        prompt: &Prompt,
    ) -> ConciergeMessage {
        if let Some(result) = self.try_remote(prompt.title).await {
            return compose_discovery_reply(&result, Some(prompt));
        }

        let result = recommend_for_prompt(pool, prompt, self.limit);
        compose_discovery_reply(&result, Some(prompt))
    }

    /// One remote attempt in `ai` mode; `None` means "use the local
    /// pipeline" (local mode, or any remote failure).
    async fn try_remote(&self, text: &str) -> Option<RecommendationResult> {
        if self.mode != DispatchMode::Ai {
            return None;
        }
        let remote = self.remote.as_ref()?;

        match remote.fetch_concierge(text, self.limit).await {
            Ok(response) => Some(map_remote_response(response, self.limit)),
            Err(error) => {
                warn!("remote concierge failed, falling back to local pipeline: {error}");
                None
            }
        }
    }
}

/// Map remote results into the local result shape, enforcing the limit and
/// id uniqueness the same way the local pipeline does.
fn map_remote_response(response: ConciergeResponse, limit: usize) -> RecommendationResult {
    let mut seen = std::collections::HashSet::new();
    let items: Vec<VenueRecord> = response
        .results
        .into_iter()
        .map(|remote| remote.into_record())
        .filter(|record| seen.insert(record.id.clone()))
        .take(limit)
        .collect();
    RecommendationResult::ranked(items, response.message, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_common::RemoteVenue;

    struct FailingBackend;

    #[async_trait]
    impl RemoteRanker for FailingBackend {
        async fn fetch_concierge(
            &self,
            _text: &str,
            _limit: usize,
        ) -> Result<ConciergeResponse, ConciergeError> {
            Err(ConciergeError::Transport("connection refused".to_string()))
        }
    }

    struct CannedBackend;

    #[async_trait]
    impl RemoteRanker for CannedBackend {
        async fn fetch_concierge(
            &self,
            _text: &str,
            _limit: usize,
        ) -> Result<ConciergeResponse, ConciergeError> {
            Ok(ConciergeResponse {
                results: vec![
                    RemoteVenue {
                        id: "r1".to_string(),
                        name: "Sumakh".to_string(),
                        area: Some("old city".to_string()),
                        address: None,
                        price_label: Some("₼₼".to_string()),
                        tags: Some(vec!["traditional".to_string()]),
                        instagram: None,
                        summary: None,
                        website: None,
                    },
                    RemoteVenue {
                        id: "r1".to_string(),
                        name: "Sumakh duplicate".to_string(),
                        area: None,
                        address: None,
                        price_label: None,
                        tags: None,
                        instagram: None,
                        summary: None,
                        website: None,
                    },
                ],
                message: Some("two classics".to_string()),
                mode: Some("ai".to_string()),
            })
        }
    }

    fn ai_config() -> ConciergeConfig {
        ConciergeConfig {
            mode: DispatchMode::Ai,
            ..Default::default()
        }
    }

    fn rooftop_pool() -> Vec<VenueRecord> {
        vec![VenueRecord {
            id: "terrace".to_string(),
            name: "Terrace 360".to_string(),
            cuisines: vec![],
            tags: vec!["rooftop".to_string(), "romantic".to_string()],
            neighborhood: "boulevard".to_string(),
            price_label: Some("₼₼".to_string()),
            rating: Some(4.5),
            category: None,
        }]
    }

    #[tokio::test]
    async fn test_remote_success_skips_local_pipeline() {
        let pipeline = ConciergePipeline::with_remote(&ai_config(), Arc::new(CannedBackend));
        let reply = pipeline.respond(&rooftop_pool(), "rooftop tonight").await;
        // Remote results win; local "terrace" venue is not consulted.
        assert_eq!(reply.suggestions.len(), 1);
        assert_eq!(reply.suggestions[0].id, "r1");
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_to_local() {
        let pipeline = ConciergePipeline::with_remote(&ai_config(), Arc::new(FailingBackend));
        let reply = pipeline.respond(&rooftop_pool(), "romantic rooftop").await;
        assert_eq!(reply.suggestions.len(), 1);
        assert_eq!(reply.suggestions[0].id, "terrace");
    }

    #[tokio::test]
    async fn test_local_mode_never_calls_remote() {
        // A canned backend that would panic if consulted is unnecessary:
        // local mode simply carries no backend.
        let pipeline = ConciergePipeline::new(&ConciergeConfig::default());
        assert_eq!(pipeline.mode(), DispatchMode::Local);
        let reply = pipeline.respond(&rooftop_pool(), "romantic rooftop").await;
        assert_eq!(reply.suggestions[0].id, "terrace");
    }

    #[tokio::test]
    async fn test_booking_short_circuits_remote() {
        let pipeline = ConciergePipeline::with_remote(&ai_config(), Arc::new(CannedBackend));
        let reply = pipeline
            .respond(&rooftop_pool(), "book a table at terrace 360 for 2")
            .await;
        assert!(reply.booking.is_some());
        assert!(reply.text.contains("Terrace 360"));
    }

    #[tokio::test]
    async fn test_remote_duplicates_are_collapsed() {
        let pipeline = ConciergePipeline::with_remote(&ai_config(), Arc::new(CannedBackend));
        let reply = pipeline.respond(&[], "anything traditional").await;
        assert_eq!(reply.suggestions.len(), 1);
    }
}
