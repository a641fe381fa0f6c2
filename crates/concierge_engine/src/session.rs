//! Conversation session over the pipeline.
//!
//! Owns the append-only transcript and a monotonically increasing request
//! generation counter: when a newer query is issued while an older remote
//! call is still pending, the older response is discarded instead of being
//! appended out of order.

use crate::dispatch::ConciergePipeline;
use concierge_common::{ConciergeMessage, Prompt, Transcript, VenueRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// One guest conversation. Single writer; entries are never mutated.
pub struct Conversation {
    pipeline: ConciergePipeline,
    transcript: Transcript,
    generation: Arc<AtomicU64>,
}

impl Conversation {
    pub fn new(pipeline: ConciergePipeline) -> Self {
        Self {
            pipeline,
            transcript: Transcript::new(),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Submit a free-form utterance. Returns the assistant reply, or `None`
    /// when a newer query superseded this one while it was in flight.
    pub async fn ask(
        &mut self,
        pool: &[VenueRecord],
        text: &str,
    ) -> Option<&ConciergeMessage> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.transcript.push(ConciergeMessage::user(text));

        let reply = self.pipeline.respond(pool, text).await;

        self.accept(token, reply)
    }

    /// Submit a tapped curated prompt.
    pub async fn ask_prompt(
        &mut self,
        pool: &[VenueRecord],
        prompt: &Prompt,
    ) -> Option<&ConciergeMessage> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.transcript.push(ConciergeMessage::user(prompt.title));

        let reply = self.pipeline.respond_to_prompt(pool, prompt).await;

        self.accept(token, reply)
    }

    fn accept(&mut self, token: u64, reply: ConciergeMessage) -> Option<&ConciergeMessage> {
        if self.generation.load(Ordering::SeqCst) != token {
            debug!("discarding stale concierge response (generation {token})");
            return None;
        }
        self.transcript.push(reply);
        self.transcript.last_assistant()
    }
}
