//! Hybrid natural-language venue matching engine.
//!
//! Takes a free-form guest utterance ("romantic rooftop, budget 60 AZN,
//! near the boulevard") or a curated prompt and produces a ranked shortlist
//! of bookable venues plus a conversational reply. Works identically
//! whether the remote ranking service is reachable or not: `ai` mode makes
//! exactly one remote attempt per query and transparently falls back to the
//! local keyword pipeline on any failure.
//!
//! Pipeline: booking-intent detection short-circuits to a booking reply;
//! otherwise the hybrid dispatcher either maps remote results or runs
//! filter extraction, weighted scoring, and the constraint-relaxation
//! cascade, then the response composer turns the result into transcript
//! text.

pub mod booking;
pub mod catalog;
pub mod compose;
pub mod dispatch;
pub mod extract;
pub mod recommend;
pub mod remote;
pub mod scorer;
pub mod session;

pub use booking::detect_booking_intent;
pub use catalog::pick_prompt_for_text;
pub use compose::{compose_booking_reply, compose_discovery_reply};
pub use dispatch::{ConciergePipeline, RemoteRanker};
pub use extract::derive_filters_from_text;
pub use recommend::{recommend_for_prompt, recommend_for_text};
pub use remote::HttpConcierge;
pub use scorer::{score_for_filters, score_for_prompt};
pub use session::Conversation;
