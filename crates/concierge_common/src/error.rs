//! Typed errors for the concierge engine.
//!
//! Every variant here is recoverable by design: remote failures trigger the
//! local fallback and are never surfaced to the user as errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConciergeError {
    #[error("remote concierge returned status {0}")]
    RemoteStatus(u16),

    #[error("remote concierge transport failed: {0}")]
    Transport(String),

    #[error("remote concierge payload was malformed: {0}")]
    MalformedPayload(String),

    #[error("remote ranking is disabled in local mode")]
    RemoteDisabled,
}
