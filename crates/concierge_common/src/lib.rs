//! Shared types for the concierge matching engine.
//!
//! Data model, configuration, wire contracts, and error types used by both
//! the engine library and the CLI client. Nothing in here performs I/O.

pub mod booking;
pub mod config;
pub mod error;
pub mod filters;
pub mod prompt;
pub mod result;
pub mod transcript;
pub mod venue;
pub mod wire;

pub use booking::{BookingIntent, RelativeDay};
pub use config::{ConciergeConfig, DispatchMode};
pub use error::ConciergeError;
pub use filters::DiscoveryFilters;
pub use prompt::{builtin_catalog, Prompt, BESPOKE_PROMPT};
pub use result::RecommendationResult;
pub use transcript::{ConciergeMessage, Role, Transcript};
pub use venue::VenueRecord;
pub use wire::{ConciergeRequest, ConciergeResponse, RemoteVenue};
