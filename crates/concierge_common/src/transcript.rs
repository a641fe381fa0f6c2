//! Conversation transcript model.
//!
//! Append-only, single-writer. Entries are never mutated once pushed; the
//! screen layer renders straight from this structure.

use crate::booking::BookingIntent;
use crate::venue::VenueRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who is speaking in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "you"),
            Self::Assistant => write!(f, "concierge"),
        }
    }
}

/// One transcript entry. Never mutated post-creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConciergeMessage {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
    /// Venue suggestions attached to an assistant reply.
    #[serde(default)]
    pub suggestions: Vec<VenueRecord>,
    #[serde(default)]
    pub booking: Option<BookingIntent>,
    pub timestamp: DateTime<Utc>,
}

impl ConciergeMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            text: text.into(),
            suggestions: vec![],
            booking: None,
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            text: text.into(),
            suggestions: vec![],
            booking: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<VenueRecord>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_booking(mut self, booking: BookingIntent) -> Self {
        self.booking = Some(booking);
        self
    }
}

/// Append-only conversation transcript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<ConciergeMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ConciergeMessage) {
        self.entries.push(message);
    }

    pub fn entries(&self) -> &[ConciergeMessage] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent assistant entry, if any.
    pub fn last_assistant(&self) -> Option<&ConciergeMessage> {
        self.entries.iter().rev().find(|m| m.role == Role::Assistant)
    }
}
