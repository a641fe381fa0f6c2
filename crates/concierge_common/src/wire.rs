//! Wire contract for the single remote ranking call.
//!
//! `fetch_concierge(text, limit)` is the only network surface this core
//! owns. Response fields are individually optional so that a sparse payload
//! still deserializes; a payload missing `id` or `name` on a result is
//! malformed and treated like a transport failure by the dispatcher.

use crate::venue::VenueRecord;
use serde::{Deserialize, Serialize};

/// Request body for the remote ranking call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConciergeRequest {
    pub text: String,
    pub limit: usize,
}

/// One venue as the remote service shapes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteVenue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub price_label: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl RemoteVenue {
    /// Map the remote shape into the local record shape. Fields the remote
    /// service does not carry (cuisines, rating, category) stay empty.
    pub fn into_record(self) -> VenueRecord {
        VenueRecord {
            id: self.id,
            name: self.name,
            cuisines: vec![],
            tags: self.tags.unwrap_or_default(),
            neighborhood: self.area.unwrap_or_default(),
            price_label: self.price_label,
            rating: None,
            category: None,
        }
    }
}

/// Response body of the remote ranking call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConciergeResponse {
    pub results: Vec<RemoteVenue>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}
