//! Ranked recommendation output.

use crate::venue::VenueRecord;
use serde::{Deserialize, Serialize};

/// Ranked shortlist returned by the local pipeline or the remote ranker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Ordered, bounded by the caller-supplied limit, unique by id.
    pub items: Vec<VenueRecord>,
    /// Human-readable restatement of what was matched.
    pub summary: Option<String>,
    /// True when any constraint was dropped to produce the shortlist.
    pub relaxed: bool,
    /// True when the input carried no actionable signal.
    pub needs_more_info: bool,
}

impl RecommendationResult {
    /// Result for input with no actionable signal.
    pub fn needs_more_info() -> Self {
        Self {
            needs_more_info: true,
            ..Self::default()
        }
    }

    pub fn ranked(items: Vec<VenueRecord>, summary: Option<String>, relaxed: bool) -> Self {
        Self {
            items,
            summary,
            relaxed,
            needs_more_info: false,
        }
    }
}
