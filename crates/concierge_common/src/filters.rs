//! Structured discovery constraints derived from free text.

use serde::{Deserialize, Serialize};

/// Constraints extracted from one utterance. Produced fresh per query and
/// never mutated after construction; absent fields mean "unconstrained".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryFilters {
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub min_price_tier: Option<u8>,
    #[serde(default)]
    pub max_price_tier: Option<u8>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub group_size: Option<u8>,
    /// When set, a venue with no parsable price is disqualified rather than
    /// kept as neutral.
    #[serde(default)]
    pub strict_budget: bool,
}

impl DiscoveryFilters {
    /// True when the utterance carried no actionable signal at all.
    pub fn is_empty(&self) -> bool {
        self.cuisines.is_empty()
            && self.tags.is_empty()
            && self.min_price_tier.is_none()
            && self.max_price_tier.is_none()
            && self.neighborhood.is_none()
            && self.group_size.is_none()
    }

    /// Short human-readable restatement of the constraints, used by the
    /// response composer ("Here are spots for <summary>.").
    pub fn summary(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        if !self.tags.is_empty() {
            parts.push(self.tags.join(" "));
        }
        if !self.cuisines.is_empty() {
            parts.push(format!("{} food", self.cuisines.join("/")));
        }
        if let Some(n) = self.group_size {
            parts.push(format!("a party of {n}"));
        }
        if let Some(ref hood) = self.neighborhood {
            parts.push(format!("near {hood}"));
        }
        if self.strict_budget {
            parts.push("on a budget".to_string());
        } else if let Some(max) = self.max_price_tier {
            parts.push(format!("up to {} price tier", "₼".repeat(max as usize)));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
