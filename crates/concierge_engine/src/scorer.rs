//! Weighted match scoring.
//!
//! Two entry points sharing one formula shape: one scores a venue against a
//! curated prompt, one against extracted filters. Scores are never
//! negative, nothing short-circuits, and every candidate in a pool is
//! scored every time.

use crate::extract::neighborhood_matches;
use concierge_common::{DiscoveryFilters, Prompt, VenueRecord};

/// Tags that mark a venue as suited to larger parties.
pub const GROUP_DINING_TAGS: &[&str] = &[
    "group-friendly",
    "banquet",
    "family-style",
    "family-friendly",
    "private-dining",
];

const CATEGORY_AFFINITY_SCORE: f32 = 6.0;
const TAG_MATCH_SCORE: f32 = 3.0;
const CUISINE_MATCH_PROMPT: f32 = 2.0;
const CUISINE_MATCH_FILTERS: f32 = 3.5;
const PRICE_WITHIN_CAP_SCORE: f32 = 3.0;
const CHEAPER_THAN_CAP_PER_TIER: f32 = 1.2;
const NEIGHBORHOOD_MATCH_SCORE: f32 = 2.0;
const GROUP_DINING_BONUS: f32 = 2.0;
const RATING_WEIGHT_FILTERS: f32 = 0.6;
const RATING_WEIGHT_PROMPT: f32 = 0.8;
const MIN_GROUP_SIZE_FOR_BONUS: u8 = 6;

/// Deterministic tie-break favouring earlier pool positions without
/// overturning real score differences.
fn position_bonus(index: usize) -> f32 {
    (2.0 - 0.03 * index as f32).max(0.0)
}

/// Score a venue against a curated prompt. `index` is the venue's position
/// in the input pool.
pub fn score_for_prompt(venue: &VenueRecord, prompt: &Prompt, index: usize) -> f32 {
    let mut score = 0.0;

    if let (Some(category), Some(venue_category)) = (prompt.category, venue.category.as_deref()) {
        if category.eq_ignore_ascii_case(venue_category) {
            score += CATEGORY_AFFINITY_SCORE;
        }
    }
    for tag in prompt.tag_affinity {
        if venue.has_tag(tag) {
            score += TAG_MATCH_SCORE;
        }
    }
    for cuisine in prompt.cuisine_affinity {
        if venue.has_cuisine(cuisine) {
            score += CUISINE_MATCH_PROMPT;
        }
    }
    if let Some(rating) = venue.rating_clamped() {
        score += rating * RATING_WEIGHT_PROMPT;
    }

    (score + position_bonus(index)).max(0.0)
}

/// Score a venue against extracted filters. `index` is the venue's position
/// in the input pool.
///
/// Price admission is the hard pre-filter's job; within the admissible pool
/// the scorer only rewards sitting at or under the cap, plus a bonus per
/// tier of headroom.
pub fn score_for_filters(venue: &VenueRecord, filters: &DiscoveryFilters, index: usize) -> f32 {
    let mut score = 0.0;

    for tag in &filters.tags {
        if venue.has_tag(tag) {
            score += TAG_MATCH_SCORE;
        }
    }
    for cuisine in &filters.cuisines {
        if venue.has_cuisine(cuisine) {
            score += CUISINE_MATCH_FILTERS;
        }
    }
    if let Some(cap) = filters.max_price_tier {
        if let Some(tier) = venue.price_tier() {
            if tier <= cap {
                score += PRICE_WITHIN_CAP_SCORE + CHEAPER_THAN_CAP_PER_TIER * f32::from(cap - tier);
            }
        }
    }
    if let Some(ref neighborhood) = filters.neighborhood {
        if neighborhood_matches(&venue.neighborhood, neighborhood) {
            score += NEIGHBORHOOD_MATCH_SCORE;
        }
    }
    if let Some(group_size) = filters.group_size {
        if group_size >= MIN_GROUP_SIZE_FOR_BONUS
            && GROUP_DINING_TAGS.iter().any(|tag| venue.has_tag(tag))
        {
            score += GROUP_DINING_BONUS;
        }
    }
    if let Some(rating) = venue.rating_clamped() {
        score += rating * RATING_WEIGHT_FILTERS;
    }

    (score + position_bonus(index)).max(0.0)
}
