//! Recommendation with progressive constraint relaxation.
//!
//! `recommend_for_text` admits candidates through a hard pre-filter, scores
//! the admissible pool, and when nothing is admitted retries by dropping
//! one constraint at a time in a fixed priority order. Exhausted retries
//! fall back to prompt-keyword matching so the guest always gets something
//! actionable, unless the input carried no filter signal at all.

use crate::catalog::pick_prompt_for_text;
use crate::extract::{derive_filters_from_text, neighborhood_matches};
use crate::scorer::{score_for_filters, score_for_prompt};
use concierge_common::{DiscoveryFilters, Prompt, RecommendationResult, VenueRecord};
use std::collections::HashSet;
use tracing::{debug, info};

/// Constraints in the order the cascade drops them. Price is skipped when
/// the original request was strict-budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Constraint {
    Neighborhood,
    Tags,
    Price,
    Cuisines,
}

const RELAX_ORDER: &[Constraint] = &[
    Constraint::Neighborhood,
    Constraint::Tags,
    Constraint::Price,
    Constraint::Cuisines,
];

/// Rank a pool against an utterance, relaxing constraints as needed.
pub fn recommend_for_text(
    pool: &[VenueRecord],
    text: &str,
    limit: usize,
) -> RecommendationResult {
    let filters = derive_filters_from_text(text);
    if filters.is_empty() {
        debug!("no filter signal in utterance, asking for more detail");
        return RecommendationResult::needs_more_info();
    }

    let admitted = admit(pool, &filters);
    if !admitted.is_empty() {
        return rank_admitted(pool, &admitted, &filters, limit, false);
    }

    // Relaxation cascade: cumulative, one constraint dropped per retry.
    let mut relaxed = filters.clone();
    for constraint in RELAX_ORDER {
        if *constraint == Constraint::Price && filters.strict_budget {
            continue;
        }
        drop_constraint(&mut relaxed, *constraint);
        let admitted = admit(pool, &relaxed);
        if !admitted.is_empty() {
            info!(
                "relaxation cascade admitted {} venues after dropping {:?}",
                admitted.len(),
                constraint
            );
            return rank_admitted(pool, &admitted, &relaxed, limit, true);
        }
    }

    // Every retry exhausted: fall back to prompt-keyword matching,
    // ignoring filters entirely.
    let prompt = pick_prompt_for_text(text);
    info!("relaxation exhausted, falling back to prompt '{}'", prompt.id);
    // The fallback is the one path that keeps zero-scored candidates, so
    // the guest always gets something actionable.
    let items = rank_for_prompt(pool, prompt, limit, true);
    RecommendationResult::ranked(items, None, true)
}

/// Rank a pool against a curated prompt (tapped-prompt flow). Candidates
/// with no affinity for the prompt are excluded, same as the filter path.
pub fn recommend_for_prompt(
    pool: &[VenueRecord],
    prompt: &Prompt,
    limit: usize,
) -> RecommendationResult {
    let items = rank_for_prompt(pool, prompt, limit, false);
    RecommendationResult::ranked(items, Some(prompt.title.to_string()), false)
}

/// Hard pre-filter: indices of venues passing every present constraint.
fn admit(pool: &[VenueRecord], filters: &DiscoveryFilters) -> Vec<usize> {
    pool.iter()
        .enumerate()
        .filter(|(_, venue)| passes(venue, filters))
        .map(|(index, _)| index)
        .collect()
}

fn passes(venue: &VenueRecord, filters: &DiscoveryFilters) -> bool {
    if !filters.tags.iter().all(|tag| venue.has_tag(tag)) {
        return false;
    }
    if !filters.cuisines.is_empty()
        && !filters.cuisines.iter().any(|cuisine| venue.has_cuisine(cuisine))
    {
        return false;
    }
    if let Some(ref neighborhood) = filters.neighborhood {
        if !neighborhood_matches(&venue.neighborhood, neighborhood) {
            return false;
        }
    }
    if let Some(cap) = filters.max_price_tier {
        match venue.price_tier() {
            Some(tier) if tier > cap => return false,
            // Strict budget disqualifies venues with no parsable price.
            None if filters.strict_budget => return false,
            _ => {}
        }
    }
    if let Some(floor) = filters.min_price_tier {
        if let Some(tier) = venue.price_tier() {
            if tier < floor {
                return false;
            }
        }
    }
    true
}

fn drop_constraint(filters: &mut DiscoveryFilters, constraint: Constraint) {
    match constraint {
        Constraint::Neighborhood => filters.neighborhood = None,
        Constraint::Tags => filters.tags.clear(),
        Constraint::Price => {
            filters.max_price_tier = None;
            filters.min_price_tier = None;
        }
        Constraint::Cuisines => filters.cuisines.clear(),
    }
}

fn rank_admitted(
    pool: &[VenueRecord],
    admitted: &[usize],
    filters: &DiscoveryFilters,
    limit: usize,
    relaxed: bool,
) -> RecommendationResult {
    let mut scored: Vec<(f32, usize)> = admitted
        .iter()
        .map(|&index| (score_for_filters(&pool[index], filters, index), index))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let items = take_unique(
        scored
            .into_iter()
            .filter(|(score, _)| *score > 0.0)
            .map(|(_, index)| &pool[index]),
        limit,
    );
    RecommendationResult::ranked(items, filters.summary(), relaxed)
}

fn rank_for_prompt(
    pool: &[VenueRecord],
    prompt: &Prompt,
    limit: usize,
    keep_zero_scores: bool,
) -> Vec<VenueRecord> {
    let mut scored: Vec<(f32, usize)> = pool
        .iter()
        .enumerate()
        .map(|(index, venue)| (score_for_prompt(venue, prompt, index), index))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    take_unique(
        scored
            .into_iter()
            .filter(|(score, _)| keep_zero_scores || *score > 0.0)
            .map(|(_, index)| &pool[index]),
        limit,
    )
}

/// Take up to `limit` venues, unique by id, preserving order.
fn take_unique<'a>(
    ranked: impl Iterator<Item = &'a VenueRecord>,
    limit: usize,
) -> Vec<VenueRecord> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut items = Vec::new();
    for venue in ranked {
        if items.len() >= limit {
            break;
        }
        if seen.insert(venue.id.as_str()) {
            items.push(venue.clone());
        }
    }
    items
}
