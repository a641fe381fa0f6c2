//! Free-text filter extraction.
//!
//! Pure keyword/regex scan over a lowercased copy of the utterance. The
//! lexicons are English-only today; input in other languages simply yields
//! empty filters and degrades to the needs-more-info reply downstream.

use concierge_common::venue::tier_for_amount;
use concierge_common::DiscoveryFilters;
use once_cell::sync::Lazy;
use regex::Regex;

/// Price words mapped to (ordinal tier cap, strict-budget flag).
///
/// Strict words treat a venue with no parsable price as disqualified rather
/// than neutral. Multiple hits take the minimum tier; strictness is sticky
/// once any strict word matches.
const PRICE_LEXICON: &[(&str, u8, bool)] = &[
    ("cheap", 1, true),
    ("budget", 1, true),
    ("affordable", 1, true),
    ("inexpensive", 1, true),
    ("moderate", 2, false),
    ("mid-range", 2, false),
    ("reasonable", 2, false),
    ("upscale", 3, false),
    ("fancy", 3, false),
    ("fine dining", 3, false),
    ("luxury", 4, false),
    ("splurge", 4, false),
    ("high-end", 4, false),
    ("expensive", 4, false),
];

/// Cuisine words; every hit is appended as-is.
const CUISINE_LEXICON: &[&str] = &[
    "azerbaijani",
    "georgian",
    "turkish",
    "italian",
    "japanese",
    "chinese",
    "pan-asian",
    "indian",
    "lebanese",
    "french",
    "mediterranean",
    "european",
    "seafood",
    "steakhouse",
];

/// Tag keyword groups, tested in declared order. A group contributes its
/// tag once if any of its keywords appears.
const TAG_GROUPS: &[(&str, &[&str])] = &[
    (
        "rooftop",
        &["rooftop", "skyline", "view", "sunset", "terrace", "panorama"],
    ),
    (
        "romantic",
        &["romantic", "date night", "date", "anniversary", "candlelit", "intimate"],
    ),
    ("live-music", &["live music", "jazz", "mugham", "band", "dj"]),
    ("family-friendly", &["family", "kids", "children"]),
    ("outdoor", &["outdoor", "garden", "courtyard", "al fresco"]),
    ("brunch", &["brunch", "breakfast"]),
    ("business", &["business lunch", "business", "meeting"]),
    ("late-night", &["late night", "after midnight"]),
];

/// Neighborhood keyword groups, tested in declared order. When more than
/// one group matches, the last matching group wins; declaration order is
/// the documented tie-break.
const NEIGHBORHOOD_GROUPS: &[(&str, &[&str])] = &[
    ("fountain square", &["fountain square", "fountains", "downtown"]),
    (
        "old city",
        &["old city", "icherisheher", "icheri sheher", "maiden tower"],
    ),
    ("boulevard", &["boulevard", "bulvar", "seaside", "waterfront"]),
    ("port baku", &["port baku", "white city"]),
    ("nizami street", &["nizami", "torgovaya"]),
];

static GROUP_SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(for|party of)\s*(\d{1,2})").unwrap());

static AZN_BUDGET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,3})\s*azn").unwrap());

/// Derive structured discovery filters from free text.
///
/// Pure and deterministic: the same input always yields the same filters.
/// Absent fields mean "unconstrained", never zero.
pub fn derive_filters_from_text(text: &str) -> DiscoveryFilters {
    let lowered = text.to_lowercase();
    let mut filters = DiscoveryFilters::default();

    scan_price(&lowered, &mut filters);
    scan_cuisines(&lowered, &mut filters);
    scan_tags(&lowered, &mut filters);
    scan_neighborhood(&lowered, &mut filters);
    scan_group_size(&lowered, &mut filters);

    filters
}

fn scan_price(lowered: &str, filters: &mut DiscoveryFilters) {
    let mut cap: Option<u8> = None;
    let mut strict = false;

    for (word, tier, word_strict) in PRICE_LEXICON {
        if lowered.contains(word) {
            cap = Some(cap.map_or(*tier, |c| c.min(*tier)));
            strict = strict || *word_strict;
        }
    }

    // An explicit money amount ("budget 60 azn") participates in the same
    // minimum-tier rule and is always strict.
    if let Some(captures) = AZN_BUDGET_RE.captures(lowered) {
        if let Ok(amount) = captures[1].parse::<u32>() {
            let tier = tier_for_amount(amount);
            cap = Some(cap.map_or(tier, |c| c.min(tier)));
            strict = true;
        }
    }

    filters.max_price_tier = cap;
    filters.strict_budget = strict;
}

fn scan_cuisines(lowered: &str, filters: &mut DiscoveryFilters) {
    for cuisine in CUISINE_LEXICON {
        if lowered.contains(cuisine) {
            filters.cuisines.push((*cuisine).to_string());
        }
    }
}

fn scan_tags(lowered: &str, filters: &mut DiscoveryFilters) {
    for (tag, keywords) in TAG_GROUPS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            filters.tags.push((*tag).to_string());
        }
    }
}

fn scan_neighborhood(lowered: &str, filters: &mut DiscoveryFilters) {
    for (neighborhood, keywords) in NEIGHBORHOOD_GROUPS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            filters.neighborhood = Some((*neighborhood).to_string());
        }
    }
}

/// Whether a venue's neighborhood label belongs to a canonical group.
///
/// Directory labels use free vocabulary ("Downtown", "Icherisheher"), so a
/// label counts as a match when it contains the canonical name or any of
/// the group's keywords.
pub fn neighborhood_matches(label: &str, canonical: &str) -> bool {
    let lowered = label.to_lowercase();
    if lowered.contains(canonical) {
        return true;
    }
    NEIGHBORHOOD_GROUPS
        .iter()
        .find(|(name, _)| *name == canonical)
        .is_some_and(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
}

fn scan_group_size(lowered: &str, filters: &mut DiscoveryFilters) {
    if let Some(captures) = GROUP_SIZE_RE.captures(lowered) {
        filters.group_size = captures[2].parse().ok();
    }
}
