//! Curated discovery prompts.
//!
//! Static, ordered catalog of pre-written discovery intents. Loaded once,
//! never mutated; catalog order is the tie-break when two prompts score the
//! same against an utterance.

/// A curated discovery prompt with trigger keywords and optional affinities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Substring trigger keywords, matched against the lowercased utterance.
    pub keywords: &'static [&'static str],
    /// Venue category this prompt favours, e.g. "fine_dining".
    pub category: Option<&'static str>,
    pub tag_affinity: &'static [&'static str],
    pub cuisine_affinity: &'static [&'static str],
    /// Canned assistant response. Wins over composed text when present.
    pub response_hint: Option<&'static str>,
}

/// Fallback prompt returned when nothing in the catalog matches.
pub const BESPOKE_PROMPT: Prompt = Prompt {
    id: "bespoke",
    title: "Something bespoke",
    subtitle: "Tell me what you're in the mood for",
    keywords: &[],
    category: None,
    tag_affinity: &[],
    cuisine_affinity: &[],
    response_hint: Some(
        "Tell me a little more — cuisine, vibe, budget, or neighborhood — and I'll shortlist a few places.",
    ),
};

const CATALOG: &[Prompt] = &[
    Prompt {
        id: "date-night",
        title: "Date night with a view",
        subtitle: "Rooftops and sunsets over the bay",
        keywords: &["romantic", "date", "anniversary", "rooftop", "view", "sunset"],
        category: Some("fine_dining"),
        tag_affinity: &["romantic", "rooftop"],
        cuisine_affinity: &[],
        response_hint: None,
    },
    Prompt {
        id: "local-flavors",
        title: "Taste of Azerbaijan",
        subtitle: "Plov, saj and pomegranate everything",
        keywords: &["azerbaijani", "local", "national", "traditional", "plov", "saj"],
        category: None,
        tag_affinity: &["traditional"],
        cuisine_affinity: &["azerbaijani"],
        response_hint: None,
    },
    Prompt {
        id: "budget-bites",
        title: "Great food, small bill",
        subtitle: "Good spots under 25 AZN a head",
        keywords: &["cheap", "budget", "affordable", "student", "quick bite"],
        category: Some("casual"),
        tag_affinity: &["casual"],
        cuisine_affinity: &[],
        response_hint: None,
    },
    Prompt {
        id: "live-music",
        title: "Dinner and a band",
        subtitle: "Jazz, mugham and late sets",
        keywords: &["live music", "jazz", "band", "mugham", "concert"],
        category: None,
        tag_affinity: &["live-music"],
        cuisine_affinity: &[],
        response_hint: None,
    },
    Prompt {
        id: "family-table",
        title: "Out with the family",
        subtitle: "Room for strollers and picky eaters",
        keywords: &["family", "kids", "children", "playground"],
        category: None,
        tag_affinity: &["family-friendly", "group-friendly"],
        cuisine_affinity: &[],
        response_hint: None,
    },
    Prompt {
        id: "business-lunch",
        title: "Business lunch",
        subtitle: "Quiet rooms and quick service downtown",
        keywords: &["business", "meeting", "lunch", "colleagues", "client"],
        category: None,
        tag_affinity: &["business", "quiet"],
        cuisine_affinity: &[],
        response_hint: None,
    },
];

/// The ordered, immutable prompt catalog.
pub fn builtin_catalog() -> &'static [Prompt] {
    CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<_> = builtin_catalog().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), builtin_catalog().len());
    }

    #[test]
    fn test_bespoke_prompt_has_no_keywords_and_a_hint() {
        assert!(BESPOKE_PROMPT.keywords.is_empty());
        assert!(BESPOKE_PROMPT.response_hint.is_some());
    }
}
