//! Prompt selection over the curated catalog.

use concierge_common::{builtin_catalog, Prompt, BESPOKE_PROMPT};

/// Keyword weight per substring hit.
const KEYWORD_HIT_SCORE: u32 = 2;

/// Pick the catalog prompt that best matches an utterance.
///
/// Lowercases the input, awards +2 per keyword substring hit, and returns
/// the highest-scoring prompt. Ties resolve to catalog order (first wins);
/// an input that matches nothing returns the bespoke prompt, whose canned
/// response asks for more detail. Pure, no side effects.
pub fn pick_prompt_for_text(text: &str) -> &'static Prompt {
    let lowered = text.to_lowercase();
    let mut best: &'static Prompt = &BESPOKE_PROMPT;
    let mut best_score = 0u32;

    for prompt in builtin_catalog() {
        let score = keyword_score(&lowered, prompt);
        if score > best_score {
            best = prompt;
            best_score = score;
        }
    }

    best
}

fn keyword_score(lowered: &str, prompt: &Prompt) -> u32 {
    prompt
        .keywords
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count() as u32
        * KEYWORD_HIT_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_hits_select_the_prompt() {
        let prompt = pick_prompt_for_text("Somewhere romantic for our anniversary, with a view");
        assert_eq!(prompt.id, "date-night");
    }

    #[test]
    fn test_zero_score_returns_bespoke() {
        let prompt = pick_prompt_for_text("qwerty");
        assert_eq!(prompt.id, "bespoke");
        assert!(prompt.response_hint.is_some());
    }

    #[test]
    fn test_input_case_is_ignored() {
        let prompt = pick_prompt_for_text("LIVE MUSIC and JAZZ please");
        assert_eq!(prompt.id, "live-music");
    }

    #[test]
    fn test_tie_resolves_to_catalog_order() {
        // One keyword hit each for date-night ("sunset") and local-flavors
        // ("plov"); date-night is declared first in the catalog.
        let prompt = pick_prompt_for_text("plov at sunset");
        assert_eq!(prompt.id, "date-night");
    }
}
