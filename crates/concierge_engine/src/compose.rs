//! Assistant-facing response composition.
//!
//! Turns a ranked result or booking intent into conversational transcript
//! text. A prompt's canned response hint always wins; otherwise the text is
//! composed from the filter summary and the relaxed flag.

use concierge_common::{
    BookingIntent, ConciergeMessage, Prompt, RecommendationResult, BESPOKE_PROMPT,
};

const NO_FIT_MESSAGE: &str =
    "I couldn't find a perfect fit for that one. Want to try a different neighborhood or budget?";

/// Compose the assistant reply for a discovery result.
///
/// `prompt` is the curated prompt that drove the query, when one did; its
/// canned response hint wins over composed text.
pub fn compose_discovery_reply(
    result: &RecommendationResult,
    prompt: Option<&Prompt>,
) -> ConciergeMessage {
    if let Some(hint) = prompt.and_then(|p| p.response_hint) {
        return ConciergeMessage::assistant(hint).with_suggestions(result.items.clone());
    }

    if result.needs_more_info {
        // The bespoke prompt's canned text already asks for more detail.
        let hint = BESPOKE_PROMPT.response_hint.unwrap_or(NO_FIT_MESSAGE);
        return ConciergeMessage::assistant(hint);
    }

    if result.items.is_empty() {
        return ConciergeMessage::assistant(NO_FIT_MESSAGE);
    }

    let text = match &result.summary {
        Some(summary) if result.relaxed => format!("Closest matches for {summary}."),
        Some(summary) => format!("Here are spots for {summary}."),
        None => name_dropping_text(result),
    };
    ConciergeMessage::assistant(text).with_suggestions(result.items.clone())
}

/// Compose the assistant reply for a booking intent.
pub fn compose_booking_reply(intent: &BookingIntent) -> ConciergeMessage {
    let Some(venue) = &intent.venue else {
        return ConciergeMessage::assistant(
            "Which restaurant should I book? Tell me the name and I'll set it up.",
        )
        .with_booking(intent.clone());
    };

    let mut text = format!("I can start a booking at {}", venue.name);
    if let Some(party_size) = intent.party_size {
        text.push_str(&format!(" for {party_size}"));
    }
    if let Some(time) = &intent.time {
        text.push_str(&format!(" at {time}"));
    }
    text.push('.');

    ConciergeMessage::assistant(text).with_booking(intent.clone())
}

/// Generic message naming up to two suggestions.
fn name_dropping_text(result: &RecommendationResult) -> String {
    let names: Vec<&str> = result
        .items
        .iter()
        .take(2)
        .map(|venue| venue.name.as_str())
        .collect();
    match names.as_slice() {
        [only] => format!("You might like {only}."),
        [first, second] => format!("You might like {first} or {second}."),
        _ => NO_FIT_MESSAGE.to_string(),
    }
}
