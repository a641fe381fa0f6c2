//! Booking-intent detection.
//!
//! Recognises reservation-style utterances, pulls out party size, time and
//! a relative day, and fuzzy-matches a venue name against the whole
//! utterance. The name match is a scored best guess behind an explicit
//! confidence threshold; below it the intent still returns, with no venue,
//! so the composer can ask a clarifying question.

use concierge_common::{BookingIntent, RelativeDay, VenueRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Substring trigger words for booking-style utterances.
const BOOKING_KEYWORDS: &[&str] = &["book", "reserve", "reservation", "table"];

/// "res" triggers too, but only as a whole word so that "restaurant" and
/// "reservation-adjacent" prose do not flip discovery queries into
/// bookings.
const BOOKING_ABBREVIATION: &str = "res";

/// Minimum fuzzy name score for a venue to be attached to the intent.
const MIN_NAME_CONFIDENCE: u32 = 1;

/// Full utterance contains the full venue name.
const FULL_CONTAINMENT_SCORE: u32 = 6;
/// Venue name contains the full utterance.
const REVERSE_CONTAINMENT_SCORE: u32 = 5;

static PARTY_SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(for|party of)\s*(\d{1,2})").unwrap());

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})(:(\d{2}))?\s*(am|pm)?").unwrap());

/// Detect a booking intent in an utterance, or `None` when it carries no
/// booking keyword.
pub fn detect_booking_intent(text: &str, pool: &[VenueRecord]) -> Option<BookingIntent> {
    let lowered = text.to_lowercase();
    if !has_booking_keyword(&lowered) {
        return None;
    }

    let (party_size, party_span) = extract_party_size(&lowered);
    let time = extract_time(&lowered, party_span);
    let date = extract_relative_day(&lowered);
    let venue = resolve_venue(&lowered, pool);

    debug!(
        "booking intent: venue={:?} party={:?} time={:?} date={:?}",
        venue.as_ref().map(|v| v.name.as_str()),
        party_size,
        time,
        date
    );

    Some(BookingIntent {
        venue,
        party_size,
        time,
        date,
    })
}

fn has_booking_keyword(lowered: &str) -> bool {
    if BOOKING_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
        return true;
    }
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| token == BOOKING_ABBREVIATION)
}

fn extract_party_size(lowered: &str) -> (Option<u8>, Option<(usize, usize)>) {
    let Some(captures) = PARTY_SIZE_RE.captures(lowered) else {
        return (None, None);
    };
    let digits = captures.get(2).unwrap();
    (
        digits.as_str().parse().ok(),
        Some((digits.start(), digits.end())),
    )
}

/// Extract a time of day, normalised to 24-hour "HH:MM".
///
/// The party-size digits are excised first so "for 4" never parses as
/// 04:00; among remaining matches, one carrying a meridiem or minutes is
/// preferred over a bare number.
fn extract_time(lowered: &str, party_span: Option<(usize, usize)>) -> Option<String> {
    let mut bare_fallback: Option<String> = None;

    for captures in TIME_RE.captures_iter(lowered) {
        let digits = captures.get(1).unwrap();
        let qualified = captures.get(3).is_some() || captures.get(4).is_some();
        if !qualified {
            if let Some((start, end)) = party_span {
                if digits.start() >= start && digits.end() <= end {
                    continue;
                }
            }
        }

        let hour: u32 = digits.as_str().parse().ok()?;
        let minutes: u32 = captures
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        if hour > 23 || minutes > 59 {
            continue;
        }
        let meridiem = captures.get(4).map(|m| m.as_str());

        let normalised_hour = match meridiem {
            Some("pm") if hour < 12 => hour + 12,
            Some("am") if hour == 12 => 0,
            // No meridiem: an hour >= 13 is already 24-hour; smaller hours
            // are kept as written.
            _ => hour,
        };
        let formatted = format!("{normalised_hour:02}:{minutes:02}");

        if qualified {
            return Some(formatted);
        }
        if bare_fallback.is_none() {
            bare_fallback = Some(formatted);
        }
    }

    bare_fallback
}

fn extract_relative_day(lowered: &str) -> Option<RelativeDay> {
    if lowered.contains("tonight") || lowered.contains("today") {
        Some(RelativeDay::Today)
    } else if lowered.contains("tomorrow") {
        Some(RelativeDay::Tomorrow)
    } else {
        None
    }
}

/// Fuzzy-match a venue name against the whole utterance and return the best
/// guess, if it clears the confidence threshold. Ties keep the first-seen
/// candidate.
fn resolve_venue(lowered: &str, pool: &[VenueRecord]) -> Option<VenueRecord> {
    let utterance_norm = normalize(lowered);
    let utterance_tokens: HashSet<&str> = utterance_norm.split_whitespace().collect();

    let mut best: Option<&VenueRecord> = None;
    let mut best_score = 0u32;

    for venue in pool {
        let score = name_match_score(&utterance_norm, &utterance_tokens, &venue.name);
        if score > best_score {
            best = Some(venue);
            best_score = score;
        }
    }

    if best_score >= MIN_NAME_CONFIDENCE {
        best.cloned()
    } else {
        None
    }
}

fn name_match_score(
    utterance_norm: &str,
    utterance_tokens: &HashSet<&str>,
    name: &str,
) -> u32 {
    let name_norm = normalize(name);
    if name_norm.is_empty() {
        return 0;
    }
    if utterance_norm.contains(&name_norm) {
        return FULL_CONTAINMENT_SCORE;
    }
    if name_norm.contains(utterance_norm) {
        return REVERSE_CONTAINMENT_SCORE;
    }
    name_norm
        .split_whitespace()
        .filter(|token| utterance_tokens.contains(token))
        .count() as u32
}

/// Lowercase, strip punctuation, collapse whitespace.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
