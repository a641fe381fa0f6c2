//! Venue directory record.
//!
//! One bookable venue as supplied by the external directory. Treated as an
//! immutable snapshot for the lifetime of a single query.

use serde::{Deserialize, Serialize};

/// A bookable venue from the directory collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub neighborhood: String,
    /// Raw directory price label, e.g. "₼₼", "$$$" or "25-40 AZN".
    #[serde(default)]
    pub price_label: Option<String>,
    /// Directory rating on a 0-5 scale, when the venue has enough reviews.
    #[serde(default)]
    pub rating: Option<f32>,
    /// Coarse venue category used by prompt affinity, e.g. "fine_dining".
    #[serde(default)]
    pub category: Option<String>,
}

impl VenueRecord {
    /// Parse the price label into an ordinal tier, 1 (cheapest) to 4.
    ///
    /// Accepts symbol-run labels ("₼₼₼", "$$") and numeric AZN labels
    /// ("60 AZN", "25-40 azn"). Returns `None` when the label is absent or
    /// carries neither form.
    pub fn price_tier(&self) -> Option<u8> {
        let label = self.price_label.as_deref()?;
        let symbols = label.chars().filter(|c| *c == '₼' || *c == '$').count();
        if symbols > 0 {
            // Clamp before the narrowing cast so absurd labels stay tier 4.
            return Some(symbols.min(4) as u8);
        }
        first_number(label).map(tier_for_amount)
    }

    /// Rating clamped to the 0-5 scale the directory promises.
    pub fn rating_clamped(&self) -> Option<f32> {
        self.rating.map(|r| r.clamp(0.0, 5.0))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn has_cuisine(&self, cuisine: &str) -> bool {
        self.cuisines.iter().any(|c| c.eq_ignore_ascii_case(cuisine))
    }
}

/// Map a per-person AZN amount onto the 1-4 tier scale.
pub fn tier_for_amount(amount: u32) -> u8 {
    match amount {
        0..=25 => 1,
        26..=50 => 2,
        51..=90 => 3,
        _ => 4,
    }
}

fn first_number(label: &str) -> Option<u32> {
    let mut digits = String::new();
    for c in label.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !digits.is_empty() {
            break;
        }
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue_with_label(label: &str) -> VenueRecord {
        VenueRecord {
            id: "v1".to_string(),
            name: "Test Venue".to_string(),
            cuisines: vec![],
            tags: vec![],
            neighborhood: String::new(),
            price_label: Some(label.to_string()),
            rating: None,
            category: None,
        }
    }

    #[test]
    fn test_symbol_labels_count_to_tier() {
        assert_eq!(venue_with_label("₼").price_tier(), Some(1));
        assert_eq!(venue_with_label("₼₼₼").price_tier(), Some(3));
        assert_eq!(venue_with_label("$$$$").price_tier(), Some(4));
        assert_eq!(venue_with_label("₼₼₼₼₼").price_tier(), Some(4));
        assert_eq!(venue_with_label(&"$".repeat(300)).price_tier(), Some(4));
    }

    #[test]
    fn test_numeric_labels_map_via_thresholds() {
        assert_eq!(venue_with_label("20 AZN").price_tier(), Some(1));
        assert_eq!(venue_with_label("25-40 AZN").price_tier(), Some(1));
        assert_eq!(venue_with_label("60 AZN").price_tier(), Some(3));
        assert_eq!(venue_with_label("120 AZN per person").price_tier(), Some(4));
    }

    #[test]
    fn test_unparsable_label_is_none() {
        assert_eq!(venue_with_label("ask the host").price_tier(), None);
        let mut v = venue_with_label("₼");
        v.price_label = None;
        assert_eq!(v.price_tier(), None);
    }

    #[test]
    fn test_rating_clamped() {
        let mut v = venue_with_label("₼");
        v.rating = Some(7.3);
        assert_eq!(v.rating_clamped(), Some(5.0));
        v.rating = Some(-1.0);
        assert_eq!(v.rating_clamped(), Some(0.0));
        v.rating = None;
        assert_eq!(v.rating_clamped(), None);
    }
}
