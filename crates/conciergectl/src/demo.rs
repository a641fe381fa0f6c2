//! Bundled demo venue directory, used when no --venues file is given.

use concierge_common::VenueRecord;

fn venue(
    id: &str,
    name: &str,
    cuisines: &[&str],
    tags: &[&str],
    neighborhood: &str,
    price_label: &str,
    rating: f32,
    category: Option<&str>,
) -> VenueRecord {
    VenueRecord {
        id: id.to_string(),
        name: name.to_string(),
        cuisines: cuisines.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        neighborhood: neighborhood.to_string(),
        price_label: Some(price_label.to_string()),
        rating: Some(rating),
        category: category.map(|s| s.to_string()),
    }
}

/// A small Baku directory for trying the engine without a data file.
pub fn demo_directory() -> Vec<VenueRecord> {
    vec![
        venue(
            "sahil-bar",
            "Sahil Bar & Restaurant",
            &["european"],
            &["live-music", "group-friendly"],
            "boulevard",
            "₼₼₼",
            4.6,
            None,
        ),
        venue(
            "terrace-360",
            "Terrace 360",
            &["mediterranean"],
            &["rooftop", "romantic"],
            "boulevard",
            "₼₼",
            4.4,
            Some("fine_dining"),
        ),
        venue(
            "qaynana",
            "Qaynana",
            &["azerbaijani"],
            &["traditional", "family-friendly"],
            "old city",
            "₼",
            4.2,
            Some("casual"),
        ),
        venue(
            "sumakh",
            "Sumakh",
            &["azerbaijani"],
            &["traditional", "banquet"],
            "fountain square",
            "₼₼₼",
            4.7,
            Some("fine_dining"),
        ),
        venue(
            "chinar",
            "Chinar",
            &["pan-asian"],
            &["rooftop", "business"],
            "downtown",
            "₼₼₼₼",
            4.5,
            Some("fine_dining"),
        ),
        venue(
            "dolma-house",
            "Dolma House",
            &["azerbaijani"],
            &["traditional", "outdoor"],
            "old city",
            "25-40 AZN",
            4.0,
            Some("casual"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_directory_ids_are_unique() {
        let pool = demo_directory();
        let mut ids: Vec<_> = pool.iter().map(|v| v.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), pool.len());
    }

    #[test]
    fn test_demo_prices_all_parse() {
        for venue in demo_directory() {
            assert!(venue.price_tier().is_some(), "unparsable price for {}", venue.id);
        }
    }
}
