//! Booking intent extracted from a reservation-style utterance.

use crate::venue::VenueRecord;
use serde::{Deserialize, Serialize};

/// Relative day words the detector recognises literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeDay {
    Today,
    Tomorrow,
}

impl std::fmt::Display for RelativeDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Today => write!(f, "today"),
            Self::Tomorrow => write!(f, "tomorrow"),
        }
    }
}

/// A detected request to reserve a specific venue. Produced fresh per query.
///
/// `venue` stays `None` when no directory entry cleared the name-match
/// confidence threshold; the composer then asks a clarifying question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingIntent {
    pub venue: Option<VenueRecord>,
    pub party_size: Option<u8>,
    /// 24-hour "HH:MM".
    pub time: Option<String>,
    pub date: Option<RelativeDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_day_display() {
        assert_eq!(RelativeDay::Today.to_string(), "today");
        assert_eq!(RelativeDay::Tomorrow.to_string(), "tomorrow");
    }

    #[test]
    fn test_relative_day_serde_round_trip() {
        let json = serde_json::to_string(&RelativeDay::Tomorrow).unwrap();
        assert_eq!(json, "\"tomorrow\"");
        let back: RelativeDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RelativeDay::Tomorrow);
    }
}
