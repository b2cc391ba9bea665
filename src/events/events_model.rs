use serde::{Deserialize, Serialize};

use crate::pricing::BoothTier;

/// A single conference event from the reference catalog.
///
/// Records are constructed once at load time and shared read-only for the
/// lifetime of the process. Identity is the full `meeting_name`, which is
/// unique within a catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Full event name, e.g. "2026 ASCO Direct Denver"
    pub meeting_name: String,
    /// Human-readable date, e.g. "June 27-28, 2026"
    pub meeting_date_long: String,
    pub venue: String,
    /// City and state, e.g. "Denver, CO"
    pub city_state: String,
    /// Default booth tier offered for this event
    pub default_tier: BoothTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_attendance: Option<u32>,
}

impl EventRecord {
    /// Event year, derived from the meeting name. Names without a year
    /// default to 2025, matching the catalog's convention.
    pub fn year(&self) -> i32 {
        if self.meeting_name.contains("2026") {
            2026
        } else {
            2025
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> EventRecord {
        EventRecord {
            meeting_name: name.to_string(),
            meeting_date_long: "June 27-28, 2026".to_string(),
            venue: "Denver Marriott Westminster".to_string(),
            city_state: "Denver, CO".to_string(),
            default_tier: BoothTier::Standard2Day,
            expected_attendance: Some(60),
        }
    }

    #[test]
    fn year_is_derived_from_meeting_name() {
        assert_eq!(record("2026 ASCO Direct Denver").year(), 2026);
        assert_eq!(record("2025 ESMO USA West").year(), 2025);
    }

    #[test]
    fn year_defaults_to_2025_when_name_has_no_year() {
        assert_eq!(record("West Oncology APP Dinner").year(), 2025);
    }
}
