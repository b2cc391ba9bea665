use std::path::Path;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::warn;

use crate::events::events_errors::CatalogError;
use crate::events::events_model::EventRecord;
use crate::matcher::normalize_event_name;
use crate::pricing::BoothTier;

/// Validated, read-only reference list of known events.
///
/// The catalog is loaded once per process lifetime and shared behind an
/// `Arc`; resolution calls never mutate it.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<EventRecord>,
}

impl EventCatalog {
    /// Validates and wraps a list of event records.
    ///
    /// An empty list or an entry with a blank required field is a
    /// configuration fault and aborts construction. Entries whose names
    /// normalize identically are kept (first occurrence wins at match
    /// time) and reported as a diagnostic.
    pub fn new(events: Vec<EventRecord>) -> Result<Self, CatalogError> {
        if events.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, event) in events.iter().enumerate() {
            Self::check_field(index, "meetingName", &event.meeting_name)?;
            Self::check_field(index, "meetingDateLong", &event.meeting_date_long)?;
            Self::check_field(index, "venue", &event.venue)?;
            Self::check_field(index, "cityState", &event.city_state)?;
        }

        let mut seen: Vec<String> = Vec::with_capacity(events.len());
        for event in &events {
            let normalized = normalize_event_name(&event.meeting_name);
            if seen.contains(&normalized) {
                warn!(
                    "Duplicate normalized event name in catalog: '{}'; first occurrence wins",
                    event.meeting_name
                );
            }
            seen.push(normalized);
        }

        Ok(EventCatalog { events })
    }

    fn check_field(index: usize, field: &'static str, value: &str) -> Result<(), CatalogError> {
        if value.trim().is_empty() {
            return Err(CatalogError::MissingField { index, field });
        }
        Ok(())
    }

    /// The catalog shipped with the application (2025 + 2026 seasons).
    pub fn builtin() -> Arc<EventCatalog> {
        BUILTIN_CATALOG.clone()
    }

    /// Loads a deployment-supplied catalog from a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let events: Vec<EventRecord> = serde_json::from_str(json)?;
        Self::new(events)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn by_year(&self, year: i32) -> Vec<&EventRecord> {
        self.events.iter().filter(|e| e.year() == year).collect()
    }

    /// Exact name lookup, no normalization.
    pub fn find_by_name(&self, name: &str) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.meeting_name == name)
    }

    /// Case-insensitive substring search over name, venue and city/state.
    pub fn search(&self, query: &str) -> Vec<&EventRecord> {
        let query_lower = query.to_lowercase();
        self.events
            .iter()
            .filter(|e| {
                let searchable = format!(
                    "{} {} {}",
                    e.meeting_name.to_lowercase(),
                    e.city_state.to_lowercase(),
                    e.venue.to_lowercase()
                );
                searchable.contains(&query_lower)
            })
            .collect()
    }
}

lazy_static! {
    static ref BUILTIN_CATALOG: Arc<EventCatalog> = Arc::new(
        EventCatalog::new(builtin_events()).expect("built-in catalog is valid")
    );
}

fn event(
    meeting_name: &str,
    meeting_date_long: &str,
    venue: &str,
    city_state: &str,
    default_tier: BoothTier,
    expected_attendance: Option<u32>,
) -> EventRecord {
    EventRecord {
        meeting_name: meeting_name.to_string(),
        meeting_date_long: meeting_date_long.to_string(),
        venue: venue.to_string(),
        city_state: city_state.to_string(),
        default_tier,
        expected_attendance,
    }
}

/// 2025 and 2026 seasons. Kept in chronological order per year; order
/// matters because it is the deterministic tie-break for matching.
fn builtin_events() -> Vec<EventRecord> {
    use BoothTier::*;

    vec![
        // 2025
        event(
            "2025 Astera Cancer Care Annual Retreat",
            "September 27, 2025",
            "Ocean Place Resort and Spa",
            "Long Branch, NJ",
            Standard1Day,
            None,
        ),
        event(
            "2025 Cancer Updates GU and Lung, Memphis, TN",
            "September 30, 2025",
            "Hilton Memphis",
            "Memphis, TN",
            Standard1Day,
            None,
        ),
        event(
            "2025 West Oncology APP Dinner",
            "October 9, 2025",
            "Hilton Memphis",
            "Memphis, TN",
            Standard1Day,
            None,
        ),
        event(
            "2025 Empower (Patient Meeting)",
            "October 11, 2025",
            "Farmer's Table",
            "Boca Raton, FL",
            Standard1Day,
            None,
        ),
        event(
            "2025 Northwell Health Second Annual Liver Cancer Symposium",
            "October 17, 2025",
            "The Garden City Hotel",
            "Garden City, NY",
            Standard1Day,
            None,
        ),
        event(
            "2025 Cancer Updates GI and Breast, Boston, MA",
            "October 30, 2025",
            "Battery Wharf Hotel Boston Waterfront",
            "Boston, MA",
            Standard1Day,
            None,
        ),
        event(
            "2025 ESMO USA West",
            "November 1–2, 2025",
            "The Antlers",
            "Colorado Springs, CO",
            Standard2Day,
            None,
        ),
        event(
            "2025 ESMO USA East",
            "November 1–2, 2025",
            "The Ritz-Carlton Orlando",
            "Orlando, FL",
            Standard2Day,
            None,
        ),
        event(
            "2025 Northwell Health Multidisciplinary Head and Neck Cancer Symposium",
            "November 1, 2025",
            "The Garden City Hotel",
            "Garden City, NY",
            Standard1Day,
            None,
        ),
        event(
            "2025 Cancer Updates Heme and GU, Denver, CO",
            "December 4, 2025",
            "Denver Marriott Westminster",
            "Denver, CO",
            Standard1Day,
            None,
        ),
        event(
            "2025 Northwell Best of Practice Impacting Science",
            "December 5, 2025",
            "The Garden City Hotel",
            "Garden City, NY",
            Standard1Day,
            None,
        ),
        event(
            "2025 Oncology Update Conference presented by High Plains Oncology Professionals-HPOP",
            "December 6, 2025",
            "Fort Collins Marriott",
            "Fort Collins, CO",
            Standard1Day,
            None,
        ),
        event(
            "2025 (Northwell) 2nd Annual New York Pancreatic Cancer Consortium",
            "December 12, 2025",
            "Martinique New York on Broadway",
            "Manhattan, NY",
            Platinum,
            None,
        ),
        // 2026
        event(
            "2026 Best of Breast Conference",
            "January 17-18, 2026",
            "Beach House Ft. Lauderdale",
            "Fort Lauderdale, FL",
            BestOf,
            Some(50),
        ),
        event(
            "2026 Cancer Updates GI and Breast, Princeton, NJ",
            "January 22, 2026",
            "Princeton Marriott at Forrestal",
            "Princeton, NJ",
            Standard1Day,
            Some(30),
        ),
        event(
            "2026 West Oncology Conference",
            "January 31-February 1, 2026",
            "Hilton Memphis",
            "Memphis, TN",
            Standard2Day,
            Some(50),
        ),
        event(
            "2026 Best of Hematology Conference",
            "February 7-8, 2026",
            "The Hythe",
            "Vail, CO",
            BestOf,
            Some(30),
        ),
        event(
            "2026 ASCO Direct GI",
            "February 7-8, 2026",
            "The Rittenhouse",
            "Philadelphia, PA",
            Standard2Day,
            Some(40),
        ),
        event(
            "2026 Cancer Updates GI and Lung, Denver, CO",
            "March 12, 2026",
            "Denver Marriott Westminster",
            "Denver, CO",
            Standard1Day,
            Some(30),
        ),
        event(
            "2026 ASCO Direct GU",
            "March 14-15, 2026",
            "The Hyatt",
            "Boston, MA",
            Standard2Day,
            Some(40),
        ),
        event(
            "2026 Oncology Clinical Updates - Review and Renew Sedona",
            "April 11-12, 2026",
            "Hilton Sedona Resort at Bell Rock",
            "Sedona, AZ",
            Standard2Day,
            Some(30),
        ),
        event(
            "2026 ASCO Direct Puerto Rico",
            "June 13-14, 2026",
            "Hyatt Regency Grand Reserve",
            "San Juan, PR",
            Standard2Day,
            Some(60),
        ),
        event(
            "2026 ASCO Direct Austin",
            "June 13-14, 2026",
            "W Austin",
            "Austin, TX",
            Standard2Day,
            Some(60),
        ),
        event(
            "2026 ASCO Direct Los Angeles",
            "June 13-14, 2026",
            "Le Meridien",
            "Los Angeles, CA",
            Standard2Day,
            Some(50),
        ),
        event(
            "2026 ASCO Direct Hawaii",
            "June 27-28, 2026",
            "Sheraton Waikiki Beach Resort",
            "Honolulu, HI",
            Standard2Day,
            Some(100),
        ),
        event(
            "2026 ASCO Direct Washington DC",
            "June 27-28, 2026",
            "Four Seasons Hotel Washington",
            "Washington DC",
            Standard2Day,
            Some(60),
        ),
        event(
            "2026 ASCO Direct Denver",
            "June 27-28, 2026",
            "Denver Marriott Westminster",
            "Denver, CO",
            Standard2Day,
            Some(60),
        ),
        event(
            "2026 Cancer Updates Heme and Breast, Michigan",
            "July 9, 2026",
            "The Vanguard Ann Arbor, Autograph Collection",
            "Ann Arbor, MI",
            Standard1Day,
            Some(30),
        ),
        event(
            "2026 MDONS Conference",
            "September 18, 2026",
            "The Westin Westminster",
            "Denver, CO",
            Standard1Day,
            Some(200),
        ),
        event(
            "2026 Pathways Conference",
            "September 25-26, 2026",
            "Hotel Zaza Houston",
            "Houston, TX",
            Standard2Day,
            None,
        ),
        event(
            "2026 Empower GI Conference",
            "November 7, 2026",
            "Washington DC",
            "Washington DC",
            Standard1Day,
            None,
        ),
        event(
            "2026 ESMO USA West",
            "November 14-15, 2026",
            "Colorado Springs, CO",
            "Colorado Springs, CO",
            Standard2Day,
            None,
        ),
        event(
            "2026 ESMO USA East",
            "November 14-15, 2026",
            "Orlando, FL",
            "Orlando, FL",
            Standard2Day,
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_is_a_configuration_error() {
        let result = EventCatalog::new(vec![]);
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let mut record = builtin_events().remove(0);
        record.venue = "  ".to_string();
        let result = EventCatalog::new(vec![record]);
        assert!(matches!(
            result,
            Err(CatalogError::MissingField { index: 0, field: "venue" })
        ));
    }

    #[test]
    fn builtin_catalog_loads_and_covers_both_years() {
        let catalog = EventCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(!catalog.by_year(2025).is_empty());
        assert!(!catalog.by_year(2026).is_empty());
    }

    #[test]
    fn find_by_name_requires_exact_name() {
        let catalog = EventCatalog::builtin();
        assert!(catalog.find_by_name("2026 ASCO Direct Denver").is_some());
        assert!(catalog.find_by_name("asco direct denver").is_none());
    }

    #[test]
    fn search_covers_name_city_and_venue() {
        let catalog = EventCatalog::builtin();
        let by_city = catalog.search("memphis");
        assert!(by_city.len() >= 2);
        let by_venue = catalog.search("rittenhouse");
        assert_eq!(by_venue.len(), 1);
        assert_eq!(by_venue[0].meeting_name, "2026 ASCO Direct GI");
    }

    #[test]
    fn json_round_trip_preserves_records() {
        let original = builtin_events();
        let json = serde_json::to_string(&original).unwrap();
        let catalog = EventCatalog::from_json_str(&json).unwrap();
        assert_eq!(catalog.events(), original.as_slice());
    }
}
