use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::documents::DocumentType;
use crate::events::EventRecord;
use crate::pricing::BoothTier;

/// One event's selections inside a package request.
#[derive(Debug, Clone)]
pub struct PackageEventConfig {
    pub event: EventRecord,
    pub booth_tier: BoothTier,
    pub add_on_keys: Vec<String>,
}

/// One priced event inside an assembled package.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageEvent {
    pub event: EventRecord,
    pub booth_tier: BoothTier,
    pub add_on_keys: Vec<String>,
    pub booth_cost: Decimal,
    pub addon_cost: Decimal,
}

impl PackageEvent {
    pub fn event_total(&self) -> Decimal {
        self.booth_cost + self.addon_cost
    }
}

/// A multi-meeting sponsorship: several events sold as one opportunity,
/// with a single combined total. Discounts do not apply inside packages.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MultiMeetingPackage {
    pub company_name: String,
    pub company_address: Option<String>,
    pub document_type: DocumentType,
    pub additional_info: Option<String>,
    pub events: Vec<PackageEvent>,
}

impl MultiMeetingPackage {
    pub fn total_booth_cost(&self) -> Decimal {
        self.events.iter().map(|e| e.booth_cost).sum()
    }

    pub fn total_addon_cost(&self) -> Decimal {
        self.events.iter().map(|e| e.addon_cost).sum()
    }

    pub fn final_total(&self) -> Decimal {
        self.total_booth_cost() + self.total_addon_cost()
    }
}

/// Summary statistics for a package, with formatted currency strings for
/// display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary {
    pub event_count: usize,
    pub total_booth_cost: Decimal,
    pub total_addon_cost: Decimal,
    pub final_total: Decimal,
    pub average_per_event: Decimal,
    pub total_booth_cost_formatted: String,
    pub total_addon_cost_formatted: String,
    pub final_total_formatted: String,
}
