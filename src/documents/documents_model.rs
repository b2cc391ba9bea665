use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Document kinds produced by the tool.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    #[serde(rename = "LOR")]
    Lor,
    #[serde(rename = "LOA")]
    Loa,
}

impl DocumentType {
    pub fn key(&self) -> &'static str {
        match self {
            DocumentType::Lor => "LOR",
            DocumentType::Loa => "LOA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Lor => "Letter of Request",
            DocumentType::Loa => "Letter of Agreement",
        }
    }
}

/// Caller-supplied inputs for one letter: the sponsor and any free-text
/// framing. Event and pricing come from the resolver and the pricing
/// engine.
#[derive(Debug, Clone, Default)]
pub struct LetterRequest {
    pub company_name: String,
    pub company_address: Option<String>,
    pub additional_info: Option<String>,
    pub additional_info_lead_in: Option<String>,
    pub additional_info_bullets: Vec<String>,
    /// LOA only; defaults to the current date when absent.
    pub agreement_date: Option<NaiveDate>,
    /// Defaults to the founder signatory.
    pub signature_person: Option<String>,
    /// Overrides the global ASCO naming toggle for this letter.
    pub use_best_of_asco: Option<bool>,
}

/// Complete data payload for rendering one LOR or LOA.
///
/// Everything the downstream DOCX/PDF renderer needs, fully resolved:
/// no lookups or pricing arithmetic remain after this point.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    // Company information
    pub company_name: String,
    pub company_address: Option<String>,

    // Event information
    pub meeting_name: String,
    pub meeting_date_long: String,
    pub venue: String,
    pub city_state: String,

    // Booth and pricing
    pub booth_selected: bool,
    pub booth_tier: Option<String>,
    pub booth_price: Option<Decimal>,
    pub add_on_keys: Vec<String>,
    pub add_ons_total: Decimal,

    // Totals and discounts
    pub subtotal: Decimal,
    pub discount_applied: Decimal,
    pub final_total: Decimal,
    pub amount_currency: String,

    // Additional information
    pub additional_info: Option<String>,
    pub additional_info_lead_in: Option<String>,
    pub additional_info_bullets: Vec<String>,

    // Attendance
    pub attendance_expected: Option<u32>,
    pub audience_list: String,

    // LOA-specific fields
    pub agreement_date: Option<String>,
    pub signature_person: String,

    // Document metadata
    pub document_type: DocumentType,
    pub event_year: i32,
}
