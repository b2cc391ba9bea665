use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the letter was produced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "multi-meeting")]
    MultiMeeting,
    #[serde(rename = "excel-bulk")]
    ExcelBulk,
}

/// Caller-supplied fields for one audit record. Free-text fields are
/// sanitized by the log before persistence.
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub company_name: String,
    pub meeting_name: String,
    pub document_type: String,
    pub booth_selected: Option<String>,
    pub add_ons: Vec<String>,
    pub total_cost: Decimal,
    pub details: String,
    pub mode: GenerationMode,
}

/// One persisted letter-generation record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub company_name: String,
    pub meeting_name: String,
    pub document_type: String,
    pub booth_selected: Option<String>,
    pub add_ons: Vec<String>,
    pub total_cost: Decimal,
    pub details: String,
    pub mode: GenerationMode,
}

impl AuditEntry {
    pub fn create(new_entry: NewAuditEntry) -> Self {
        AuditEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            company_name: new_entry.company_name,
            meeting_name: new_entry.meeting_name,
            document_type: new_entry.document_type,
            booth_selected: new_entry.booth_selected,
            add_ons: new_entry.add_ons,
            total_cost: new_entry.total_cost,
            details: new_entry.details,
            mode: new_entry.mode,
        }
    }
}
