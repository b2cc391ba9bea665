use chrono::Utc;

use crate::auth::sanitize_input;
use crate::documents::documents_model::{DocumentPayload, DocumentType, LetterRequest};
use crate::events::EventRecord;
use crate::pricing::{BoothTier, PricingCalculation};
use crate::settings::{self, DEFAULT_AUDIENCE, FOUNDER};
use crate::utils::currency_utils::format_currency;

const MAX_FREE_TEXT_LEN: usize = 500;

/// Assembles document payloads from resolved events and pricing
/// calculations. The DOCX/PDF renderers downstream consume the payload
/// as-is.
pub struct DocumentService;

impl DocumentService {
    /// Builds the payload for a single-event letter.
    pub fn build_payload(
        event: &EventRecord,
        calculation: &PricingCalculation,
        document_type: DocumentType,
        request: &LetterRequest,
    ) -> DocumentPayload {
        let booth_selected = calculation.booth_tier != BoothTier::NoBooth;

        let agreement_date = match document_type {
            DocumentType::Loa => Some(
                request
                    .agreement_date
                    .unwrap_or_else(|| Utc::now().date_naive())
                    .format("%B %-d, %Y")
                    .to_string(),
            ),
            DocumentType::Lor => None,
        };

        DocumentPayload {
            company_name: sanitize_input(&request.company_name, MAX_FREE_TEXT_LEN),
            company_address: request.company_address.clone(),

            meeting_name: settings::asco_event_name(&event.meeting_name, request.use_best_of_asco),
            meeting_date_long: event.meeting_date_long.clone(),
            venue: event.venue.clone(),
            city_state: event.city_state.clone(),

            booth_selected,
            booth_tier: booth_selected.then(|| calculation.booth_tier.label().to_string()),
            booth_price: booth_selected.then_some(calculation.booth_price),
            add_on_keys: calculation.add_on_keys.clone(),
            add_ons_total: calculation.add_ons_total,

            subtotal: calculation.subtotal,
            discount_applied: calculation.discount_amount,
            final_total: calculation.rounded_total,
            amount_currency: format_currency(calculation.rounded_total),

            additional_info: request
                .additional_info
                .as_deref()
                .map(|t| sanitize_input(t, MAX_FREE_TEXT_LEN)),
            additional_info_lead_in: request.additional_info_lead_in.clone(),
            additional_info_bullets: request.additional_info_bullets.clone(),

            attendance_expected: event.expected_attendance,
            audience_list: DEFAULT_AUDIENCE.to_string(),

            agreement_date,
            signature_person: request
                .signature_person
                .clone()
                .unwrap_or_else(|| format!("{} - {}", FOUNDER.name, FOUNDER.title)),

            document_type,
            event_year: event.year(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventCatalog;
    use crate::pricing::{Discount, PricingEngine};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn denver_event() -> EventRecord {
        EventCatalog::builtin()
            .find_by_name("2026 ASCO Direct Denver")
            .unwrap()
            .clone()
    }

    fn request(company: &str) -> LetterRequest {
        LetterRequest {
            company_name: company.to_string(),
            ..LetterRequest::default()
        }
    }

    #[test]
    fn lor_payload_carries_event_and_pricing() {
        let event = denver_event();
        let engine = PricingEngine::default();
        let calc = engine.calculate(
            BoothTier::Standard2Day,
            &["wifi_sponsorship".to_string()],
            2026,
            Discount::None,
        );

        let payload = DocumentService::build_payload(
            &event,
            &calc,
            DocumentType::Lor,
            &request("Acme Oncology"),
        );

        assert_eq!(payload.company_name, "Acme Oncology");
        assert_eq!(payload.meeting_name, "2026 ASCO Direct Denver");
        assert_eq!(payload.venue, "Denver Marriott Westminster");
        assert!(payload.booth_selected);
        assert_eq!(
            payload.booth_tier.as_deref(),
            Some("Standard Booth (2-Day Event)")
        );
        assert_eq!(payload.subtotal, dec!(10500));
        assert_eq!(payload.amount_currency, "$10,500.00");
        assert_eq!(payload.event_year, 2026);
        assert!(payload.agreement_date.is_none());
        assert_eq!(payload.attendance_expected, Some(60));
    }

    #[test]
    fn loa_payload_formats_agreement_date() {
        let event = denver_event();
        let engine = PricingEngine::default();
        let calc = engine.calculate(BoothTier::Platinum, &[], 2026, Discount::None);

        let mut req = request("Acme Oncology");
        req.agreement_date = NaiveDate::from_ymd_opt(2026, 3, 9);

        let payload =
            DocumentService::build_payload(&event, &calc, DocumentType::Loa, &req);

        assert_eq!(payload.agreement_date.as_deref(), Some("March 9, 2026"));
        assert!(payload.signature_person.starts_with("Sarah Louden"));
    }

    #[test]
    fn no_booth_payload_omits_booth_fields() {
        let event = denver_event();
        let engine = PricingEngine::default();
        let calc = engine.calculate(
            BoothTier::NoBooth,
            &["program_ad_full".to_string()],
            2026,
            Discount::None,
        );

        let payload = DocumentService::build_payload(
            &event,
            &calc,
            DocumentType::Lor,
            &request("Acme Oncology"),
        );

        assert!(!payload.booth_selected);
        assert!(payload.booth_tier.is_none());
        assert!(payload.booth_price.is_none());
        assert_eq!(payload.add_ons_total, dec!(2000));
    }

    #[test]
    fn asco_naming_override_rebrands_meeting_name() {
        let event = denver_event();
        let engine = PricingEngine::default();
        let calc = engine.calculate(BoothTier::Standard2Day, &[], 2026, Discount::None);

        let mut req = request("Acme Oncology");
        req.use_best_of_asco = Some(true);

        let payload =
            DocumentService::build_payload(&event, &calc, DocumentType::Lor, &req);
        assert_eq!(payload.meeting_name, "2026 Best of ASCO Denver");
    }

    #[test]
    fn free_text_is_sanitized() {
        let event = denver_event();
        let engine = PricingEngine::default();
        let calc = engine.calculate(BoothTier::Standard2Day, &[], 2026, Discount::None);

        let mut req = request("Acme <Oncology>");
        req.additional_info = Some("See notes; {urgent}".to_string());

        let payload =
            DocumentService::build_payload(&event, &calc, DocumentType::Lor, &req);
        assert_eq!(payload.company_name, "Acme Oncology");
        assert_eq!(payload.additional_info.as_deref(), Some("See notes urgent"));
    }
}
