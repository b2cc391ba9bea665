// End-to-end flow: resolve a spreadsheet-style event name, price the
// selections, and assemble the document payload.

use lorgen_core::documents::{DocumentService, DocumentType, LetterRequest};
use lorgen_core::events::EventCatalog;
use lorgen_core::matcher::{EventMatcher, MatchConfidence};
use lorgen_core::pricing::{BoothTier, Discount, PricingEngine};
use rust_decimal_macros::dec;

#[test]
fn spreadsheet_row_to_lor_payload() {
    let catalog = EventCatalog::builtin();
    let matcher = EventMatcher::new(catalog);
    let engine = PricingEngine::default();

    // Spreadsheet cell spelled differently from the catalog entry
    let result = matcher.resolve("Best of ASCO Denver 2026");
    assert!(result.confidence.is_auto_fill());
    let event = result.event.expect("resolved event");
    assert_eq!(event.meeting_name, "2026 ASCO Direct Denver");

    let calculation = engine.calculate(
        event.default_tier,
        &["wifi_sponsorship".to_string(), "program_ad_full".to_string()],
        event.year(),
        Discount::Minus10,
    );
    assert_eq!(calculation.subtotal, dec!(12500));
    assert_eq!(calculation.final_total, dec!(11250.0));
    assert_eq!(calculation.rounded_total, dec!(11250));

    let request = LetterRequest {
        company_name: "Acme Oncology".to_string(),
        ..LetterRequest::default()
    };
    let payload =
        DocumentService::build_payload(&event, &calculation, DocumentType::Lor, &request);

    assert_eq!(payload.meeting_name, "2026 ASCO Direct Denver");
    assert_eq!(payload.amount_currency, "$11,250.00");
    assert_eq!(payload.event_year, 2026);
    assert_eq!(payload.document_type, DocumentType::Lor);
}

#[test]
fn bulk_rows_resolve_independently_and_deterministically() {
    let catalog = EventCatalog::builtin();
    let matcher = EventMatcher::new(catalog);

    let rows = [
        "2026 ASCO Direct Denver",
        "asco direct hawaii",
        "West Oncology Conference 2026",
        "Totally Unknown Gala",
        "",
    ];

    let first_pass: Vec<_> = rows.iter().map(|row| matcher.resolve(row)).collect();
    let second_pass: Vec<_> = rows.iter().map(|row| matcher.resolve(row)).collect();
    assert_eq!(first_pass, second_pass);

    assert_eq!(first_pass[0].confidence, MatchConfidence::Exact);
    assert!(first_pass[1].confidence.is_auto_fill());
    assert_eq!(
        first_pass[1].event.as_ref().unwrap().meeting_name,
        "2026 ASCO Direct Hawaii"
    );
    assert_eq!(first_pass[2].confidence, MatchConfidence::Exact);
    assert_eq!(first_pass[3].confidence, MatchConfidence::None);
    assert_eq!(first_pass[4].confidence, MatchConfidence::None);
}

#[test]
fn matcher_is_shareable_across_worker_threads() {
    use std::sync::Arc;

    let matcher = Arc::new(EventMatcher::new(EventCatalog::builtin()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let matcher = Arc::clone(&matcher);
            std::thread::spawn(move || matcher.resolve("ASCO Direct Denver"))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for result in &results {
        assert_eq!(result, &results[0]);
    }
}

#[test]
fn low_confidence_rows_get_disambiguation_candidates() {
    let catalog = EventCatalog::builtin();
    let matcher = EventMatcher::new(catalog);

    let result = matcher.resolve("Denver oncology thing");
    assert!(!result.confidence.is_auto_fill());

    let candidates = matcher.find_similar("Denver oncology thing", 5);
    assert!(!candidates.is_empty());
    assert!(candidates.len() <= 5);
}

#[test]
fn default_tier_pricing_matches_catalog_tier() {
    let catalog = EventCatalog::builtin();
    let engine = PricingEngine::default();

    let event = catalog.find_by_name("2026 ASCO Direct Denver").unwrap();
    assert_eq!(event.default_tier, BoothTier::Standard2Day);

    let calculation = engine.calculate(event.default_tier, &[], event.year(), Discount::None);
    assert_eq!(calculation.rounded_total, dec!(7500));
}
