use rust_decimal::Decimal;

use crate::documents::{DocumentPayload, DocumentType};
use crate::packages::packages_model::{
    MultiMeetingPackage, PackageEvent, PackageEventConfig, PackageSummary,
};
use crate::pricing::{BoothTier, Discount, PricingEngine};
use crate::settings::{DEFAULT_AUDIENCE, FOUNDER};
use crate::utils::currency_utils::format_currency;

/// Builds multi-meeting sponsorship packages: prices each event with the
/// engine and aggregates into one combined opportunity.
pub struct PackageService {
    engine: PricingEngine,
}

impl PackageService {
    pub fn new(engine: PricingEngine) -> Self {
        PackageService { engine }
    }

    pub fn create_package(
        &self,
        company_name: &str,
        configs: Vec<PackageEventConfig>,
        document_type: DocumentType,
        additional_info: Option<String>,
        company_address: Option<String>,
    ) -> MultiMeetingPackage {
        let events = configs
            .into_iter()
            .map(|config| {
                let pricing = self.engine.calculate(
                    config.booth_tier,
                    &config.add_on_keys,
                    config.event.year(),
                    Discount::None,
                );
                PackageEvent {
                    event: config.event,
                    booth_tier: config.booth_tier,
                    add_on_keys: config.add_on_keys,
                    booth_cost: pricing.booth_price,
                    addon_cost: pricing.add_ons_total,
                }
            })
            .collect();

        MultiMeetingPackage {
            company_name: company_name.to_string(),
            company_address,
            document_type,
            additional_info,
            events,
        }
    }

    /// Document payload for a package letter: synthetic event fields plus
    /// the formatted per-event listing in the additional-info block.
    pub fn package_payload(&self, package: &MultiMeetingPackage) -> DocumentPayload {
        let final_total = package.final_total();

        DocumentPayload {
            company_name: package.company_name.clone(),
            company_address: package.company_address.clone(),

            meeting_name: format!("Multi-Meeting Package ({} Events)", package.events.len()),
            meeting_date_long: "Various Dates (2025-2026)".to_string(),
            venue: "Multiple Venues".to_string(),
            city_state: "Various Locations".to_string(),

            booth_selected: package.total_booth_cost() > Decimal::ZERO,
            booth_tier: Some("Multi-Meeting Package".to_string()),
            booth_price: Some(package.total_booth_cost()),
            // Add-ons are event-specific inside a package
            add_on_keys: Vec::new(),
            add_ons_total: package.total_addon_cost(),

            subtotal: final_total,
            discount_applied: Decimal::ZERO,
            final_total,
            amount_currency: format_currency(final_total),

            additional_info: Some(
                package
                    .additional_info
                    .clone()
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| Self::event_list_text(&package.events)),
            ),
            additional_info_lead_in: None,
            additional_info_bullets: Vec::new(),

            attendance_expected: None,
            audience_list: DEFAULT_AUDIENCE.to_string(),

            agreement_date: None,
            signature_person: format!("{} - {}", FOUNDER.name, FOUNDER.title),

            document_type: package.document_type,
            event_year: 2025,
        }
    }

    /// Formatted per-event listing for the letter body.
    pub fn event_list_text(events: &[PackageEvent]) -> String {
        let mut lines =
            vec!["This multi-meeting package includes the following events:".to_string()];
        lines.push(String::new());

        for package_event in events {
            let event = &package_event.event;
            lines.push(format!("• {}", event.meeting_name));
            lines.push(format!("  Date: {}", event.meeting_date_long));
            lines.push(format!("  Location: {}", event.city_state));

            if package_event.booth_cost > Decimal::ZERO {
                lines.push(format!(
                    "  Booth: {}",
                    format_currency(package_event.booth_cost)
                ));
            }
            if package_event.addon_cost > Decimal::ZERO {
                lines.push(format!(
                    "  Add-ons: {}",
                    format_currency(package_event.addon_cost)
                ));
            }

            lines.push(String::new());
        }

        lines.join("\n")
    }

    pub fn summary(&self, package: &MultiMeetingPackage) -> PackageSummary {
        let event_count = package.events.len();
        let total_booth_cost = package.total_booth_cost();
        let total_addon_cost = package.total_addon_cost();
        let final_total = package.final_total();
        let average_per_event = if event_count > 0 {
            final_total / Decimal::from(event_count as u64)
        } else {
            Decimal::ZERO
        };

        PackageSummary {
            event_count,
            total_booth_cost,
            total_addon_cost,
            final_total,
            average_per_event,
            total_booth_cost_formatted: format_currency(total_booth_cost),
            total_addon_cost_formatted: format_currency(total_addon_cost),
            final_total_formatted: format_currency(final_total),
        }
    }
}

impl Default for PackageService {
    fn default() -> Self {
        PackageService::new(PricingEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventCatalog;
    use rust_decimal_macros::dec;

    fn config(name: &str, tier: BoothTier, add_ons: &[&str]) -> PackageEventConfig {
        let event = EventCatalog::builtin()
            .find_by_name(name)
            .unwrap_or_else(|| panic!("missing builtin event {}", name))
            .clone();
        PackageEventConfig {
            event,
            booth_tier: tier,
            add_on_keys: add_ons.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn two_event_package() -> MultiMeetingPackage {
        let service = PackageService::default();
        service.create_package(
            "Acme Oncology",
            vec![
                config("2025 ESMO USA West", BoothTier::Standard2Day, &[]),
                config(
                    "2026 ASCO Direct Denver",
                    BoothTier::Standard2Day,
                    &["charging_stations"],
                ),
            ],
            DocumentType::Lor,
            None,
            None,
        )
    }

    #[test]
    fn package_aggregates_booth_and_add_on_costs() {
        let package = two_event_package();

        assert_eq!(package.total_booth_cost(), dec!(15000));
        // 2026 charging station price applies to the 2026 event
        assert_eq!(package.total_addon_cost(), dec!(3000));
        assert_eq!(package.final_total(), dec!(18000));
    }

    #[test]
    fn package_payload_uses_synthetic_event_fields() {
        let service = PackageService::default();
        let package = two_event_package();
        let payload = service.package_payload(&package);

        assert_eq!(payload.meeting_name, "Multi-Meeting Package (2 Events)");
        assert_eq!(payload.venue, "Multiple Venues");
        assert!(payload.booth_selected);
        assert_eq!(payload.final_total, dec!(18000));
        assert_eq!(payload.amount_currency, "$18,000.00");
        assert_eq!(payload.discount_applied, Decimal::ZERO);
    }

    #[test]
    fn package_payload_defaults_to_event_list_text() {
        let service = PackageService::default();
        let package = two_event_package();
        let payload = service.package_payload(&package);

        let info = payload.additional_info.unwrap();
        assert!(info.starts_with("This multi-meeting package includes"));
        assert!(info.contains("• 2026 ASCO Direct Denver"));
        assert!(info.contains("Booth: $7,500.00"));
        assert!(info.contains("Add-ons: $3,000.00"));
    }

    #[test]
    fn provided_additional_info_wins_over_event_list() {
        let service = PackageService::default();
        let mut package = two_event_package();
        package.additional_info = Some("Custom terms apply.".to_string());

        let payload = service.package_payload(&package);
        assert_eq!(payload.additional_info.as_deref(), Some("Custom terms apply."));
    }

    #[test]
    fn summary_reports_counts_and_average() {
        let service = PackageService::default();
        let package = two_event_package();
        let summary = service.summary(&package);

        assert_eq!(summary.event_count, 2);
        assert_eq!(summary.average_per_event, dec!(9000));
        assert_eq!(summary.final_total_formatted, "$18,000.00");
    }

    #[test]
    fn empty_package_has_zero_totals() {
        let service = PackageService::default();
        let package =
            service.create_package("Acme", vec![], DocumentType::Lor, None, None);
        let summary = service.summary(&package);

        assert_eq!(summary.event_count, 0);
        assert_eq!(summary.final_total, Decimal::ZERO);
        assert_eq!(summary.average_per_event, Decimal::ZERO);
    }
}
