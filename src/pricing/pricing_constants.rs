//! Shipped price tables and booth marketing copy.
//!
//! These are the fallbacks used when the deployment secrets file does not
//! override a price. 2026 add-ons differ from 2025 only where noted.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::pricing::pricing_model::{AddOn, BoothTier};

/// Totals are rounded to the nearest $50 on every quote.
pub const ROUNDING_INCREMENT: Decimal = dec!(50);

pub fn default_booth_prices() -> HashMap<BoothTier, Decimal> {
    HashMap::from([
        (BoothTier::Standard1Day, dec!(5000)),
        (BoothTier::Standard2Day, dec!(7500)),
        (BoothTier::Platinum, dec!(10000)),
        (BoothTier::BestOf, dec!(10000)),
        (BoothTier::Premier, dec!(15000)),
    ])
}

/// Benefits included with every booth tier.
pub fn booth_benefits() -> Vec<String> {
    [
        "In-person exhibit booth — (1) 6' draped table and 2 chairs.",
        "(2) Full registration admissions for company representatives; additional badges available for purchase.",
        "Company logo on in-person and virtual signage.",
        "Company logo on the conference app.",
        "(1) Conference bag insert.",
        "Pre- and post-conference registration list.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn add_on(key: &str, label: &str, price: Decimal, bullets: &[&str]) -> AddOn {
    AddOn {
        key: key.to_string(),
        label: label.to_string(),
        price,
        bullets: bullets.iter().map(|s| s.to_string()).collect(),
    }
}

/// Add-on table for a given event year. Charging stations went from
/// $2,000 to $3,000 in 2026; everything else is unchanged.
pub fn default_add_ons(year: i32) -> Vec<AddOn> {
    let charging_price = if year >= 2026 { dec!(3000) } else { dec!(2000) };

    vec![
        add_on(
            "program_ad_full",
            "Program Guide Full Page Ad",
            dec!(2000),
            &["Full-page advertisement in the printed/digital program guide."],
        ),
        add_on(
            "charging_stations",
            "In-Person Charging Station",
            charging_price,
            &[
                "One branded charging station with company artwork.",
                "Includes (1) in-person company representative badge.",
            ],
        ),
        add_on(
            "wifi_sponsorship",
            "Wi-Fi Network Sponsorship",
            dec!(3000),
            &[
                "Exclusive Wi-Fi sponsorship with company logo/name on the Wi-Fi page.",
                "Includes (1) in-person company representative badge.",
            ],
        ),
        add_on(
            "platform_banner",
            "Platform Banner Ad",
            dec!(2000),
            &["Banner advertisement on the event's digital platform/lobby page."],
        ),
        add_on(
            "email_banner",
            "Email Banner Ad",
            dec!(2500),
            &["Banner placement in a national call-to-action email."],
        ),
        add_on(
            "registration_banner",
            "Registration Banner Ad",
            dec!(2000),
            &["Banner on the event registration page (typically live ~6 months)."],
        ),
        add_on(
            "networking_reception",
            "In-Person Networking Reception",
            dec!(3500),
            &[
                "On-site networking reception with food & beverage.",
                "Company logo on in-person conference signage.",
                "Literature may be available on high-top tables during the reception.",
                "Includes (2) in-person company representative badges for the whole conference.",
            ],
        ),
        add_on(
            "networking_activity",
            "Networking Activity / Excursion",
            dec!(3500),
            &[
                "Networking activity/excursion.",
                "High-top table at the activity site.",
                "Insert in branded grab-and-go snack bags plus post-conference activity.",
                "Includes (1) in-person company representative badge.",
            ],
        ),
        add_on(
            "advisory_board",
            "Advisory Board (3-hour)",
            dec!(30000),
            &[
                "3-hour advisory board with room, AV, and food & beverage.",
                "Post-event summary and guaranteed attendance.",
            ],
        ),
        add_on(
            "non_cme_session",
            "Non-CME/CE Session (45 min)",
            dec!(50000),
            &[
                "45-minute non-CME/CE symposium in a non-competitive slot.",
                "Full logistics, room and AV support.",
            ],
        ),
    ]
}

/// Categories used to group add-ons in a selection UI.
pub const ADD_ON_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Digital Marketing",
        &["platform_banner", "email_banner", "registration_banner"],
    ),
    ("Print Materials", &["program_ad_full"]),
    ("On-Site Services", &["charging_stations", "wifi_sponsorship"]),
    ("Networking", &["networking_reception", "networking_activity"]),
    ("Educational Programs", &["advisory_board", "non_cme_session"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_categorized_key_exists_in_both_year_tables() {
        for year in [2025, 2026] {
            let add_ons = default_add_ons(year);
            for (_, keys) in ADD_ON_CATEGORIES {
                for key in *keys {
                    assert!(
                        add_ons.iter().any(|a| a.key == *key),
                        "{} missing from {} table",
                        key,
                        year
                    );
                }
            }
        }
    }

    #[test]
    fn every_add_on_is_categorized_exactly_once() {
        for add_on in default_add_ons(2025) {
            let appearances = ADD_ON_CATEGORIES
                .iter()
                .flat_map(|(_, keys)| keys.iter())
                .filter(|k| **k == add_on.key)
                .count();
            assert_eq!(appearances, 1, "{}", add_on.key);
        }
    }

    #[test]
    fn booth_benefits_list_is_complete() {
        assert_eq!(booth_benefits().len(), 6);
    }
}
