use std::collections::HashMap;

use log::warn;
use rust_decimal::Decimal;

use crate::pricing::pricing_constants::{
    default_add_ons, default_booth_prices, ROUNDING_INCREMENT,
};
use crate::pricing::pricing_errors::PricingError;
use crate::pricing::pricing_model::{AddOn, BoothTier, Discount, PricingCalculation};
use crate::secrets::Secrets;
use crate::utils::currency_utils::format_currency;

/// Booth and add-on prices for the 2025 and 2026 seasons.
///
/// Built from the shipped defaults, optionally overridden by the
/// deployment secrets file. Read-only once constructed.
#[derive(Debug, Clone)]
pub struct PriceTable {
    booth_prices: HashMap<BoothTier, Decimal>,
    add_ons_2025: HashMap<String, AddOn>,
    add_ons_2026: HashMap<String, AddOn>,
}

impl Default for PriceTable {
    fn default() -> Self {
        PriceTable {
            booth_prices: default_booth_prices(),
            add_ons_2025: index_add_ons(default_add_ons(2025)),
            add_ons_2026: index_add_ons(default_add_ons(2026)),
        }
    }
}

fn index_add_ons(add_ons: Vec<AddOn>) -> HashMap<String, AddOn> {
    add_ons.into_iter().map(|a| (a.key.clone(), a)).collect()
}

impl PriceTable {
    /// Applies price overrides from the secrets file on top of the
    /// defaults. An unknown booth tier key is a configuration fault;
    /// unknown add-on keys are accepted as new add-ons.
    pub fn from_secrets(secrets: &Secrets) -> Result<Self, PricingError> {
        let mut table = PriceTable::default();

        if let Some(overrides) = &secrets.booth_prices {
            for (key, price) in overrides {
                let tier = BoothTier::from_key(key)
                    .ok_or_else(|| PricingError::UnknownBoothTier(key.clone()))?;
                table.booth_prices.insert(tier, *price);
            }
        }

        if let Some(overrides) = &secrets.add_ons_2025 {
            apply_add_on_overrides(&mut table.add_ons_2025, overrides);
        }
        if let Some(overrides) = &secrets.add_ons_2026 {
            apply_add_on_overrides(&mut table.add_ons_2026, overrides);
        }

        Ok(table)
    }

    pub fn booth_price(&self, tier: BoothTier) -> Decimal {
        if tier == BoothTier::NoBooth {
            return Decimal::ZERO;
        }
        match self.booth_prices.get(&tier) {
            Some(price) => *price,
            None => {
                warn!("No price configured for booth tier '{}'", tier.key());
                Decimal::ZERO
            }
        }
    }

    pub fn add_ons(&self, year: i32) -> &HashMap<String, AddOn> {
        if year >= 2026 {
            &self.add_ons_2026
        } else {
            &self.add_ons_2025
        }
    }
}

fn apply_add_on_overrides(
    table: &mut HashMap<String, AddOn>,
    overrides: &HashMap<String, crate::secrets::AddOnOverride>,
) {
    for (key, over) in overrides {
        match table.get_mut(key) {
            Some(existing) => {
                existing.label = over.label.clone();
                existing.price = over.price;
            }
            None => {
                table.insert(
                    key.clone(),
                    AddOn {
                        key: key.clone(),
                        label: over.label.clone(),
                        price: over.price,
                        bullets: Vec::new(),
                    },
                );
            }
        }
    }
}

/// Centralized pricing arithmetic: booth + add-ons, discount or custom
/// override, then rounding to the nearest $50.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    table: PriceTable,
}

impl PricingEngine {
    pub fn new(table: PriceTable) -> Self {
        PricingEngine { table }
    }

    pub fn table(&self) -> &PriceTable {
        &self.table
    }

    /// Prices one event sponsorship. Unknown add-on keys are skipped, the
    /// way the selection form treats stale keys after a table update.
    pub fn calculate(
        &self,
        booth_tier: BoothTier,
        add_on_keys: &[String],
        event_year: i32,
        discount: Discount,
    ) -> PricingCalculation {
        let booth_price = self.table.booth_price(booth_tier);

        let add_ons_table = self.table.add_ons(event_year);
        let add_ons_total: Decimal = add_on_keys
            .iter()
            .filter_map(|key| add_ons_table.get(key).map(|a| a.price))
            .sum();

        let subtotal = booth_price + add_ons_total;

        let (discount_multiplier, discount_amount, final_total) = match discount {
            Discount::Custom(custom_total) => {
                (Decimal::ZERO, subtotal - custom_total, custom_total)
            }
            _ => {
                let multiplier = discount.multiplier().unwrap_or(Decimal::ONE);
                let discounted = subtotal * multiplier;
                (multiplier, subtotal - discounted, discounted)
            }
        };

        PricingCalculation {
            booth_tier,
            booth_price,
            add_on_keys: add_on_keys.to_vec(),
            add_ons_total,
            subtotal,
            discount,
            discount_multiplier,
            discount_amount,
            final_total,
            rounded_total: round_nearest_50(final_total),
        }
    }

    /// Detailed breakdown of the selected add-ons, in selection order.
    pub fn add_ons_breakdown(&self, add_on_keys: &[String], event_year: i32) -> Vec<AddOn> {
        let table = self.table.add_ons(event_year);
        add_on_keys
            .iter()
            .filter_map(|key| table.get(key).cloned())
            .collect()
    }

    /// Labeled currency strings for a pricing summary display.
    pub fn format_display(calculation: &PricingCalculation) -> Vec<(&'static str, String)> {
        let discount_display = if calculation.discount_amount > Decimal::ZERO {
            format!("-{}", format_currency(calculation.discount_amount))
        } else {
            "None".to_string()
        };

        vec![
            ("Booth", format_currency(calculation.booth_price)),
            ("Add-ons", format_currency(calculation.add_ons_total)),
            ("Subtotal", format_currency(calculation.subtotal)),
            ("Discount", discount_display),
            (
                "Total (before rounding)",
                format_currency(calculation.final_total),
            ),
            (
                "Final Total (rounded)",
                format_currency(calculation.rounded_total),
            ),
        ]
    }
}

/// Rounds to the nearest $50; midpoints round to even (banker's rounding),
/// so $7,525 rounds down to $7,500 and $7,575 rounds up to $7,600.
pub fn round_nearest_50(amount: Decimal) -> Decimal {
    (amount / ROUNDING_INCREMENT).round() * ROUNDING_INCREMENT
}
