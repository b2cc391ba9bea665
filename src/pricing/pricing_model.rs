use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Booth tiers offered across the conference portfolio.
///
/// The string keys are stable identifiers used in config files, price
/// overrides, and documents; changing them breaks deployed secrets files.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoothTier {
    #[serde(rename = "standard_1d")]
    Standard1Day,
    #[serde(rename = "standard_2d")]
    Standard2Day,
    #[serde(rename = "platinum")]
    Platinum,
    #[serde(rename = "best_of")]
    BestOf,
    #[serde(rename = "premier")]
    Premier,
    #[serde(rename = "(no booth)")]
    NoBooth,
}

impl BoothTier {
    pub const ALL: [BoothTier; 6] = [
        BoothTier::Standard1Day,
        BoothTier::Standard2Day,
        BoothTier::Platinum,
        BoothTier::BestOf,
        BoothTier::Premier,
        BoothTier::NoBooth,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            BoothTier::Standard1Day => "standard_1d",
            BoothTier::Standard2Day => "standard_2d",
            BoothTier::Platinum => "platinum",
            BoothTier::BestOf => "best_of",
            BoothTier::Premier => "premier",
            BoothTier::NoBooth => "(no booth)",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoothTier::Standard1Day => "Standard Booth (1-Day Event)",
            BoothTier::Standard2Day => "Standard Booth (2-Day Event)",
            BoothTier::Platinum => "Platinum Booth",
            BoothTier::BestOf => "Best of Booth",
            BoothTier::Premier => "Premier Booth",
            BoothTier::NoBooth => "(No Booth - Add-ons Only)",
        }
    }

    pub fn from_key(key: &str) -> Option<BoothTier> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }
}

/// An add-on sponsorship opportunity (program ad, Wi-Fi sponsorship, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub key: String,
    pub label: String,
    pub price: Decimal,
    pub bullets: Vec<String>,
}

/// Discount applied to a sponsorship subtotal. `Custom` is the admin
/// override: it replaces the final total outright instead of scaling.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Discount {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "minus_10")]
    Minus10,
    #[serde(rename = "minus_15")]
    Minus15,
    #[serde(rename = "minus_20")]
    Minus20,
    #[serde(rename = "custom")]
    Custom(Decimal),
}

impl Discount {
    /// Multiplier applied to the subtotal; `None` for the custom override.
    pub fn multiplier(&self) -> Option<Decimal> {
        match self {
            Discount::None => Some(dec!(1.00)),
            Discount::Minus10 => Some(dec!(0.90)),
            Discount::Minus15 => Some(dec!(0.85)),
            Discount::Minus20 => Some(dec!(0.80)),
            Discount::Custom(_) => Option::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Discount::None => "No Discount (0%)",
            Discount::Minus10 => "10% Discount",
            Discount::Minus15 => "15% Discount",
            Discount::Minus20 => "20% Discount",
            Discount::Custom(_) => "Custom Total Override",
        }
    }
}

/// Complete pricing breakdown for one event sponsorship.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingCalculation {
    pub booth_tier: BoothTier,
    pub booth_price: Decimal,
    pub add_on_keys: Vec<String>,
    pub add_ons_total: Decimal,
    pub subtotal: Decimal,
    pub discount: Discount,
    pub discount_multiplier: Decimal,
    pub discount_amount: Decimal,
    /// Total after discount or override, before rounding
    pub final_total: Decimal,
    /// Final total rounded to the nearest $50
    pub rounded_total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booth_tier_keys_round_trip() {
        for tier in BoothTier::ALL {
            assert_eq!(BoothTier::from_key(tier.key()), Some(tier));
        }
        assert_eq!(BoothTier::from_key("gold"), None);
    }

    #[test]
    fn booth_tier_serializes_as_stable_key() {
        let json = serde_json::to_string(&BoothTier::Standard2Day).unwrap();
        assert_eq!(json, "\"standard_2d\"");
        let json = serde_json::to_string(&BoothTier::NoBooth).unwrap();
        assert_eq!(json, "\"(no booth)\"");
    }

    #[test]
    fn discount_multipliers() {
        assert_eq!(Discount::None.multiplier(), Some(dec!(1.00)));
        assert_eq!(Discount::Minus20.multiplier(), Some(dec!(0.80)));
        assert_eq!(Discount::Custom(dec!(1000)).multiplier(), Option::None);
    }
}
