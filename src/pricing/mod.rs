pub mod pricing_constants;
pub mod pricing_errors;
pub mod pricing_model;
pub mod pricing_service;

pub use pricing_errors::PricingError;
pub use pricing_model::{AddOn, BoothTier, Discount, PricingCalculation};
pub use pricing_service::{PriceTable, PricingEngine};
