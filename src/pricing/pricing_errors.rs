use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Unknown booth tier key '{0}' in price overrides")]
    UnknownBoothTier(String),

    #[error("Invalid price for '{key}': {reason}")]
    InvalidPrice { key: String, reason: String },
}
