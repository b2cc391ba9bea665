use std::collections::HashMap;
use std::path::Path;

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deployment-supplied secrets: access passwords and price overrides.
///
/// Loaded once at startup from a JSON file kept outside the repository.
/// Every field is optional; anything absent falls back to the shipped
/// defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Secrets {
    pub password: Option<String>,
    pub sarah_password: Option<String>,
    pub allison_password: Option<String>,
    /// Booth tier key -> price, e.g. {"standard_2d": 8000}
    pub booth_prices: Option<HashMap<String, Decimal>>,
    pub add_ons_2025: Option<HashMap<String, AddOnOverride>>,
    pub add_ons_2026: Option<HashMap<String, AddOnOverride>>,
}

/// Label/price override for one add-on key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AddOnOverride {
    pub label: String,
    pub price: Decimal,
}

#[derive(Error, Debug)]
pub enum SecretsError {
    #[error("Failed to read secrets file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse secrets file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Secrets {
    pub fn from_json_str(json: &str) -> Result<Self, SecretsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads secrets from a JSON file. A missing file is tolerated (the
    /// defaults apply); a present but malformed file is a startup fault.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SecretsError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(
                "Secrets file {} not found; using default configuration",
                path.display()
            );
            return Ok(Secrets::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_partial_secrets() {
        let secrets = Secrets::from_json_str(
            r#"{"password": "hunter2", "booth_prices": {"platinum": 12000}}"#,
        )
        .unwrap();
        assert_eq!(secrets.password.as_deref(), Some("hunter2"));
        assert_eq!(
            secrets.booth_prices.unwrap().get("platinum"),
            Some(&dec!(12000))
        );
        assert!(secrets.add_ons_2025.is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Secrets::from_json_str("{not json").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let secrets = Secrets::load("/nonexistent/secrets.json").unwrap();
        assert_eq!(secrets, Secrets::default());
    }
}
