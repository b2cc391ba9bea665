use thiserror::Error;

/// Catalog faults are startup-time faults: a dependent workflow must not
/// start over a broken catalog, since every match it produced would be
/// systematically wrong.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Event catalog is empty")]
    Empty,

    #[error("Catalog entry {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
