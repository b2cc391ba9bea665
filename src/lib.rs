pub mod audit;
pub mod auth;
pub mod documents;
pub mod errors;
pub mod events;
pub mod matcher;
pub mod packages;
pub mod pricing;
pub mod secrets;
pub mod settings;
pub mod utils;

pub use errors::{Error, Result};
pub use events::*;
pub use matcher::*;
pub use pricing::*;
