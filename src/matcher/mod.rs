pub mod matcher_constants;
pub mod matcher_model;
pub mod matcher_service;

pub use matcher_model::{MatchConfidence, MatchResult, MatcherConfig};
pub use matcher_service::{normalize_event_name, EventMatcher};
