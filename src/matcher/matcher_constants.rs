//! Matching thresholds, externalized so boundary behavior can be probed
//! precisely in tests and overridden through [`MatcherConfig`].
//!
//! [`MatcherConfig`]: crate::matcher::MatcherConfig

/// Minimum length (normalized characters) of the shorter string before a
/// containment match is accepted. Guards against spurious matches on very
/// short fragments like "GI".
pub const MIN_CONTAINMENT_LEN: usize = 4;

/// Minimum number of shared significant tokens before the keyword stage
/// considers a catalog entry at all.
pub const MIN_SHARED_KEYWORDS: usize = 3;

/// Jaccard score at or above which a keyword match is reported as MEDIUM.
pub const MEDIUM_SCORE_CUTOFF: f64 = 0.5;

/// Jaccard score at or above which a keyword match is reported as LOW.
pub const LOW_SCORE_CUTOFF: f64 = 0.2;

/// Words excluded from keyword-overlap scoring. "annual" is a stop-word
/// because nearly every catalog entry carries it; "meeting" is not,
/// because it distinguishes meeting-type events from symposia.
pub const STOP_WORDS: &[&str] = &[
    "the", "of", "a", "an", "and", "in", "at", "on", "for", "to", "with", "annual",
];
