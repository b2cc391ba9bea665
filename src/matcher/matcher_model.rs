use serde::{Deserialize, Serialize};

use crate::events::EventRecord;
use crate::matcher::matcher_constants::{
    LOW_SCORE_CUTOFF, MEDIUM_SCORE_CUTOFF, MIN_CONTAINMENT_LEN, MIN_SHARED_KEYWORDS,
};

/// Qualitative bucket summarizing match reliability.
///
/// Callers auto-fill from matches at `Medium` or better and prompt a human
/// to confirm at `Low` or `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MatchConfidence {
    Exact,
    High,
    Medium,
    Low,
    None,
}

impl MatchConfidence {
    /// True when the match is reliable enough to auto-fill a form.
    pub fn is_auto_fill(&self) -> bool {
        matches!(
            self,
            MatchConfidence::Exact | MatchConfidence::High | MatchConfidence::Medium
        )
    }
}

impl std::fmt::Display for MatchConfidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MatchConfidence::Exact => "exact",
            MatchConfidence::High => "high",
            MatchConfidence::Medium => "medium",
            MatchConfidence::Low => "low",
            MatchConfidence::None => "none",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of one resolution call. Owned by the caller; the matcher keeps
/// nothing. `confidence == None` implies `event` is absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub event: Option<EventRecord>,
    pub confidence: MatchConfidence,
    /// Similarity score in [0, 1]; 1.0 for exact matches, 0.0 for none.
    pub score: f64,
}

impl MatchResult {
    pub fn matched(event: EventRecord, confidence: MatchConfidence, score: f64) -> Self {
        MatchResult {
            event: Some(event),
            confidence,
            score,
        }
    }

    pub fn no_match() -> Self {
        MatchResult {
            event: None,
            confidence: MatchConfidence::None,
            score: 0.0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.event.is_some()
    }
}

/// Tunable thresholds for the matching cascade. The defaults mirror the
/// named constants in [`matcher_constants`].
///
/// [`matcher_constants`]: crate::matcher::matcher_constants
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MatcherConfig {
    pub min_containment_len: usize,
    pub min_shared_keywords: usize,
    pub medium_score_cutoff: f64,
    pub low_score_cutoff: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            min_containment_len: MIN_CONTAINMENT_LEN,
            min_shared_keywords: MIN_SHARED_KEYWORDS,
            medium_score_cutoff: MEDIUM_SCORE_CUTOFF,
            low_score_cutoff: LOW_SCORE_CUTOFF,
        }
    }
}
