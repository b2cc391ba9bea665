use std::collections::BTreeSet;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::events::EventCatalog;
use crate::matcher::matcher_constants::STOP_WORDS;
use crate::matcher::matcher_model::{MatchConfidence, MatchResult, MatcherConfig};

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9\s]+").expect("valid regex");
}

/// Canonicalizes an event name for comparison.
///
/// Lowercases, unifies dash characters, applies the ASCO naming rewrites
/// ("Best of ASCO" and "ASCO Direct" are the same event series), strips
/// punctuation, and sorts the remaining tokens so that word order does not
/// affect equality or containment.
pub fn normalize_event_name(name: &str) -> String {
    let mut name = name.to_lowercase();

    // Dashes act as word separators in names like "Professionals-HPOP"
    name = name.replace(['–', '—', '-'], " ");

    // ASCO naming variations: the series is marketed under both names
    name = name.replace("best of asco", "asco direct");
    name = name.replace("best of", " ");
    name = name.replace("best", " ");

    name = NON_ALNUM.replace_all(&name, "").into_owned();

    let mut tokens: Vec<&str> = name.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn significant_tokens(normalized: &str) -> BTreeSet<&str> {
    normalized
        .split_whitespace()
        .filter(|t| !STOP_WORDS.contains(t))
        .collect()
}

/// Resolves free-text event names against a fixed catalog.
///
/// Pure and deterministic: the same query over the same catalog always
/// yields the same result. Holds no interior mutability, so one matcher
/// may serve concurrent callers (e.g. one per spreadsheet row).
///
/// Three-stage cascade, each stage scanning the entire catalog before the
/// next is tried:
/// 1. exact equality of normalized names
/// 2. containment of one normalized name in the other
/// 3. keyword overlap (Jaccard over significant tokens)
pub struct EventMatcher {
    catalog: Arc<EventCatalog>,
    config: MatcherConfig,
    // Normalized names in catalog order; index-aligned with the catalog.
    normalized_names: Vec<String>,
}

impl EventMatcher {
    pub fn new(catalog: Arc<EventCatalog>) -> Self {
        Self::with_config(catalog, MatcherConfig::default())
    }

    pub fn with_config(catalog: Arc<EventCatalog>, config: MatcherConfig) -> Self {
        let normalized_names = catalog
            .events()
            .iter()
            .map(|e| normalize_event_name(&e.meeting_name))
            .collect();
        EventMatcher {
            catalog,
            config,
            normalized_names,
        }
    }

    pub fn catalog(&self) -> &Arc<EventCatalog> {
        &self.catalog
    }

    /// Maps a noisy event name to the best catalog entry.
    ///
    /// Degenerate input (empty or whitespace-only) returns a NONE result
    /// without scanning the catalog; malformed input is never an error.
    pub fn resolve(&self, query: &str) -> MatchResult {
        if query.trim().is_empty() {
            return MatchResult::no_match();
        }

        let normalized_query = normalize_event_name(query);
        if normalized_query.is_empty() {
            return MatchResult::no_match();
        }

        if let Some(index) = self.exact_stage(&normalized_query) {
            return MatchResult::matched(
                self.catalog.events()[index].clone(),
                MatchConfidence::Exact,
                1.0,
            );
        }

        if let Some((index, score)) = self.containment_stage(&normalized_query) {
            return MatchResult::matched(
                self.catalog.events()[index].clone(),
                MatchConfidence::High,
                score,
            );
        }

        if let Some((index, score)) = self.keyword_stage(&normalized_query) {
            let confidence = if score >= self.config.medium_score_cutoff {
                MatchConfidence::Medium
            } else {
                MatchConfidence::Low
            };
            return MatchResult::matched(self.catalog.events()[index].clone(), confidence, score);
        }

        MatchResult::no_match()
    }

    /// Similar events ranked by token similarity, for the disambiguation
    /// prompt shown when a resolution comes back LOW or NONE.
    pub fn find_similar(&self, query: &str, limit: usize) -> Vec<(crate::events::EventRecord, f64)> {
        let normalized_query = normalize_event_name(query);
        let query_tokens: BTreeSet<&str> = normalized_query.split_whitespace().collect();

        let mut scored: Vec<(usize, f64)> = self
            .normalized_names
            .iter()
            .enumerate()
            .filter_map(|(index, name)| {
                let tokens: BTreeSet<&str> = name.split_whitespace().collect();
                let score = jaccard(&query_tokens, &tokens);
                if score > 0.0 {
                    Some((index, score))
                } else {
                    None
                }
            })
            .collect();

        // Descending by score; catalog order breaks ties
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);

        scored
            .into_iter()
            .map(|(index, score)| (self.catalog.events()[index].clone(), score))
            .collect()
    }

    // Stage 1: normalized equality. Ties (duplicate normalized names) are
    // resolved by first occurrence in catalog order.
    fn exact_stage(&self, normalized_query: &str) -> Option<usize> {
        self.normalized_names
            .iter()
            .position(|name| name.as_str() == normalized_query)
    }

    // Stage 2: one normalized name contains the other. Score is the length
    // ratio of shorter to longer; the highest-scoring entry wins and the
    // first occurrence breaks exact score ties.
    fn containment_stage(&self, normalized_query: &str) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;

        for (index, name) in self.normalized_names.iter().enumerate() {
            let (shorter, longer) = if normalized_query.len() <= name.len() {
                (normalized_query, name.as_str())
            } else {
                (name.as_str(), normalized_query)
            };

            if shorter.len() < self.config.min_containment_len || !longer.contains(shorter) {
                continue;
            }

            let score = shorter.len() as f64 / longer.len() as f64;
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((index, score));
            }
        }

        best
    }

    // Stage 3: Jaccard over significant tokens, gated on a minimum number
    // of shared significant tokens. Returns the best score at or above the
    // LOW cutoff; the caller buckets it into MEDIUM or LOW.
    fn keyword_stage(&self, normalized_query: &str) -> Option<(usize, f64)> {
        let query_tokens = significant_tokens(normalized_query);
        if query_tokens.is_empty() {
            return None;
        }

        let mut best: Option<(usize, f64)> = None;

        for (index, name) in self.normalized_names.iter().enumerate() {
            let tokens = significant_tokens(name);
            let shared = query_tokens.intersection(&tokens).count();
            if shared < self.config.min_shared_keywords {
                continue;
            }

            let score = jaccard(&query_tokens, &tokens);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((index, score));
            }
        }

        best.filter(|&(_, score)| score >= self.config.low_score_cutoff)
    }
}

fn jaccard(a: &BTreeSet<&str>, b: &BTreeSet<&str>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}
