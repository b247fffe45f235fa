//! Free-text ranking of targets.
//!
//! Scores are fixed tiers, compared case-insensitively:
//! exact match 100, prefix 80, substring 50, anything else 0.

use crate::types::Target;

pub const EXACT_SCORE: u32 = 100;
pub const PREFIX_SCORE: u32 = 80;
pub const SUBSTRING_SCORE: u32 = 50;

/// Scores `text` against `query`.
pub fn score(query: &str, text: &str) -> u32 {
    let query = query.to_lowercase();
    let text = text.to_lowercase();
    if text == query {
        EXACT_SCORE
    } else if text.starts_with(&query) {
        PREFIX_SCORE
    } else if text.contains(&query) {
        SUBSTRING_SCORE
    } else {
        0
    }
}

/// Best score over the target's label and identifier.
pub fn score_target(query: &str, target: &Target) -> u32 {
    let by_label = score(query, &target.label);
    let by_identifier = target
        .identifier
        .as_deref()
        .map_or(0, |identifier| score(query, identifier));
    by_label.max(by_identifier)
}

/// Drops non-matching targets and orders the rest best first.
///
/// Equal scores keep their input order. An empty query returns `targets` as is.
pub fn filter_and_sort(targets: &[Target], query: &str) -> Vec<Target> {
    if query.is_empty() {
        return targets.to_vec();
    }
    let mut scored: Vec<(u32, &Target)> = targets
        .iter()
        .map(|t| (score_target(query, t), t))
        .filter(|(s, _)| *s > 0)
        .collect();
    // sort_by is stable
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, t)| t.clone()).collect()
}
