//! Offering matching: selects catalog entries whose triggers overlap the
//! extracted keyword set.

use std::collections::HashSet;

use crate::catalog::Offering;

/// Leading catalog entries returned when nothing matches. Guarantees the
/// pitch is never empty for a low-signal profile; a human reviews the draft
/// before sending, so occasionally pitching irrelevant material is acceptable.
const FALLBACK_COUNT: usize = 2;

/// Returns the offerings with at least one trigger present in the keyword
/// set, preserving catalog order. Triggers are compared case-insensitively.
/// When no offering matches, falls back to the first `min(2, catalog.len())`
/// entries in catalog order.
pub fn match_offerings(keywords: &HashSet<String>, catalog: &[Offering]) -> Vec<Offering> {
    let relevant: Vec<Offering> = catalog
        .iter()
        .filter(|offering| {
            offering
                .triggers
                .iter()
                .any(|trigger| keywords.contains(&trigger.to_lowercase()))
        })
        .cloned()
        .collect();

    if relevant.is_empty() {
        catalog.iter().take(FALLBACK_COUNT).cloned().collect()
    } else {
        relevant
    }
}
