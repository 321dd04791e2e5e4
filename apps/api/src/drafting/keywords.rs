//! Keyword extraction: turns raw profile text into a set of lowercase keywords.
//!
//! Three independent passes feed one deduplicated set. Downstream consumers
//! only test membership, so no ordering is guaranteed.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a "Skills:" line (colon optional) and captures the rest of the line.
static SKILLS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)skills?:?(.+)").expect("skills regex is valid"));

/// Multi-word domain phrases that single-token extraction would split apart.
pub const DEFAULT_DOMAIN_PHRASES: &[&str] = &[
    "revenue operations",
    "sales analytics",
    "pipeline optimization",
    "gtm strategy",
    "data warehousing",
    "ai enablement",
];

/// Tokens of 3 chars or fewer are noise ("the", "and", "for").
const MIN_TOKEN_LEN: usize = 4;

/// Extracts a deduplicated set of lowercase keywords from profile text.
///
/// Passes:
/// 1. Skills line: split the captured remainder on commas and periods.
/// 2. Tokens: strip non-alphanumeric chars, keep tokens longer than 3 chars.
/// 3. Phrases: any configured phrase contained verbatim in the lowercased text.
///
/// An absent skills line simply contributes nothing; empty text yields an
/// empty set (callers reject empty profiles before invoking this).
pub fn extract(profile_text: &str, phrases: &[String]) -> HashSet<String> {
    let mut keywords = HashSet::new();

    if let Some(captures) = SKILLS_LINE.captures(profile_text) {
        for skill in captures[1].split([',', '.']) {
            let skill = skill.trim();
            if !skill.is_empty() {
                keywords.insert(skill.to_lowercase());
            }
        }
    }

    let cleaned: String = profile_text
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    for token in cleaned.split_whitespace() {
        if token.chars().count() >= MIN_TOKEN_LEN {
            keywords.insert(token.to_lowercase());
        }
    }

    let text_lower = profile_text.to_lowercase();
    for phrase in phrases {
        if text_lower.contains(phrase.as_str()) {
            keywords.insert(phrase.clone());
        }
    }

    keywords
}
