//! Input validation, checked in order before any pipeline computation begins.
//!
//! A missing profile is not an error: the caller gets placeholder drafts and
//! a neutral prompt instead. The other checks block generation outright.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::drafting::composer::InputRecord;
use crate::errors::AppError;

/// Expected shape of a contact profile URL: optional scheme and "www.",
/// then linkedin.com/in/<slug>.
static CONTACT_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(https?://)?(www\.)?linkedin\.com/in/[A-Za-z0-9_%.-]+/?$")
        .expect("contact url regex is valid")
});

/// Outcome of pre-pipeline validation.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// All checks passed; run the pipeline.
    Proceed,
    /// Profile text was empty; render placeholder drafts instead of failing.
    MissingProfile,
}

/// Runs the validation checks in order: missing profile, contact URL shape,
/// minimum profile length. Assumes pre-trimmed input.
pub fn validate(input: &InputRecord, min_profile_chars: usize) -> Result<ValidationOutcome, AppError> {
    if input.profile_text.is_empty() {
        return Ok(ValidationOutcome::MissingProfile);
    }

    if !input.contact_url.is_empty() && !CONTACT_URL.is_match(&input.contact_url) {
        return Err(AppError::InvalidContactUrl(format!(
            "'{}' does not look like a contact profile URL",
            input.contact_url
        )));
    }

    if input.profile_text.chars().count() < min_profile_chars {
        return Err(AppError::ProfileTooSparse(format!(
            "profile text is under {min_profile_chars} characters; paste a richer snippet"
        )));
    }

    Ok(ValidationOutcome::Proceed)
}
