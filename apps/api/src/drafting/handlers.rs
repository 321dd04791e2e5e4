//! Axum route handlers for the Drafts API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::catalog::Offering;
use crate::drafting::composer::InputRecord;
use crate::drafting::keywords;
use crate::drafting::pipeline::{generate_drafts, DraftReport};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateDraftsRequest {
    #[serde(default)]
    pub lead_name: String,
    #[serde(default)]
    pub contact_url: String,
    #[serde(default)]
    pub profile_text: String,
    #[serde(default)]
    pub work_notes: String,
    #[serde(default)]
    pub meeting_goal: String,
    #[serde(default)]
    pub timeline: String,
}

impl GenerateDraftsRequest {
    /// Trims every field up front; the pipeline assumes pre-trimmed input.
    fn into_input(self) -> InputRecord {
        InputRecord {
            lead_name: self.lead_name.trim().to_string(),
            contact_url: self.contact_url.trim().to_string(),
            profile_text: self.profile_text.trim().to_string(),
            work_notes: self.work_notes.trim().to_string(),
            meeting_goal: self.meeting_goal.trim().to_string(),
            timeline: self.timeline.trim().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExtractKeywordsRequest {
    pub profile_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractKeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct OfferingsResponse {
    pub offerings: Vec<Offering>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/drafts/generate
///
/// Full drafting pipeline: validate, load catalog, extract keywords, match
/// offerings, compose. Returns the four drafts plus a status message.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateDraftsRequest>,
) -> Result<Json<DraftReport>, AppError> {
    let input = request.into_input();
    let report = generate_drafts(state.catalog.as_ref(), &state.pipeline_config, input).await?;
    Ok(Json(report))
}

/// POST /api/v1/drafts/keywords
///
/// Extraction preview: shows what the matcher will see before generating.
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    Json(request): Json<ExtractKeywordsRequest>,
) -> Result<Json<ExtractKeywordsResponse>, AppError> {
    let profile_text = request.profile_text.trim();
    if profile_text.is_empty() {
        return Err(AppError::Validation(
            "profile_text cannot be empty".to_string(),
        ));
    }

    let mut keywords: Vec<String> =
        keywords::extract(profile_text, &state.pipeline_config.domain_phrases)
            .into_iter()
            .collect();
    keywords.sort();

    Ok(Json(ExtractKeywordsResponse { keywords }))
}

/// GET /api/v1/offerings
///
/// Returns the loaded catalog, in catalog order.
pub async fn handle_get_offerings(
    State(state): State<AppState>,
) -> Result<Json<OfferingsResponse>, AppError> {
    let catalog = state.catalog.load().await?;
    Ok(Json(OfferingsResponse {
        offerings: catalog.as_ref().clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_fields_default_to_empty() {
        let json = serde_json::json!({ "profile_text": "some profile" });
        let request: GenerateDraftsRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.profile_text, "some profile");
        assert!(request.lead_name.is_empty());
        assert!(request.contact_url.is_empty());
        assert!(request.timeline.is_empty());
    }

    #[test]
    fn test_into_input_trims_every_field() {
        let request = GenerateDraftsRequest {
            lead_name: "  Jane  ".to_string(),
            contact_url: " linkedin.com/in/jane ".to_string(),
            profile_text: "\n profile \n".to_string(),
            work_notes: " notes ".to_string(),
            meeting_goal: " goal ".to_string(),
            timeline: " this week ".to_string(),
        };
        let input = request.into_input();
        assert_eq!(input.lead_name, "Jane");
        assert_eq!(input.contact_url, "linkedin.com/in/jane");
        assert_eq!(input.profile_text, "profile");
        assert_eq!(input.work_notes, "notes");
        assert_eq!(input.meeting_goal, "goal");
        assert_eq!(input.timeline, "this week");
    }

    #[test]
    fn test_extract_keywords_request_requires_profile_text() {
        let json = serde_json::json!({});
        let result: Result<ExtractKeywordsRequest, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
