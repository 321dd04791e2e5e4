//! Draft generation: orchestrates the full pipeline.
//!
//! Flow: validate input, load catalog, extract keywords, match offerings,
//! compose the bundle. The catalog load is the single await point; the rest
//! is pure string work, so concurrent generate calls share nothing mutable.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::catalog::CatalogSource;
use crate::drafting::composer::{self, DraftBundle, InputRecord};
use crate::drafting::keywords::{self, DEFAULT_DOMAIN_PHRASES};
use crate::drafting::matcher::match_offerings;
use crate::drafting::validation::{validate, ValidationOutcome};
use crate::errors::AppError;

/// Pipeline-level knobs. Validation thresholds and phrase lists are
/// configuration rather than forked code paths.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub min_profile_chars: usize,
    pub domain_phrases: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_profile_chars: 60,
            domain_phrases: DEFAULT_DOMAIN_PHRASES
                .iter()
                .map(|phrase| phrase.to_string())
                .collect(),
        }
    }
}

/// Severity of the status message rendered alongside the drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Neutral,
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusMessage {
    pub severity: Severity,
    pub text: String,
}

/// Everything produced by one generate action. Constructed fresh per call
/// and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct DraftReport {
    pub draft_id: Uuid,
    pub bundle: DraftBundle,
    /// Extracted keywords, sorted for response stability. Empty for the
    /// placeholder response.
    pub keywords: Vec<String>,
    /// Names of the offerings the pitch was built from, in catalog order.
    pub matched_offerings: Vec<String>,
    pub status: StatusMessage,
    pub generated_at: DateTime<Utc>,
}

/// Runs the full drafting pipeline.
///
/// An empty profile resolves to placeholder drafts with a neutral status;
/// the other validation failures and a catalog load failure surface as
/// errors, leaving no partial bundle behind.
pub async fn generate_drafts(
    catalog_source: &dyn CatalogSource,
    config: &PipelineConfig,
    input: InputRecord,
) -> Result<DraftReport, AppError> {
    match validate(&input, config.min_profile_chars)? {
        ValidationOutcome::MissingProfile => {
            info!("No profile text supplied; returning placeholder drafts");
            return Ok(DraftReport {
                draft_id: Uuid::new_v4(),
                bundle: composer::placeholder_bundle(),
                keywords: vec![],
                matched_offerings: vec![],
                status: StatusMessage {
                    severity: Severity::Neutral,
                    text: "Paste a profile snippet to generate drafts.".to_string(),
                },
                generated_at: Utc::now(),
            });
        }
        ValidationOutcome::Proceed => {}
    }

    // The single suspension point; everything below is synchronous
    let catalog = catalog_source.load().await?;

    let keyword_set = keywords::extract(&input.profile_text, &config.domain_phrases);
    info!("Extracted {} keywords", keyword_set.len());

    let offerings = match_offerings(&keyword_set, &catalog);
    info!(
        "Matched {} offerings (catalog size {})",
        offerings.len(),
        catalog.len()
    );

    let bundle = composer::compose(&input, &offerings);

    let mut sorted_keywords: Vec<String> = keyword_set.into_iter().collect();
    sorted_keywords.sort();

    Ok(DraftReport {
        draft_id: Uuid::new_v4(),
        bundle,
        keywords: sorted_keywords,
        matched_offerings: offerings.iter().map(|o| o.name.clone()).collect(),
        status: StatusMessage {
            severity: Severity::Success,
            text: "Drafts generated.".to_string(),
        },
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Offering, StaticCatalogSource};

    const JANE_PROFILE: &str = "Jane Doe — VP Sales\n\
        Experience:\n\
        - Leads enterprise sales\n\
        Skills: CRM, Forecasting\n\
        Education: MBA\n\
        Interests: Mentoring";

    fn make_catalog_source() -> StaticCatalogSource {
        StaticCatalogSource(vec![
            Offering {
                name: "CRM Accelerator".to_string(),
                value: "streamline pipeline".to_string(),
                triggers: vec!["crm".to_string()],
            },
            Offering {
                name: "Forecast Suite".to_string(),
                value: "improve accuracy".to_string(),
                triggers: vec!["forecasting".to_string()],
            },
            Offering {
                name: "Other".to_string(),
                value: "x".to_string(),
                triggers: vec!["unrelated".to_string()],
            },
        ])
    }

    fn make_input(profile_text: &str) -> InputRecord {
        InputRecord {
            lead_name: "Jane".to_string(),
            profile_text: profile_text.to_string(),
            ..InputRecord::default()
        }
    }

    /// A source whose load always fails, for exercising the failure path.
    struct FailingCatalogSource;

    #[async_trait::async_trait]
    impl CatalogSource for FailingCatalogSource {
        async fn load(&self) -> Result<std::sync::Arc<Vec<Offering>>, AppError> {
            Err(AppError::CatalogLoad("boom".to_string()))
        }
    }

    #[tokio::test]
    async fn test_round_trip_selects_matching_offerings() {
        let source = make_catalog_source();
        let report = generate_drafts(&source, &PipelineConfig::default(), make_input(JANE_PROFILE))
            .await
            .unwrap();

        assert_eq!(
            report.matched_offerings,
            vec!["CRM Accelerator", "Forecast Suite"],
            "must select both matches and skip 'Other'"
        );
        assert!(report.bundle.email.contains("Subject: Jane, quick idea"));
        assert_eq!(report.status.severity, Severity::Success);
    }

    #[tokio::test]
    async fn test_round_trip_pitch_carries_offering_bullets() {
        let source = make_catalog_source();
        let report = generate_drafts(&source, &PipelineConfig::default(), make_input(JANE_PROFILE))
            .await
            .unwrap();

        assert!(report.bundle.pitch.contains("• CRM Accelerator: streamline pipeline"));
        assert!(report.bundle.pitch.contains("• Forecast Suite: improve accuracy"));
        assert!(!report.bundle.pitch.contains("• Other:"));
    }

    #[tokio::test]
    async fn test_missing_profile_returns_placeholders_with_neutral_status() {
        let source = make_catalog_source();
        let report = generate_drafts(&source, &PipelineConfig::default(), make_input(""))
            .await
            .unwrap();

        assert_eq!(report.status.severity, Severity::Neutral);
        assert!(report.bundle.summary.contains("Paste a profile"));
        assert!(report.keywords.is_empty());
        assert!(report.matched_offerings.is_empty());
    }

    #[tokio::test]
    async fn test_sparse_profile_blocks_generation() {
        let source = make_catalog_source();
        let err = generate_drafts(&source, &PipelineConfig::default(), make_input("Jane"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ProfileTooSparse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_invalid_contact_url_blocks_generation() {
        let source = make_catalog_source();
        let mut input = make_input(JANE_PROFILE);
        input.contact_url = "example.com/jane".to_string();
        let err = generate_drafts(&source, &PipelineConfig::default(), input)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidContactUrl(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_no_signal_profile_falls_back_to_first_two_offerings() {
        let source = make_catalog_source();
        let profile = "Ceramics instructor and potter, teaching wheel throwing workshops weekly";
        let report = generate_drafts(&source, &PipelineConfig::default(), make_input(profile))
            .await
            .unwrap();
        assert_eq!(report.matched_offerings, vec!["CRM Accelerator", "Forecast Suite"]);
    }

    #[tokio::test]
    async fn test_report_keywords_are_sorted_and_lowercase() {
        let source = make_catalog_source();
        let report = generate_drafts(&source, &PipelineConfig::default(), make_input(JANE_PROFILE))
            .await
            .unwrap();

        let mut sorted = report.keywords.clone();
        sorted.sort();
        assert_eq!(report.keywords, sorted);
        for kw in &report.keywords {
            assert_eq!(kw, &kw.to_lowercase());
        }
    }

    #[tokio::test]
    async fn test_catalog_failure_surfaces_without_partial_bundle() {
        let err = generate_drafts(
            &FailingCatalogSource,
            &PipelineConfig::default(),
            make_input(JANE_PROFILE),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::CatalogLoad(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_min_profile_chars_is_configurable() {
        let source = make_catalog_source();
        let config = PipelineConfig {
            min_profile_chars: 5,
            ..PipelineConfig::default()
        };
        // 9 chars: passes the lowered threshold, blocked by the default one
        let report = generate_drafts(&source, &config, make_input("Sales VP!")).await;
        assert!(report.is_ok());
    }
}
