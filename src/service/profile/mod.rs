//! Profile scoring and structuring service
//!
//! Two AI-backed operations over candidate profiles: scoring structured
//! profile data against the platform's six-section rubric, and parsing raw
//! pasted profile text into those sections. Both fall back to deterministic
//! local computation when the AI path fails.

use std::sync::Arc;

use rig::providers::openai;

use crate::model::{ProfileData, ProfileScore, PromptLimits, StructuredProfile};
use crate::service::llm::TextGenerator;
use crate::service::profile::fallback::{
    generate_fallback_profile_score, generate_fallback_structured_profile,
};
use crate::service::profile::prompts::{
    build_profile_text, build_score_prompt, build_structure_prompt,
};
use crate::service::profile::validation::{validate_profile_score, validate_structured_profile};
use crate::service::sanitize::sanitize;
use crate::service::{truncate_text, ResultSource};

pub mod fallback;
pub mod prompts;
pub mod validation;

/// Environment variable for the profile model (defaults to gpt-4o-mini if not set)
const ENV_PROFILE_MODEL: &str = "PROFILE_MODEL";

/// Default model for profile analysis
const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

/// A profile score with its provenance
#[derive(Debug)]
pub struct ScoredProfile {
    pub score: ProfileScore,
    pub source: ResultSource,
}

/// A structured profile with its provenance
#[derive(Debug)]
pub struct StructuredProfileResult {
    pub profile: StructuredProfile,
    pub source: ResultSource,
}

/// Service for profile scoring and structuring
pub struct ProfileService {
    generator: Arc<dyn TextGenerator>,
    model: String,
    limits: PromptLimits,
}

impl ProfileService {
    /// Create a new profile service
    ///
    /// Uses the shared text generator passed from startup.
    /// Optionally uses the PROFILE_MODEL env var (defaults to gpt-4o-mini).
    pub fn new(generator: Arc<dyn TextGenerator>, limits: PromptLimits) -> Self {
        let model = std::env::var(ENV_PROFILE_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(model = %model, "Profile analysis service initialized");

        Self {
            generator,
            model,
            limits,
        }
    }

    /// Score structured profile data against the six-section rubric.
    ///
    /// Never fails: AI, parse, or validation failures — and the empty
    /// sentinel, which carries no usable score — route to the deterministic
    /// scorer.
    pub async fn score(&self, data: &ProfileData) -> ScoredProfile {
        let profile_text = build_profile_text(data);
        let profile_text = truncate_text(&profile_text, self.limits.max_profile_chars);
        let prompt = build_score_prompt(profile_text);

        let raw = match self.generator.generate(&self.model, &prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "AI call failed, using fallback profile scoring");
                return self.score_fallback(data);
            }
        };

        let value = match sanitize(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    raw_output = %raw,
                    "Score response did not contain JSON, using fallback profile scoring"
                );
                return self.score_fallback(data);
            }
        };

        match validate_profile_score(&value) {
            Ok(Some(score)) => {
                tracing::info!(score = score.score, "Profile scored");
                ScoredProfile {
                    score,
                    source: ResultSource::Ai,
                }
            }
            Ok(None) => {
                tracing::info!("Score response was the empty sentinel, using fallback scoring");
                self.score_fallback(data)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    raw_output = %raw,
                    "Score response failed validation, using fallback profile scoring"
                );
                self.score_fallback(data)
            }
        }
    }

    /// Parse raw profile text into the platform's six sections.
    ///
    /// Never fails; degraded paths use keyword extraction.
    pub async fn structure(&self, raw_text: &str) -> StructuredProfileResult {
        let raw_text_for_prompt = truncate_text(raw_text, self.limits.max_profile_chars);
        let prompt = build_structure_prompt(raw_text_for_prompt);

        let raw = match self.generator.generate(&self.model, &prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "AI call failed, using fallback profile structuring");
                return self.structure_fallback(raw_text);
            }
        };

        let value = match sanitize(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    raw_output = %raw,
                    "Structure response did not contain JSON, using fallback structuring"
                );
                return self.structure_fallback(raw_text);
            }
        };

        match validate_structured_profile(&value) {
            Ok(Some(profile)) => StructuredProfileResult {
                profile,
                source: ResultSource::Ai,
            },
            Ok(None) => {
                tracing::info!("Structure response was the empty sentinel, using fallback");
                self.structure_fallback(raw_text)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    raw_output = %raw,
                    "Structure response failed validation, using fallback structuring"
                );
                self.structure_fallback(raw_text)
            }
        }
    }

    fn score_fallback(&self, data: &ProfileData) -> ScoredProfile {
        ScoredProfile {
            score: generate_fallback_profile_score(data),
            source: ResultSource::Fallback,
        }
    }

    fn structure_fallback(&self, raw_text: &str) -> StructuredProfileResult {
        StructuredProfileResult {
            profile: generate_fallback_structured_profile(raw_text),
            source: ResultSource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::llm::testing::{FailingGenerator, StaticGenerator};

    fn service(generator: Arc<dyn TextGenerator>) -> ProfileService {
        ProfileService {
            generator,
            model: DEFAULT_MODEL.to_string(),
            limits: PromptLimits::default(),
        }
    }

    fn profile_data() -> ProfileData {
        ProfileData {
            summary: Some("Backend engineer focused on reliability.".to_string()),
            skills: Some("Rust, Postgres".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_score_quota_failure_falls_back() {
        let service = service(Arc::new(FailingGenerator::quota()));

        let scored = service.score(&profile_data()).await;

        assert_eq!(scored.source, ResultSource::Fallback);
        assert!(scored.score.warning.is_some());
        assert_eq!(scored.score.max_score, 100);
    }

    #[tokio::test]
    async fn test_score_sentinel_falls_back() {
        let service = service(Arc::new(StaticGenerator::new("{}".to_string())));

        let scored = service.score(&profile_data()).await;

        assert_eq!(scored.source, ResultSource::Fallback);
    }

    #[tokio::test]
    async fn test_structure_outage_uses_keyword_extraction() {
        let service = service(Arc::new(FailingGenerator::outage()));

        let result = service
            .structure("Skills: Rust, SQL\nWorked at ACME 2020-2024")
            .await;

        assert_eq!(result.source, ResultSource::Fallback);
        assert_eq!(result.profile.skills, "Rust, SQL");
    }

    #[tokio::test]
    async fn test_structure_valid_ai_response_is_used() {
        let body = serde_json::json!({
            "summary": "Engineer.",
            "skills": "Languages: Rust",
            "workExperience": "ACME (2020-2024) - Engineer",
            "projects": "CLI tools",
            "education": "BSc - State University",
            "certifications": "CKA (2023)"
        });
        let raw = format!("```json\n{}\n```", body);
        let service = service(Arc::new(StaticGenerator::new(raw)));

        let result = service.structure("raw text").await;

        assert_eq!(result.source, ResultSource::Ai);
        assert_eq!(result.profile.certifications, "CKA (2023)");
    }
}
