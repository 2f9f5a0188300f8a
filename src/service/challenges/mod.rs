//! Coding challenge generation service
//!
//! Prompts the AI collaborator for a challenge set and defensively interprets
//! the response; any failure along the way routes to the canned catalog.

use std::sync::Arc;

use rig::providers::openai;

use crate::model::{ChallengeRequest, CodingChallenge};
use crate::service::challenges::fallback::generate_fallback_challenges;
use crate::service::challenges::prompts::build_challenge_prompt;
use crate::service::challenges::validation::validate_challenge_list;
use crate::service::llm::TextGenerator;
use crate::service::sanitize::sanitize;
use crate::service::ResultSource;

pub mod fallback;
pub mod prompts;
pub mod validation;

/// Environment variable for the challenge model (defaults to gpt-4o-mini if not set)
const ENV_CHALLENGE_MODEL: &str = "CHALLENGE_MODEL";

/// Default model for challenge generation
const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

/// A generated challenge set with its provenance
#[derive(Debug)]
pub struct GeneratedChallenges {
    pub challenges: Vec<CodingChallenge>,
    pub source: ResultSource,
}

/// Service for generating coding interview challenges
pub struct ChallengeService {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl ChallengeService {
    /// Create a new challenge service
    ///
    /// Uses the shared text generator passed from startup.
    /// Optionally uses the CHALLENGE_MODEL env var (defaults to gpt-4o-mini).
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        let model =
            std::env::var(ENV_CHALLENGE_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(model = %model, "Challenge generation service initialized");

        Self { generator, model }
    }

    /// Generate a challenge set for the given request.
    ///
    /// Never fails: an AI, parse, or validation failure falls back to the
    /// canned catalog, which satisfies the same schema by construction.
    pub async fn generate(&self, request: &ChallengeRequest) -> GeneratedChallenges {
        let prompt = build_challenge_prompt(request);

        let raw = match self.generator.generate(&self.model, &prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    role = %request.role,
                    difficulty = %request.difficulty,
                    count = request.number_of_questions,
                    error = %e,
                    "AI call failed, using fallback challenges"
                );
                return self.fallback(request);
            }
        };

        let value = match sanitize(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    role = %request.role,
                    difficulty = %request.difficulty,
                    error = %e,
                    raw_output = %raw,
                    "Challenge response did not contain JSON, using fallback challenges"
                );
                return self.fallback(request);
            }
        };

        match validate_challenge_list(&value) {
            Ok(challenges) => {
                tracing::info!(
                    role = %request.role,
                    difficulty = %request.difficulty,
                    requested = request.number_of_questions,
                    generated = challenges.len(),
                    "Challenge set generated"
                );
                GeneratedChallenges {
                    challenges,
                    source: ResultSource::Ai,
                }
            }
            Err(e) => {
                tracing::warn!(
                    role = %request.role,
                    difficulty = %request.difficulty,
                    error = %e,
                    raw_output = %raw,
                    "Challenge response failed validation, using fallback challenges"
                );
                self.fallback(request)
            }
        }
    }

    fn fallback(&self, request: &ChallengeRequest) -> GeneratedChallenges {
        GeneratedChallenges {
            challenges: generate_fallback_challenges(request),
            source: ResultSource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use crate::service::llm::testing::{FailingGenerator, StaticGenerator};

    fn request(count: u32) -> ChallengeRequest {
        ChallengeRequest {
            role: "Backend".to_string(),
            experience_level: "Mid".to_string(),
            difficulty: Difficulty::Easy,
            number_of_questions: count,
        }
    }

    fn service(generator: Arc<dyn TextGenerator>) -> ChallengeService {
        ChallengeService {
            generator,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    #[tokio::test]
    async fn test_ai_failure_yields_exact_fallback_set() {
        let service = service(Arc::new(FailingGenerator::quota()));

        let generated = service.generate(&request(3)).await;

        assert!(matches!(generated.source, ResultSource::Fallback));
        assert_eq!(generated.challenges.len(), 3);
        let ids: Vec<&str> = generated.challenges.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        for challenge in &generated.challenges {
            assert_eq!(challenge.difficulty, Difficulty::Easy);
            assert_eq!(challenge.sample_test_cases.len(), 2);
            assert_eq!(challenge.hidden_test_cases.len(), 3);
        }
    }

    #[tokio::test]
    async fn test_valid_ai_response_is_used() {
        let body = serde_json::json!([{
            "id": "1",
            "title": "Reverse a String",
            "description": "Reverse the input string.",
            "difficulty": "Easy",
            "inputFormat": "One line with a string.",
            "outputFormat": "The reversed string.",
            "constraints": "1 <= len <= 100",
            "sampleTestCases": [{"input": "abc", "output": "cba"}],
            "hiddenTestCases": [{"input": "a", "output": "a"}]
        }]);
        let raw = format!("```json\n{}\n```", body);
        let service = service(Arc::new(StaticGenerator::new(raw)));

        let generated = service.generate(&request(1)).await;

        assert!(matches!(generated.source, ResultSource::Ai));
        assert_eq!(generated.challenges[0].title, "Reverse a String");
    }

    #[tokio::test]
    async fn test_unparseable_ai_response_falls_back() {
        let service = service(Arc::new(StaticGenerator::new(
            "Sorry, I cannot do that.".to_string(),
        )));

        let generated = service.generate(&request(2)).await;

        assert!(matches!(generated.source, ResultSource::Fallback));
        assert_eq!(generated.challenges.len(), 2);
    }

    #[tokio::test]
    async fn test_schema_violation_falls_back() {
        // Valid JSON but missing required challenge fields
        let service = service(Arc::new(StaticGenerator::new(
            r#"[{"id": "1", "title": "Incomplete"}]"#.to_string(),
        )));

        let generated = service.generate(&request(1)).await;

        assert!(matches!(generated.source, ResultSource::Fallback));
    }
}
