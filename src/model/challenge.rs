//! Coding challenge types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Challenge difficulty tier
///
/// Serialized capitalized ("Easy") to match the platform's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Request for a set of generated challenges
///
/// Immutable once deserialized; field presence is enforced at the API
/// boundary before any generation work starts.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRequest {
    pub role: String,
    pub experience_level: String,
    pub difficulty: Difficulty,
    pub number_of_questions: u32,
}

/// One input/output pair of a challenge
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestCase {
    pub input: String,
    pub output: String,
}

/// A generated coding interview challenge
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodingChallenge {
    /// Sequential ID starting at "1" within a generated set
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub input_format: String,
    pub output_format: String,
    pub constraints: String,
    /// Visible to the candidate
    pub sample_test_cases: Vec<TestCase>,
    /// Used for evaluation only
    pub hidden_test_cases: Vec<TestCase>,
}
