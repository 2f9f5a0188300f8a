//! Interview feedback types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validated feedback produced by the evaluation pipeline
///
/// Every sub-score is guaranteed to lie in 1..=100 once this type exists;
/// construction goes through the structured validator or the fallback
/// generator, both of which enforce the range.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InterviewFeedback {
    /// Concise performance summary
    #[serde(rename = "feedbackObject")]
    pub summary: String,
    pub problem_solving: i32,
    pub system_design: i32,
    pub communication_skills: i32,
    pub technical_accuracy: i32,
    pub behavioral_responses: i32,
    pub time_management: i32,
}

/// Outcome of evaluating an interview conversation
#[derive(Debug, Clone)]
pub enum FeedbackOutcome {
    /// A full feedback object, AI-produced or fallback
    Feedback(InterviewFeedback),
    /// The conversation was too short or empty to evaluate (`{}` sentinel)
    InsufficientConversation,
}

/// Persistence-record shape expected by the data layer
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub interview_id: String,
    pub user_id: String,
    pub feed_back: String,
    pub problem_solving: i32,
    pub system_design: i32,
    pub communication_skills: i32,
    pub technical_accuracy: i32,
    pub behavioral_responses: i32,
    pub time_management: i32,
}

/// Aggregated results of a coding interview, reported by the sandbox runner
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodingResults {
    /// Per-challenge scores; 100 means solved
    pub scores: Vec<i32>,
    pub average_score: i32,
    pub passed: bool,
}
