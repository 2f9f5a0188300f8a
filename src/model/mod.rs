pub mod challenge;
pub mod config;
pub mod feedback;
pub mod profile;

pub use challenge::{ChallengeRequest, CodingChallenge, Difficulty, TestCase};
pub use config::{Config, PromptLimits};
pub use feedback::{CodingResults, FeedbackOutcome, FeedbackRecord, InterviewFeedback};
pub use profile::{
    ProfileData, ProfileScore, ProfileSections, SectionScore, StructuredProfile,
};
