//! Candidate profile types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured profile content submitted for scoring
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub summary: Option<String>,
    pub work_experience: Option<String>,
    pub projects: Option<String>,
    pub skills: Option<String>,
    pub education: Option<String>,
    pub certifications: Option<String>,
}

/// Score and feedback for one profile section
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionScore {
    pub score: i32,
    pub max_score: i32,
    pub feedback: String,
}

/// Per-section breakdown of a profile score
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileSections {
    pub summary: SectionScore,
    pub experience: SectionScore,
    pub projects: SectionScore,
    pub skills: SectionScore,
    pub education: SectionScore,
    pub certifications: SectionScore,
}

/// Complete profile scoring result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileScore {
    /// Total score, the sum of the section scores
    pub score: i32,
    pub max_score: i32,
    pub analysis: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub sections: ProfileSections,
    /// Present when the result came from the degraded local path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Profile text parsed into the platform's six sections
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StructuredProfile {
    pub summary: String,
    pub skills: String,
    pub work_experience: String,
    pub projects: String,
    pub education: String,
    pub certifications: String,
}

impl ProfileData {
    /// True when every section is absent or blank
    pub fn is_empty(&self) -> bool {
        [
            &self.summary,
            &self.work_experience,
            &self.projects,
            &self.skills,
            &self.education,
            &self.certifications,
        ]
        .iter()
        .all(|s| s.as_deref().is_none_or(|v| v.trim().is_empty()))
    }
}
