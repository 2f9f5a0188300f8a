//! Prompts for profile scoring and structuring

use crate::model::ProfileData;

/// Flatten structured profile data into the labelled text block the scoring
/// prompt expects. Absent or blank sections are omitted.
pub fn build_profile_text(data: &ProfileData) -> String {
    let mut text = String::new();

    let mut push_section = |label: &str, content: &Option<String>| {
        if let Some(content) = content
            && !content.trim().is_empty()
        {
            text.push_str(label);
            text.push_str(":\n");
            text.push_str(content);
            text.push_str("\n\n");
        }
    };

    push_section("Professional Summary", &data.summary);
    push_section("Work Experience", &data.work_experience);
    push_section("Projects", &data.projects);
    push_section("Skills", &data.skills);
    push_section("Education", &data.education);
    push_section("Certifications", &data.certifications);

    text
}

/// Build the profile-scoring prompt
pub fn build_score_prompt(profile_text: &str) -> String {
    format!(
        r#"Analyze the following professional profile and provide a comprehensive scoring assessment.

Profile Content:
{profile_text}

Evaluate this profile and provide a detailed analysis with the following structure:
{{
  "score": 85,
  "maxScore": 100,
  "analysis": "A detailed explanation of the score (300-400 words)",
  "strengths": ["List of key strengths identified in the profile"],
  "weaknesses": ["Areas that need improvement in the profile"],
  "recommendations": ["Specific recommendations to improve the profile"],
  "sections": {{
    "summary": {{ "score": 20, "maxScore": 20, "feedback": "Feedback on the professional summary" }},
    "experience": {{ "score": 25, "maxScore": 25, "feedback": "Feedback on work experience section" }},
    "projects": {{ "score": 15, "maxScore": 15, "feedback": "Feedback on projects section" }},
    "skills": {{ "score": 10, "maxScore": 10, "feedback": "Feedback on skills section" }},
    "education": {{ "score": 10, "maxScore": 10, "feedback": "Feedback on education section" }},
    "certifications": {{ "score": 5, "maxScore": 5, "feedback": "Feedback on certifications section" }}
  }}
}}

STRICT RULES:
- Return ONLY valid JSON, nothing else
- Ensure all fields are populated
- Provide realistic scores based on the profile quality
- Do not include markdown or any other formatting
- Be constructive and specific in your feedback
- The total score should be out of 100"#,
    )
}

/// Build the profile-structuring prompt
pub fn build_structure_prompt(raw_profile_text: &str) -> String {
    format!(
        r#"Parse the following raw profile text and extract structured information. Return ONLY a valid JSON object with these exact keys:

{{
  "summary": "Professional summary text",
  "skills": "Skills organized by categories with proper formatting",
  "workExperience": "Work experience with company, dates, role, and bullet points",
  "projects": "Key projects with descriptions",
  "education": "Education with institution, degree, dates, and grades",
  "certifications": "Certifications with title and date"
}}

Rules:
- Extract information accurately from the provided text
- Format work experience as: "Company (dates) - Role, Location" followed by bullet points
- Format education as: "Degree - Institution, Location (dates) - Grade"
- Format certifications as: "Certification Title - Issuer (date)"
- Keep skills organized by categories like "Languages: skill1, skill2"
- Ensure all text is properly formatted and professional
- Return ONLY the JSON object, no additional text or markdown

Raw profile text:
{raw_profile_text}"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_text_labels_present_sections() {
        let data = ProfileData {
            summary: Some("Backend engineer, 5 years.".to_string()),
            skills: Some("Rust, Postgres".to_string()),
            ..Default::default()
        };

        let text = build_profile_text(&data);

        assert!(text.contains("Professional Summary:\nBackend engineer, 5 years."));
        assert!(text.contains("Skills:\nRust, Postgres"));
        assert!(!text.contains("Work Experience"));
        assert!(!text.contains("Certifications"));
    }

    #[test]
    fn test_profile_text_skips_blank_sections() {
        let data = ProfileData {
            summary: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(build_profile_text(&data).is_empty());
    }

    #[test]
    fn test_score_prompt_interpolates_profile_verbatim() {
        let profile = "Professional Summary:\nSeasoned SRE.";
        let prompt = build_score_prompt(profile);
        assert!(prompt.contains(profile));
        assert!(prompt.contains("Return ONLY valid JSON"));
    }

    #[test]
    fn test_structure_prompt_interpolates_raw_text_verbatim() {
        let raw = "John Doe\nSkills: Rust, Go\nACME Corp 2019-2023";
        let prompt = build_structure_prompt(raw);
        assert!(prompt.contains(raw));
        assert!(prompt.contains("\"workExperience\""));
    }
}
