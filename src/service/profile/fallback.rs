//! Deterministic profile scoring and structuring used when AI is unavailable
//!
//! Scoring is proportional to section content length, capped at each
//! section's weight; structuring is keyword-line extraction. Both are pure
//! functions of their input and always satisfy the same schemas as the AI
//! path.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{ProfileData, ProfileScore, ProfileSections, SectionScore, StructuredProfile};

/// Section weights summing to 100
const SUMMARY_WEIGHT: i32 = 20;
const EXPERIENCE_WEIGHT: i32 = 25;
const PROJECTS_WEIGHT: i32 = 15;
const SKILLS_WEIGHT: i32 = 10;
const EDUCATION_WEIGHT: i32 = 10;
const CERTIFICATIONS_WEIGHT: i32 = 5;

const FALLBACK_WARNING: &str = "This is a basic analysis due to AI service quota limitations. \
    Upgrade your plan for detailed AI-powered profile evaluation.";

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").expect("static regex"));

static INSTITUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(university|college|institute)\b").expect("static regex"));

/// Score a profile without calling the AI collaborator.
///
/// Total is the sum of section scores; completeness counts non-empty
/// sections out of six.
pub fn generate_fallback_profile_score(data: &ProfileData) -> ProfileScore {
    let sections = ProfileSections {
        summary: score_section(
            data.summary.as_deref(),
            SUMMARY_WEIGHT,
            "Professional summary is present and provides an overview of your background.",
            "Consider adding a professional summary to highlight your key qualifications and \
             career goals.",
        ),
        experience: score_section(
            data.work_experience.as_deref(),
            EXPERIENCE_WEIGHT,
            "Work experience section is included, showcasing your professional background.",
            "Add detailed work experience to demonstrate your career progression and \
             achievements.",
        ),
        projects: score_section(
            data.projects.as_deref(),
            PROJECTS_WEIGHT,
            "Projects section highlights your practical experience and technical skills.",
            "Include relevant projects to showcase your hands-on experience and problem-solving \
             abilities.",
        ),
        skills: score_section(
            data.skills.as_deref(),
            SKILLS_WEIGHT,
            "Skills section demonstrates your technical competencies.",
            "List your technical skills and competencies to show potential employers your \
             capabilities.",
        ),
        education: score_section(
            data.education.as_deref(),
            EDUCATION_WEIGHT,
            "Education background is documented, showing your academic qualifications.",
            "Include your educational background to establish your foundational knowledge.",
        ),
        certifications: score_section(
            data.certifications.as_deref(),
            CERTIFICATIONS_WEIGHT,
            "Certifications demonstrate your commitment to professional development.",
            "Consider adding relevant certifications to strengthen your professional \
             credentials.",
        ),
    };

    let named = [
        ("summary", &sections.summary),
        ("experience", &sections.experience),
        ("projects", &sections.projects),
        ("skills", &sections.skills),
        ("education", &sections.education),
        ("certifications", &sections.certifications),
    ];

    let total_score: i32 = named.iter().map(|(_, s)| s.score).sum();
    let filled = named.iter().filter(|(_, s)| s.score > 0).count();
    let completeness_pct = (filled as f64 / 6.0 * 100.0).round() as i32;

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut recommendations = Vec::new();

    for (key, section) in &named {
        if section.score > 0 {
            strengths.push(format!("{} section is present", capitalize(key)));
        } else {
            weaknesses.push(format!("Missing {} section", key));
            recommendations.push(format!("Add detailed information to the {} section", key));
        }
    }

    if strengths.is_empty() {
        strengths.push("Profile structure is established".to_string());
    }
    if weaknesses.is_empty() {
        weaknesses.push("Consider adding more detailed content to existing sections".to_string());
        recommendations
            .push("Expand on existing sections with more specific details and achievements".to_string());
    }

    let analysis = format!(
        "This profile analysis is based on content completeness and basic quality assessment \
         due to service limitations. Your profile is {}% complete with {} out of 6 sections \
         filled. The overall score of {}/100 reflects the presence and detail of information \
         provided. For a more comprehensive AI-powered analysis, please try again later when \
         the AI evaluation service is available.",
        completeness_pct, filled, total_score
    );

    ProfileScore {
        score: total_score,
        max_score: 100,
        analysis,
        strengths,
        weaknesses,
        recommendations,
        sections,
        warning: Some(FALLBACK_WARNING.to_string()),
    }
}

/// Structure raw profile text without calling the AI collaborator.
///
/// Keyword-line extraction only; sections the heuristics cannot recover carry
/// an explicit "enter manually" placeholder.
pub fn generate_fallback_structured_profile(raw_text: &str) -> StructuredProfile {
    StructuredProfile {
        summary: "Professional summary not available due to service limits. Please enter \
                  manually."
            .to_string(),
        skills: extract_skills(raw_text),
        work_experience: extract_work_experience(raw_text),
        projects: "Projects not available due to service limits. Please enter manually."
            .to_string(),
        education: extract_education(raw_text),
        certifications: "Certifications not available due to service limits. Please enter \
                         manually."
            .to_string(),
    }
}

/// Length-proportional score: `len/100 × weight`, capped at the weight,
/// at least 1 when any content exists, 0 otherwise.
fn score_section(content: Option<&str>, weight: i32, present: &str, absent: &str) -> SectionScore {
    let trimmed = content.map(str::trim).unwrap_or_default();

    let (score, feedback) = if trimmed.is_empty() {
        (0, absent)
    } else {
        let length = trimmed.chars().count() as i32;
        let proportional = (length * weight) / 100;
        (proportional.clamp(1, weight), present)
    };

    SectionScore {
        score,
        max_score: weight,
        feedback: feedback.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn extract_skills(text: &str) -> String {
    const LABELS: [&str; 5] = [
        "skills",
        "technologies",
        "programming languages",
        "frameworks",
        "tools",
    ];

    // A labelled line wins; strip the label prefix if it leads the line
    if let Some(line) = text.lines().find(|line| {
        let lower = line.to_lowercase();
        LABELS.iter().any(|label| lower.contains(label))
    }) {
        let stripped = match line.split_once(':') {
            Some((prefix, rest)) if LABELS.iter().any(|l| prefix.to_lowercase().contains(l)) => {
                rest.trim()
            }
            _ => line.trim(),
        };
        return stripped.to_string();
    }

    // Otherwise look for well-known technology names anywhere in the text
    const COMMON_SKILLS: [&str; 9] = [
        "javascript", "python", "java", "react", "node.js", "html", "css", "sql", "git",
    ];
    let lower = text.to_lowercase();
    let found: Vec<&str> = COMMON_SKILLS
        .iter()
        .copied()
        .filter(|skill| lower.contains(skill))
        .collect();

    if found.is_empty() {
        "Skills not detected. Please enter manually.".to_string()
    } else {
        format!("Technical Skills: {}", found.join(", "))
    }
}

fn extract_work_experience(text: &str) -> String {
    const KEYWORDS: [&str; 5] = ["experience", "work", "employment", "job", "position"];

    let lines: Vec<&str> = text
        .lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            KEYWORDS.iter().any(|k| lower.contains(k)) || YEAR.is_match(line)
        })
        .collect();

    if lines.is_empty() {
        "Work experience not detected. Please enter manually.".to_string()
    } else {
        lines.join("\n")
    }
}

fn extract_education(text: &str) -> String {
    const KEYWORDS: [&str; 7] = [
        "education",
        "university",
        "college",
        "degree",
        "bachelor",
        "master",
        "phd",
    ];

    let lines: Vec<&str> = text
        .lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            KEYWORDS.iter().any(|k| lower.contains(k)) || INSTITUTION.is_match(line)
        })
        .collect();

    if lines.is_empty() {
        "Education not detected. Please enter manually.".to_string()
    } else {
        lines.join("\n")
    }
}
