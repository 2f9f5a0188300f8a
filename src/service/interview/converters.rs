//! Assembly of evaluation outcomes into persistence records

use crate::model::{CodingResults, FeedbackRecord, InterviewFeedback};

/// Summary text persisted when evaluation produced the empty sentinel
const DEFAULT_FEEDBACK_TEXT: &str = "Interview completed. Due to technical issues, detailed \
    feedback could not be generated at this time.";

/// Neutral sub-score used with the default record
const DEFAULT_SCORE: i32 = 70;

/// Assemble a validated feedback object into the data-layer record shape
pub fn assemble_feedback_record(
    interview_id: &str,
    user_id: &str,
    feedback: InterviewFeedback,
) -> FeedbackRecord {
    FeedbackRecord {
        interview_id: interview_id.to_string(),
        user_id: user_id.to_string(),
        feed_back: feedback.summary,
        problem_solving: feedback.problem_solving,
        system_design: feedback.system_design,
        communication_skills: feedback.communication_skills,
        technical_accuracy: feedback.technical_accuracy,
        behavioral_responses: feedback.behavioral_responses,
        time_management: feedback.time_management,
    }
}

/// Record persisted when no feedback could be produced (sentinel outcome).
///
/// The interview is still marked completed; the neutral scores keep the
/// record shape intact for downstream dashboards.
pub fn default_feedback_record(interview_id: &str, user_id: &str) -> FeedbackRecord {
    FeedbackRecord {
        interview_id: interview_id.to_string(),
        user_id: user_id.to_string(),
        feed_back: DEFAULT_FEEDBACK_TEXT.to_string(),
        problem_solving: DEFAULT_SCORE,
        system_design: DEFAULT_SCORE,
        communication_skills: DEFAULT_SCORE,
        technical_accuracy: DEFAULT_SCORE,
        behavioral_responses: DEFAULT_SCORE,
        time_management: DEFAULT_SCORE,
    }
}

/// Assemble sandbox results of a coding interview into a feedback record.
///
/// Conversational sub-scores are zeroed; they do not apply to coding rounds.
pub fn assemble_coding_record(
    interview_id: &str,
    user_id: &str,
    results: &CodingResults,
) -> FeedbackRecord {
    let passed_questions = results.scores.iter().filter(|&&s| s == 100).count();
    let total_questions = results.scores.len();
    let verdict = if results.passed { "PASSED" } else { "FAILED" };

    FeedbackRecord {
        interview_id: interview_id.to_string(),
        user_id: user_id.to_string(),
        feed_back: format!(
            "Coding interview completed. {} out of {} challenges solved correctly ({}% success \
             rate). Overall: {}",
            passed_questions, total_questions, results.average_score, verdict
        ),
        problem_solving: results.average_score,
        system_design: results.average_score,
        communication_skills: 0,
        technical_accuracy: results.average_score,
        behavioral_responses: 0,
        time_management: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_renames_summary_field() {
        let feedback = InterviewFeedback {
            summary: "Strong problem solving.".to_string(),
            problem_solving: 88,
            system_design: 70,
            communication_skills: 75,
            technical_accuracy: 81,
            behavioral_responses: 79,
            time_management: 73,
        };

        let record = assemble_feedback_record("int-1", "user-9", feedback);

        assert_eq!(record.interview_id, "int-1");
        assert_eq!(record.user_id, "user-9");
        assert_eq!(record.feed_back, "Strong problem solving.");
        assert_eq!(record.problem_solving, 88);
        assert_eq!(record.behavioral_responses, 79);
    }

    #[test]
    fn test_default_record_is_neutral() {
        let record = default_feedback_record("int-2", "user-3");
        assert_eq!(record.problem_solving, 70);
        assert_eq!(record.time_management, 70);
        assert!(!record.feed_back.is_empty());
    }

    #[test]
    fn test_coding_record_aggregates_scores() {
        let results = CodingResults {
            scores: vec![100, 0, 100],
            average_score: 67,
            passed: true,
        };

        let record = assemble_coding_record("int-5", "user-1", &results);

        assert!(record.feed_back.contains("2 out of 3"));
        assert!(record.feed_back.contains("67% success rate"));
        assert!(record.feed_back.contains("PASSED"));
        assert_eq!(record.problem_solving, 67);
        assert_eq!(record.technical_accuracy, 67);
        assert_eq!(record.communication_skills, 0);
        assert_eq!(record.behavioral_responses, 0);
    }

    #[test]
    fn test_coding_record_failed_verdict() {
        let results = CodingResults {
            scores: vec![0, 0],
            average_score: 0,
            passed: false,
        };
        let record = assemble_coding_record("int-6", "user-2", &results);
        assert!(record.feed_back.contains("FAILED"));
    }
}
