//! Heuristic feedback scoring used when AI evaluation is unavailable
//!
//! Derives a base score from simple signals in the transcript (length,
//! technical and behavioral keywords), then perturbs each sub-score within a
//! bounded range so degraded-mode feedback does not read as six identical
//! numbers. Conversations with fewer than four non-empty lines yield the
//! empty sentinel instead of a score.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{FeedbackOutcome, InterviewFeedback};
use crate::service::jitter::JitterSource;

/// Minimum non-empty transcript lines required to score at all
const MIN_MEANINGFUL_LINES: usize = 4;

static TECHNICAL_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)javascript|python|react|node|database|api|algorithm|data structure")
        .expect("static regex")
});

static BEHAVIORAL_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)experience|challenge|team|project|leadership").expect("static regex")
});

const FALLBACK_SUMMARY: &str = "Thank you for completing the interview. Due to high system \
    load, we're providing preliminary feedback. Your responses showed good engagement with the \
    interview process. For detailed personalized feedback, please try again later when our AI \
    analysis service is fully available. Overall performance appears solid with room for \
    continued development in technical depth and communication clarity.";

/// Score a transcript without calling the AI collaborator.
///
/// Deterministic given a pinned jitter source; every sub-score is clamped to
/// 1..=100 so the output always satisfies the feedback schema.
pub fn generate_fallback_feedback(
    conversation: &str,
    jitter: &mut dyn JitterSource,
) -> FeedbackOutcome {
    let line_count = conversation
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count();

    if line_count < MIN_MEANINGFUL_LINES {
        return FeedbackOutcome::InsufficientConversation;
    }

    let mut base: i32 = 60;
    if conversation.len() > 1000 {
        base += 10;
    }
    if TECHNICAL_SIGNAL.is_match(conversation) {
        base += 15;
    }
    if BEHAVIORAL_SIGNAL.is_match(conversation) {
        base += 10;
    }
    if line_count > 10 {
        base += 5;
    }
    base = base.clamp(1, 100);

    // Bounded perturbation of the base, then small per-score offsets
    let variation = jitter.sample(20) - 10;
    let final_score = (base + variation).clamp(1, 100);

    let score = |shift: i32, spread: u32, jitter: &mut dyn JitterSource| {
        (final_score + shift + jitter.sample(spread)).clamp(1, 100)
    };

    FeedbackOutcome::Feedback(InterviewFeedback {
        summary: FALLBACK_SUMMARY.to_string(),
        problem_solving: score(-5, 10, jitter),
        system_design: score(-10, 15, jitter),
        communication_skills: score(0, 10, jitter),
        technical_accuracy: score(-5, 10, jitter),
        behavioral_responses: score(0, 5, jitter),
        time_management: score(0, 8, jitter),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::interview::validation::validate_feedback;
    use crate::service::jitter::testing::FixedJitter;
    use crate::service::jitter::RandomJitter;

    fn transcript(lines: usize, body: &str) -> String {
        (0..lines)
            .map(|i| format!("User: {} line {}", body, i))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_short_conversation_yields_sentinel() {
        let mut jitter = FixedJitter::zero();
        for lines in 0..4 {
            let outcome = generate_fallback_feedback(&transcript(lines, "hello"), &mut jitter);
            assert!(
                matches!(outcome, FeedbackOutcome::InsufficientConversation),
                "{lines} lines should not be scored"
            );
        }
    }

    #[test]
    fn test_four_lines_is_enough_to_score() {
        let mut jitter = FixedJitter::zero();
        let outcome = generate_fallback_feedback(&transcript(4, "hello"), &mut jitter);
        assert!(matches!(outcome, FeedbackOutcome::Feedback(_)));
    }

    #[test]
    fn test_blank_lines_do_not_count() {
        let mut jitter = FixedJitter::zero();
        let conversation = "User: hi\n\n\n\nUser: bye";
        assert!(matches!(
            generate_fallback_feedback(conversation, &mut jitter),
            FeedbackOutcome::InsufficientConversation
        ));
    }

    #[test]
    fn test_pinned_jitter_yields_exact_scores() {
        // 4 plain lines: base 60; zero jitter makes variation -10
        let mut jitter = FixedJitter::zero();
        let outcome = generate_fallback_feedback(&transcript(4, "hello"), &mut jitter);
        let FeedbackOutcome::Feedback(feedback) = outcome else {
            panic!("expected feedback");
        };
        // final = 60 + (0 - 10) = 50
        assert_eq!(feedback.problem_solving, 45);
        assert_eq!(feedback.system_design, 40);
        assert_eq!(feedback.communication_skills, 50);
        assert_eq!(feedback.technical_accuracy, 45);
        assert_eq!(feedback.behavioral_responses, 50);
        assert_eq!(feedback.time_management, 50);
    }

    #[test]
    fn test_keyword_signals_raise_the_base() {
        let mut jitter = FixedJitter::zero();
        let plain = generate_fallback_feedback(&transcript(4, "hello"), &mut jitter);

        let mut jitter = FixedJitter::zero();
        let technical = generate_fallback_feedback(
            &transcript(4, "we used Python and a database API"),
            &mut jitter,
        );

        let (FeedbackOutcome::Feedback(plain), FeedbackOutcome::Feedback(technical)) =
            (plain, technical)
        else {
            panic!("expected feedback");
        };
        assert_eq!(
            technical.communication_skills,
            plain.communication_skills + 15
        );
    }

    #[test]
    fn test_scores_always_in_range() {
        let mut jitter = RandomJitter::from_seed(1234);
        for lines in [4usize, 8, 12, 40] {
            let conversation =
                transcript(lines, "Python database algorithm leadership team project experience");
            let outcome = generate_fallback_feedback(&conversation, &mut jitter);
            let FeedbackOutcome::Feedback(feedback) = outcome else {
                panic!("expected feedback");
            };
            for score in [
                feedback.problem_solving,
                feedback.system_design,
                feedback.communication_skills,
                feedback.technical_accuracy,
                feedback.behavioral_responses,
                feedback.time_management,
            ] {
                assert!((1..=100).contains(&score), "score {score} out of range");
            }
        }
    }

    #[test]
    fn test_output_satisfies_the_ai_path_schema() {
        let mut jitter = RandomJitter::from_seed(99);
        let outcome = generate_fallback_feedback(&transcript(12, "react project"), &mut jitter);
        let FeedbackOutcome::Feedback(feedback) = outcome else {
            panic!("expected feedback");
        };
        let value = serde_json::to_value(&feedback).unwrap();
        assert!(matches!(
            validate_feedback(&value),
            Ok(FeedbackOutcome::Feedback(_))
        ));
    }
}
