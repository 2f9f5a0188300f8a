//! Validation of model-produced interview feedback

use serde_json::Value;

use crate::model::{FeedbackOutcome, InterviewFeedback};
use crate::service::schema::{
    is_empty_sentinel, FieldKind, FieldSpec, SchemaDescriptor, ValidationError,
};

const SCORE_RANGE: FieldKind = FieldKind::Integer { min: 1, max: 100 };

/// Required-field contract for a feedback object
pub const FEEDBACK_SCHEMA: SchemaDescriptor = SchemaDescriptor {
    name: "interview_feedback",
    fields: &[
        FieldSpec {
            key: "feedbackObject",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "ProblemSolving",
            kind: SCORE_RANGE,
        },
        FieldSpec {
            key: "SystemDesign",
            kind: SCORE_RANGE,
        },
        FieldSpec {
            key: "CommunicationSkills",
            kind: SCORE_RANGE,
        },
        FieldSpec {
            key: "TechnicalAccuracy",
            kind: SCORE_RANGE,
        },
        FieldSpec {
            key: "BehavioralResponses",
            kind: SCORE_RANGE,
        },
        FieldSpec {
            key: "TimeManagement",
            kind: SCORE_RANGE,
        },
    ],
};

/// Validate parsed feedback and type it.
///
/// The `{}` sentinel and a blank summary both mean "no feedback produced";
/// they are outcomes, not errors. Anything else must satisfy
/// [`FEEDBACK_SCHEMA`] exactly.
pub fn validate_feedback(value: &Value) -> Result<FeedbackOutcome, ValidationError> {
    if is_empty_sentinel(value) {
        return Ok(FeedbackOutcome::InsufficientConversation);
    }

    FEEDBACK_SCHEMA.validate(value)?;

    let feedback: InterviewFeedback =
        serde_json::from_value(value.clone()).map_err(|e| ValidationError::Malformed {
            schema: FEEDBACK_SCHEMA.name,
            message: e.to_string(),
        })?;

    if feedback.summary.trim().is_empty() {
        return Ok(FeedbackOutcome::InsufficientConversation);
    }

    Ok(FeedbackOutcome::Feedback(feedback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feedback_json() -> Value {
        json!({
            "feedbackObject": "Solid performance with room to grow in system design.",
            "ProblemSolving": 78,
            "SystemDesign": 65,
            "CommunicationSkills": 82,
            "TechnicalAccuracy": 74,
            "BehavioralResponses": 80,
            "TimeManagement": 71
        })
    }

    #[test]
    fn test_accepts_full_feedback() {
        let outcome = validate_feedback(&feedback_json()).unwrap();
        let FeedbackOutcome::Feedback(feedback) = outcome else {
            panic!("expected feedback");
        };
        assert_eq!(feedback.problem_solving, 78);
        assert_eq!(feedback.time_management, 71);
    }

    #[test]
    fn test_empty_object_is_sentinel_not_error() {
        assert!(matches!(
            validate_feedback(&json!({})),
            Ok(FeedbackOutcome::InsufficientConversation)
        ));
    }

    #[test]
    fn test_blank_summary_is_sentinel() {
        let mut value = feedback_json();
        value["feedbackObject"] = json!("   ");
        assert!(matches!(
            validate_feedback(&value),
            Ok(FeedbackOutcome::InsufficientConversation)
        ));
    }

    #[test]
    fn test_rejects_missing_sub_score() {
        let mut value = feedback_json();
        value.as_object_mut().unwrap().remove("SystemDesign");
        let err = validate_feedback(&value).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField {
                field: "SystemDesign",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_out_of_range_score() {
        let mut value = feedback_json();
        value["ProblemSolving"] = json!(0);
        assert!(matches!(
            validate_feedback(&value),
            Err(ValidationError::OutOfRange {
                field: "ProblemSolving",
                ..
            })
        ));

        let mut value = feedback_json();
        value["TimeManagement"] = json!(101);
        assert!(matches!(
            validate_feedback(&value),
            Err(ValidationError::OutOfRange {
                field: "TimeManagement",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_integer_score() {
        let mut value = feedback_json();
        value["TechnicalAccuracy"] = json!("high");
        assert!(matches!(
            validate_feedback(&value),
            Err(ValidationError::WrongType {
                field: "TechnicalAccuracy",
                ..
            })
        ));
    }
}
