//! Prompts for interview feedback evaluation

/// Build the evaluation prompt for a flattened interview transcript.
///
/// The transcript is interpolated verbatim; truncation to model limits
/// happens before this builder runs.
pub fn build_feedback_prompt(conversation: &str) -> String {
    format!(
        r#"Evaluate the user's performance in the interview.

{conversation}

If the conversation is too short or lacks meaningful questions, return exactly this:
{{}}

If the conversation is valid, return a single valid JSON object with the following structure:
{{
    "feedbackObject": "A concise summary (350-400 characters) highlighting performance and areas of improvement.",
    "ProblemSolving": <1-100>,
    "SystemDesign": <1-100>,
    "CommunicationSkills": <1-100>,
    "TechnicalAccuracy": <1-100>,
    "BehavioralResponses": <1-100>,
    "TimeManagement": <1-100>
}}

STRICT RULES:
- Do NOT include any markdown, triple backticks, or code blocks
- Do NOT include any text, labels, commentary, or variable names before or after the JSON
- Do NOT wrap the output in quotes
- Return only the raw JSON object as shown above, nothing else
- If the interview is invalid, return exactly: {{}}"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_transcript_verbatim() {
        let conversation = "Assistant: Tell me about yourself.\nUser: I build backend systems.";
        let prompt = build_feedback_prompt(conversation);
        assert!(prompt.contains(conversation));
    }

    #[test]
    fn test_prompt_names_every_sub_score() {
        let prompt = build_feedback_prompt("User: hi");
        for key in [
            "ProblemSolving",
            "SystemDesign",
            "CommunicationSkills",
            "TechnicalAccuracy",
            "BehavioralResponses",
            "TimeManagement",
        ] {
            assert!(prompt.contains(key), "missing {key}");
        }
    }
}
