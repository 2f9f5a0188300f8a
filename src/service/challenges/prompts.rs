//! Prompts for coding challenge generation

use crate::model::ChallengeRequest;

/// Build the challenge-generation prompt.
///
/// Deterministic for a given request; every request field is interpolated
/// verbatim.
pub fn build_challenge_prompt(request: &ChallengeRequest) -> String {
    format!(
        r#"Generate {count} coding interview challenges for a {role} position with {experience} experience level and {difficulty} difficulty.

Each challenge must include:
1. A unique title
2. A clear problem description
3. Input format specification
4. Output format specification
5. Constraints
6. 2 sample test cases with input/output
7. 3 hidden test cases with input/output for evaluation

Return ONLY a valid JSON array of challenge objects with the following structure:
[
  {{
    "id": "1",
    "title": "Two Sum",
    "description": "Given an array of integers nums and an integer target, return indices of the two numbers such that they add up to target.",
    "difficulty": "{difficulty}",
    "inputFormat": "First line contains an integer n representing the size of array. Second line contains n space separated integers. Third line contains an integer target.",
    "outputFormat": "Print two space separated integers representing the indices of the two numbers that add up to target.",
    "constraints": "2 <= nums.length <= 10^4, -10^9 <= nums[i] <= 10^9",
    "sampleTestCases": [
      {{ "input": "4\n2 7 11 15\n9", "output": "0 1" }}
    ],
    "hiddenTestCases": [
      {{ "input": "2\n3 3\n6", "output": "0 1" }}
    ]
  }}
]

STRICT RULES:
- Return ONLY valid JSON, nothing else
- Do not include markdown, code fences, or any commentary
- Ensure all fields are populated
- Make problems appropriate for the experience level and role
- Ensure hidden test cases are more comprehensive than sample test cases
- Make sure each challenge has a unique sequential ID starting at "1""#,
        count = request.number_of_questions,
        role = request.role,
        experience = request.experience_level,
        difficulty = request.difficulty,
    )
}
