//! Canned challenge sets used when AI generation is unavailable
//!
//! The catalog is keyed by difficulty and cycled when more items are
//! requested than exist; IDs are renumbered sequentially from "1" so the
//! caller always sees a well-formed set.

use crate::model::{ChallengeRequest, CodingChallenge, Difficulty, TestCase};

/// Produce a full challenge set without calling the AI collaborator.
///
/// Infallible: an empty catalog (cannot happen with the built-in data, but
/// guarded anyway since this is the error boundary of last resort) substitutes
/// a minimal valid challenge.
pub fn generate_fallback_challenges(request: &ChallengeRequest) -> Vec<CodingChallenge> {
    let catalog = catalog_for(request.difficulty);

    (0..request.number_of_questions as usize)
        .map(|i| {
            let mut challenge = if catalog.is_empty() {
                minimal_challenge(request.difficulty)
            } else {
                catalog[i % catalog.len()].clone()
            };
            challenge.id = (i + 1).to_string();
            challenge
        })
        .collect()
}

fn catalog_for(difficulty: Difficulty) -> Vec<CodingChallenge> {
    match difficulty {
        Difficulty::Easy => vec![two_sum(), palindrome_number()],
        Difficulty::Medium => vec![valid_parentheses()],
        Difficulty::Hard => vec![median_of_two_sorted_arrays()],
    }
}

fn case(input: &str, output: &str) -> TestCase {
    TestCase {
        input: input.to_string(),
        output: output.to_string(),
    }
}

fn two_sum() -> CodingChallenge {
    CodingChallenge {
        id: "1".to_string(),
        title: "Two Sum".to_string(),
        description: "Given an array of integers nums and an integer target, return indices of \
                      the two numbers such that they add up to target. You may assume that each \
                      input would have exactly one solution, and you may not use the same element \
                      twice."
            .to_string(),
        difficulty: Difficulty::Easy,
        input_format: "First line contains two integers n and target. Second line contains n \
                       space separated integers."
            .to_string(),
        output_format: "Print two space separated integers representing the indices.".to_string(),
        constraints: "2 <= n <= 10^4, -10^9 <= nums[i], target <= 10^9".to_string(),
        sample_test_cases: vec![case("4 9\n2 7 11 15", "0 1"), case("3 6\n3 2 4", "1 2")],
        hidden_test_cases: vec![
            case("2 6\n3 3", "0 1"),
            case("5 8\n1 2 3 4 5", "2 4"),
            case("4 -1\n-3 -1 2 1", "0 3"),
        ],
    }
}

fn palindrome_number() -> CodingChallenge {
    CodingChallenge {
        id: "2".to_string(),
        title: "Palindrome Number".to_string(),
        description: "Given an integer x, return true if x is a palindrome, and false otherwise. \
                      An integer is a palindrome when it reads the same forward and backward."
            .to_string(),
        difficulty: Difficulty::Easy,
        input_format: "First line contains an integer x.".to_string(),
        output_format: "Print 'true' if palindrome, 'false' otherwise.".to_string(),
        constraints: "-2^31 <= x <= 2^31 - 1".to_string(),
        sample_test_cases: vec![case("121", "true"), case("-121", "false")],
        hidden_test_cases: vec![
            case("10", "false"),
            case("0", "true"),
            case("12321", "true"),
        ],
    }
}

fn valid_parentheses() -> CodingChallenge {
    CodingChallenge {
        id: "3".to_string(),
        title: "Valid Parentheses".to_string(),
        description: "Given a string s containing just the characters '(', ')', '{', '}', '[' \
                      and ']', determine if the input string is valid. An input string is valid \
                      if open brackets are closed by the same type of brackets in the correct \
                      order."
            .to_string(),
        difficulty: Difficulty::Medium,
        input_format: "First line contains a string s.".to_string(),
        output_format: "Print 'true' if valid, 'false' otherwise.".to_string(),
        constraints: "1 <= s.length <= 10^4, s consists of parentheses only '()[]{}'".to_string(),
        sample_test_cases: vec![case("()[]{}", "true"), case("(]", "false")],
        hidden_test_cases: vec![
            case("([)]", "false"),
            case("{[]}", "true"),
            case("((()))", "true"),
        ],
    }
}

fn median_of_two_sorted_arrays() -> CodingChallenge {
    CodingChallenge {
        id: "4".to_string(),
        title: "Median of Two Sorted Arrays".to_string(),
        description: "Given two sorted arrays nums1 and nums2 of size m and n respectively, \
                      return the median of the two sorted arrays. The overall run time \
                      complexity should be O(log (m+n))."
            .to_string(),
        difficulty: Difficulty::Hard,
        input_format: "First line contains two integers m and n. Second line contains m \
                       integers. Third line contains n integers."
            .to_string(),
        output_format: "Print the median as a floating point number.".to_string(),
        constraints: "nums1.length == m, nums2.length == n, 0 <= m <= 1000, 0 <= n <= 1000, \
                      1 <= m + n <= 2000"
            .to_string(),
        sample_test_cases: vec![case("2 2\n1 3\n2 4", "2.5"), case("2 1\n1 2\n3", "2.0")],
        hidden_test_cases: vec![
            case("1 1\n1\n2", "1.5"),
            case("3 3\n1 2 3\n4 5 6", "3.5"),
            case("0 1\n\n1", "1.0"),
        ],
    }
}

/// Last-resort single challenge, used only if a catalog is ever empty
fn minimal_challenge(difficulty: Difficulty) -> CodingChallenge {
    CodingChallenge {
        id: "1".to_string(),
        title: "Sum of Two Integers".to_string(),
        description: "Read two integers and print their sum.".to_string(),
        difficulty,
        input_format: "One line with two space separated integers a and b.".to_string(),
        output_format: "Print a single integer, the sum of a and b.".to_string(),
        constraints: "-10^9 <= a, b <= 10^9".to_string(),
        sample_test_cases: vec![case("1 2", "3"), case("-1 1", "0")],
        hidden_test_cases: vec![case("0 0", "0"), case("100 23", "123"), case("-5 -7", "-12")],
    }
}
