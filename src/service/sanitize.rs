//! Syntactic recovery of JSON from raw model output
//!
//! Models occasionally wrap valid JSON in markdown fences or explanatory prose
//! despite being instructed not to. This module strips fences and, failing a
//! direct parse, scans for the first balanced `{...}` or `[...]` substring.
//! Recovery is purely syntactic; schema checks happen later in
//! [`crate::service::schema`].

use serde_json::Value;

/// Error produced when no step of the recovery ladder yields valid JSON
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("model output is empty")]
    Empty,

    #[error("no JSON value found in model output: {0}")]
    NoJson(String),
}

/// Parse raw model output into a generic JSON value.
///
/// Ladder: strip an outer code fence, trim, parse directly; otherwise parse
/// the first balanced object/array substring. No coercion beyond bracket
/// matching — surrounding prose is tolerated, malformed JSON is not.
pub fn sanitize(raw: &str) -> Result<Value, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let unfenced = strip_code_fence(trimmed).trim();

    if let Ok(value) = serde_json::from_str(unfenced) {
        return Ok(value);
    }

    if let Some(candidate) = find_balanced_json(unfenced)
        && let Ok(value) = serde_json::from_str(candidate)
    {
        return Ok(value);
    }

    Err(ParseError::NoJson(summarize(raw)))
}

/// Strip a single outer ```-fence (optionally tagged `json`) if present
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // Drop the language tag up to the first newline
    let body = match rest.find('\n') {
        Some(nl) => &rest[nl + 1..],
        None => rest,
    };

    match body.rfind("```") {
        Some(end) => &body[..end],
        // Unterminated fence: keep the body, the parse ladder decides
        None => body,
    }
}

/// Locate the first balanced `{...}` or `[...]` substring.
///
/// The scanner tracks string literals and escape sequences so brackets inside
/// strings do not affect depth. Returns `None` if no opener exists or the
/// text ends before the opener is balanced (truncated output).
fn find_balanced_json(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let bytes = text.as_bytes();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' | b'[' => depth += 1,
            b'}' | b']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

/// First 200 chars of the offending text, for logs
fn summarize(raw: &str) -> String {
    raw.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_bare_json() {
        let value = sanitize(r#"{"score": 85}"#).unwrap();
        assert_eq!(value, json!({"score": 85}));
    }

    #[test]
    fn test_strips_tagged_fence() {
        let raw = "```json\n{\"score\": 85}\n```";
        let value = sanitize(raw).unwrap();
        assert_eq!(value, json!({"score": 85}));
    }

    #[test]
    fn test_strips_untagged_fence() {
        let raw = "```\n[1, 2, 3]\n```";
        let value = sanitize(raw).unwrap();
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn test_recovers_json_from_surrounding_prose() {
        let raw = "Here is the evaluation you asked for:\n{\"score\": 42, \"ok\": true}\nLet me know if you need anything else.";
        let value = sanitize(raw).unwrap();
        assert_eq!(value, json!({"score": 42, "ok": true}));
    }

    #[test]
    fn test_recovers_fenced_json_inside_prose() {
        let raw = "Sure!\n```json\n{\"a\": [1, 2]}\n```";
        // Outer strip misses (prose before fence), bracket scan recovers
        let value = sanitize(raw).unwrap();
        assert_eq!(value, json!({"a": [1, 2]}));
    }

    #[test]
    fn test_braces_inside_strings_do_not_unbalance() {
        let raw = r#"noise {"text": "a } inside", "n": 1} trailing"#;
        let value = sanitize(raw).unwrap();
        assert_eq!(value, json!({"text": "a } inside", "n": 1}));
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let raw = r#"{"text": "say \"hi\" {ok}"}"#;
        let value = sanitize(raw).unwrap();
        assert_eq!(value["text"], "say \"hi\" {ok}");
    }

    #[test]
    fn test_array_recovery() {
        let raw = "The challenges are: [{\"id\": \"1\"}] as requested.";
        let value = sanitize(raw).unwrap();
        assert_eq!(value, json!([{"id": "1"}]));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(sanitize("   "), Err(ParseError::Empty)));
    }

    #[test]
    fn test_no_json_fails() {
        assert!(matches!(
            sanitize("I cannot evaluate this interview."),
            Err(ParseError::NoJson(_))
        ));
    }

    #[test]
    fn test_truncated_output_fails() {
        assert!(matches!(
            sanitize(r#"{"score": 85, "analysis": "cut off"#),
            Err(ParseError::NoJson(_))
        ));
    }

    #[test]
    fn test_empty_object_sentinel_passes_through() {
        let value = sanitize("{}").unwrap();
        assert_eq!(value, json!({}));
    }
}
