//! Schema descriptors for validating parsed model output
//!
//! A descriptor lists required keys with an expected kind and, for numeric
//! fields, an inclusive range. Validation fails on the first missing or
//! violating field — no silent defaulting. The bare empty object `{}` is a
//! recognized sentinel ("insufficient input to evaluate") and is accepted
//! regardless of schema; callers decide what the sentinel means for them.

use serde_json::Value;

/// Expected kind of a required field
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Non-empty string
    String,
    /// Integer within an inclusive range
    Integer { min: i64, max: i64 },
    /// JSON array (element checks are per use case)
    Array,
    /// JSON object
    Object,
}

/// A single required field of a schema
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: FieldKind,
}

/// Required-field contract for one model-output shape
#[derive(Debug, Clone, Copy)]
pub struct SchemaDescriptor {
    /// Name used in error messages and logs
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

/// First schema violation found in a parsed value
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{schema}: expected a JSON object")]
    NotAnObject { schema: &'static str },

    #[error("{schema}: expected a JSON array")]
    NotAnArray { schema: &'static str },

    #[error("{schema}: {message}")]
    Malformed {
        schema: &'static str,
        message: String,
    },

    #[error("{schema}: missing required field '{field}'")]
    MissingField {
        schema: &'static str,
        field: &'static str,
    },

    #[error("{schema}: field '{field}' has the wrong type (expected {expected})")]
    WrongType {
        schema: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("{schema}: field '{field}' value {value} is outside [{min}, {max}]")]
    OutOfRange {
        schema: &'static str,
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// True when the value is exactly the empty-object sentinel
pub fn is_empty_sentinel(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.is_empty())
}

impl SchemaDescriptor {
    /// Check every required field, failing on the first violation.
    ///
    /// Does not treat `{}` specially; callers that honor the sentinel must
    /// check [`is_empty_sentinel`] first.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let Value::Object(map) = value else {
            return Err(ValidationError::NotAnObject { schema: self.name });
        };

        for spec in self.fields {
            let field = map.get(spec.key).ok_or(ValidationError::MissingField {
                schema: self.name,
                field: spec.key,
            })?;

            match spec.kind {
                FieldKind::String => {
                    if !field.is_string() {
                        return Err(ValidationError::WrongType {
                            schema: self.name,
                            field: spec.key,
                            expected: "string",
                        });
                    }
                }
                FieldKind::Integer { min, max } => {
                    let Some(n) = field.as_i64() else {
                        return Err(ValidationError::WrongType {
                            schema: self.name,
                            field: spec.key,
                            expected: "integer",
                        });
                    };
                    if n < min || n > max {
                        return Err(ValidationError::OutOfRange {
                            schema: self.name,
                            field: spec.key,
                            value: n,
                            min,
                            max,
                        });
                    }
                }
                FieldKind::Array => {
                    if !field.is_array() {
                        return Err(ValidationError::WrongType {
                            schema: self.name,
                            field: spec.key,
                            expected: "array",
                        });
                    }
                }
                FieldKind::Object => {
                    if !field.is_object() {
                        return Err(ValidationError::WrongType {
                            schema: self.name,
                            field: spec.key,
                            expected: "object",
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEST_SCHEMA: SchemaDescriptor = SchemaDescriptor {
        name: "test",
        fields: &[
            FieldSpec {
                key: "summary",
                kind: FieldKind::String,
            },
            FieldSpec {
                key: "score",
                kind: FieldKind::Integer { min: 1, max: 100 },
            },
            FieldSpec {
                key: "items",
                kind: FieldKind::Array,
            },
        ],
    };

    #[test]
    fn test_accepts_conforming_object() {
        let value = json!({"summary": "good", "score": 85, "items": []});
        assert!(TEST_SCHEMA.validate(&value).is_ok());
    }

    #[test]
    fn test_rejects_missing_field_by_name() {
        let value = json!({"summary": "good", "items": []});
        let err = TEST_SCHEMA.validate(&value).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField { field: "score", .. }
        ));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let value = json!({"summary": "good", "score": 120, "items": []});
        let err = TEST_SCHEMA.validate(&value).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "score",
                value: 120,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_below_range() {
        let value = json!({"summary": "good", "score": 0, "items": []});
        assert!(matches!(
            TEST_SCHEMA.validate(&value),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_wrong_type() {
        let value = json!({"summary": 7, "score": 85, "items": []});
        let err = TEST_SCHEMA.validate(&value).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::WrongType {
                field: "summary",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            TEST_SCHEMA.validate(&json!([1, 2])),
            Err(ValidationError::NotAnObject { .. })
        ));
    }

    #[test]
    fn test_first_failure_wins() {
        // Both summary and score are bad; summary is declared first
        let value = json!({"summary": 7, "score": 0, "items": []});
        assert!(matches!(
            TEST_SCHEMA.validate(&value),
            Err(ValidationError::WrongType {
                field: "summary",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_sentinel_detection() {
        assert!(is_empty_sentinel(&json!({})));
        assert!(!is_empty_sentinel(&json!({"a": 1})));
        assert!(!is_empty_sentinel(&json!([])));
        assert!(!is_empty_sentinel(&json!(null)));
    }
}
