//! Validation of model-produced challenge lists

use serde_json::Value;

use crate::model::CodingChallenge;
use crate::service::schema::{FieldKind, FieldSpec, SchemaDescriptor, ValidationError};

/// Required-field contract for one challenge object
pub const CHALLENGE_SCHEMA: SchemaDescriptor = SchemaDescriptor {
    name: "coding_challenge",
    fields: &[
        FieldSpec {
            key: "id",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "title",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "description",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "difficulty",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "inputFormat",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "outputFormat",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "constraints",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "sampleTestCases",
            kind: FieldKind::Array,
        },
        FieldSpec {
            key: "hiddenTestCases",
            kind: FieldKind::Array,
        },
    ],
};

/// Validate a parsed value as a non-empty challenge list and type it.
///
/// Each element must satisfy [`CHALLENGE_SCHEMA`]; the typed conversion then
/// catches anything the descriptor cannot express (an unrecognized difficulty
/// string, malformed test-case objects).
pub fn validate_challenge_list(value: &Value) -> Result<Vec<CodingChallenge>, ValidationError> {
    let Value::Array(items) = value else {
        return Err(ValidationError::NotAnArray {
            schema: CHALLENGE_SCHEMA.name,
        });
    };

    if items.is_empty() {
        return Err(ValidationError::Malformed {
            schema: CHALLENGE_SCHEMA.name,
            message: "challenge list is empty".to_string(),
        });
    }

    for item in items {
        CHALLENGE_SCHEMA.validate(item)?;
    }

    serde_json::from_value(value.clone()).map_err(|e| ValidationError::Malformed {
        schema: CHALLENGE_SCHEMA.name,
        message: e.to_string(),
    })
}
