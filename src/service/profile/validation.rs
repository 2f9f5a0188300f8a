//! Validation of model-produced profile results

use serde_json::Value;

use crate::model::{ProfileScore, StructuredProfile};
use crate::service::schema::{
    is_empty_sentinel, FieldKind, FieldSpec, SchemaDescriptor, ValidationError,
};

/// Required-field contract for the top-level score object
pub const PROFILE_SCORE_SCHEMA: SchemaDescriptor = SchemaDescriptor {
    name: "profile_score",
    fields: &[
        FieldSpec {
            key: "score",
            kind: FieldKind::Integer { min: 0, max: 100 },
        },
        FieldSpec {
            key: "maxScore",
            kind: FieldKind::Integer { min: 1, max: 100 },
        },
        FieldSpec {
            key: "analysis",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "strengths",
            kind: FieldKind::Array,
        },
        FieldSpec {
            key: "weaknesses",
            kind: FieldKind::Array,
        },
        FieldSpec {
            key: "recommendations",
            kind: FieldKind::Array,
        },
        FieldSpec {
            key: "sections",
            kind: FieldKind::Object,
        },
    ],
};

/// Contract for each of the six per-section score objects
const SECTION_SCHEMA: SchemaDescriptor = SchemaDescriptor {
    name: "profile_section_score",
    fields: &[
        FieldSpec {
            key: "score",
            kind: FieldKind::Integer { min: 0, max: 100 },
        },
        FieldSpec {
            key: "maxScore",
            kind: FieldKind::Integer { min: 1, max: 100 },
        },
        FieldSpec {
            key: "feedback",
            kind: FieldKind::String,
        },
    ],
};

const SECTION_KEYS: [&str; 6] = [
    "summary",
    "experience",
    "projects",
    "skills",
    "education",
    "certifications",
];

/// Required-field contract for a structured profile
pub const STRUCTURED_PROFILE_SCHEMA: SchemaDescriptor = SchemaDescriptor {
    name: "structured_profile",
    fields: &[
        FieldSpec {
            key: "summary",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "skills",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "workExperience",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "projects",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "education",
            kind: FieldKind::String,
        },
        FieldSpec {
            key: "certifications",
            kind: FieldKind::String,
        },
    ],
};

/// Validate a parsed value as a profile score and type it.
///
/// Returns `Ok(None)` for the empty-object sentinel.
pub fn validate_profile_score(value: &Value) -> Result<Option<ProfileScore>, ValidationError> {
    if is_empty_sentinel(value) {
        return Ok(None);
    }

    PROFILE_SCORE_SCHEMA.validate(value)?;

    // Each named section must exist and satisfy the section contract
    let sections = &value["sections"];
    for key in SECTION_KEYS {
        let Some(section) = sections.get(key) else {
            return Err(ValidationError::Malformed {
                schema: PROFILE_SCORE_SCHEMA.name,
                message: format!("missing section '{}'", key),
            });
        };
        SECTION_SCHEMA.validate(section)?;
    }

    serde_json::from_value(value.clone())
        .map(Some)
        .map_err(|e| ValidationError::Malformed {
            schema: PROFILE_SCORE_SCHEMA.name,
            message: e.to_string(),
        })
}

/// Validate a parsed value as a structured profile and type it.
///
/// Returns `Ok(None)` for the empty-object sentinel.
pub fn validate_structured_profile(
    value: &Value,
) -> Result<Option<StructuredProfile>, ValidationError> {
    if is_empty_sentinel(value) {
        return Ok(None);
    }

    STRUCTURED_PROFILE_SCHEMA.validate(value)?;

    serde_json::from_value(value.clone())
        .map(Some)
        .map_err(|e| ValidationError::Malformed {
            schema: STRUCTURED_PROFILE_SCHEMA.name,
            message: e.to_string(),
        })
}
