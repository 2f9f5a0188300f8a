//! REST API endpoints for profile scoring and structuring

use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::model::{ProfileData, ProfileScore, StructuredProfile};
use crate::service::{ProfileService, ResultSource};

const STRUCTURE_FALLBACK_WARNING: &str = "AI service unavailable. Basic text extraction used \
    as fallback. Please review the extracted sections and edit manually where needed.";

/// Request to score a structured profile
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreProfileRequest {
    pub profile_data: Option<ProfileData>,
}

/// Profile score response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreProfileResponse {
    pub score_result: ProfileScore,
}

/// Request to structure raw profile text
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StructureProfileRequest {
    pub raw_profile_text: Option<String>,
}

/// Structured profile response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StructureProfileResponse {
    pub structured_profile: StructuredProfile,
    /// Present when the degraded extraction path produced the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Score a candidate profile against the six-section rubric
#[utoipa::path(
    post,
    path = "/v1/profile/score",
    request_body = ScoreProfileRequest,
    responses(
        (status = 200, description = "Profile scored", body = ScoreProfileResponse),
        (status = 400, description = "Profile data missing or empty")
    ),
    tag = "profile"
)]
#[post("/v1/profile/score")]
pub async fn score_profile(
    service: web::Data<ProfileService>,
    body: web::Json<ScoreProfileRequest>,
) -> Result<impl Responder, ApiError> {
    let Some(profile_data) = body.into_inner().profile_data else {
        return Err(ApiError::BadRequest("Profile data is required".to_string()));
    };

    if profile_data.is_empty() {
        return Err(ApiError::BadRequest(
            "Profile data must contain at least one section".to_string(),
        ));
    }

    let scored = service.score(&profile_data).await;

    tracing::debug!(source = ?scored.source, "Returning profile score");

    Ok(HttpResponse::Ok().json(ScoreProfileResponse {
        score_result: scored.score,
    }))
}

/// Parse raw profile text into structured sections
#[utoipa::path(
    post,
    path = "/v1/profile/structure",
    request_body = StructureProfileRequest,
    responses(
        (status = 200, description = "Profile structured", body = StructureProfileResponse),
        (status = 400, description = "Raw profile text missing")
    ),
    tag = "profile"
)]
#[post("/v1/profile/structure")]
pub async fn structure_profile(
    service: web::Data<ProfileService>,
    body: web::Json<StructureProfileRequest>,
) -> Result<impl Responder, ApiError> {
    let raw_text = body.into_inner().raw_profile_text.unwrap_or_default();

    if raw_text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Raw profile text is required".to_string(),
        ));
    }

    let result = service.structure(&raw_text).await;

    let warning = match result.source {
        ResultSource::Ai => None,
        ResultSource::Fallback => Some(STRUCTURE_FALLBACK_WARNING.to_string()),
    };

    Ok(HttpResponse::Ok().json(StructureProfileResponse {
        structured_profile: result.profile,
        warning,
    }))
}

/// Configure profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(score_profile).service(structure_profile);
}
