//! REST API endpoint for coding challenge generation

use actix_web::{post, web, HttpResponse, Responder};

use crate::api::error::ApiError;
use crate::model::ChallengeRequest;
use crate::service::ChallengeService;

/// Largest challenge set a single request may ask for
const MAX_QUESTIONS: u32 = 20;

/// Generate a set of coding interview challenges
///
/// Returns a JSON array of challenge objects. The response is always a full,
/// schema-valid set; degraded AI conditions are covered by the canned
/// catalog.
#[utoipa::path(
    post,
    path = "/v1/challenges/generate",
    request_body = ChallengeRequest,
    responses(
        (status = 200, description = "Challenge set generated", body = [crate::model::CodingChallenge]),
        (status = 400, description = "Missing or invalid request fields")
    ),
    tag = "challenges"
)]
#[post("/v1/challenges/generate")]
pub async fn generate_challenges(
    service: web::Data<ChallengeService>,
    body: web::Json<ChallengeRequest>,
) -> Result<impl Responder, ApiError> {
    let request = body.into_inner();

    if request.role.trim().is_empty() {
        return Err(ApiError::BadRequest("role is required".to_string()));
    }
    if request.experience_level.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "experienceLevel is required".to_string(),
        ));
    }
    if request.number_of_questions == 0 {
        return Err(ApiError::BadRequest(
            "numberOfQuestions must be at least 1".to_string(),
        ));
    }
    if request.number_of_questions > MAX_QUESTIONS {
        return Err(ApiError::BadRequest(format!(
            "numberOfQuestions must be at most {}",
            MAX_QUESTIONS
        )));
    }

    let generated = service.generate(&request).await;

    tracing::debug!(
        source = ?generated.source,
        count = generated.challenges.len(),
        "Returning challenge set"
    );

    Ok(HttpResponse::Ok().json(generated.challenges))
}

/// Configure challenge routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_challenges);
}
