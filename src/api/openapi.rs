//! OpenAPI specification endpoints

use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

/// OpenAPI documentation for the service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "NeuroSync Interview Agents",
        description = "AI generation and evaluation service for the NeuroSync interview platform"
    ),
    paths(
        crate::api::challenges::generate_challenges,
        crate::api::interview::complete_interview,
        crate::api::interview::complete_coding_interview,
        crate::api::profile::score_profile,
        crate::api::profile::structure_profile,
        crate::api::health::liveness,
        crate::api::health::readiness,
    ),
    components(schemas(
        crate::model::ChallengeRequest,
        crate::model::CodingChallenge,
        crate::model::Difficulty,
        crate::model::TestCase,
        crate::model::CodingResults,
        crate::model::ProfileData,
        crate::model::ProfileScore,
        crate::model::ProfileSections,
        crate::model::SectionScore,
        crate::model::StructuredProfile,
        crate::api::interview::SavedMessage,
        crate::api::interview::CompleteInterviewRequest,
        crate::api::interview::CompleteCodingRequest,
        crate::api::interview::CompletionResponse,
        crate::api::profile::ScoreProfileRequest,
        crate::api::profile::ScoreProfileResponse,
        crate::api::profile::StructureProfileRequest,
        crate::api::profile::StructureProfileResponse,
        crate::api::health::HealthStatus,
        crate::api::health::ReadinessStatus,
        crate::api::health::DependencyHealth,
    )),
    tags(
        (name = "challenges", description = "Coding challenge generation"),
        (name = "interviews", description = "Interview completion and feedback"),
        (name = "profile", description = "Profile scoring and structuring"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok().content_type("text/yaml").body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI YAML");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
