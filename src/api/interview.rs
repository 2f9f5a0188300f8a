//! REST API endpoints for interview completion

use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::model::CodingResults;
use crate::service::InterviewService;

/// One message of a saved interview transcript
#[derive(Debug, Deserialize, ToSchema)]
pub struct SavedMessage {
    /// "user" or "assistant"
    pub role: String,
    pub content: String,
}

/// Request to complete a live interview and generate feedback
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteInterviewRequest {
    pub id: String,
    pub user_id: String,
    pub conversation: Vec<SavedMessage>,
}

/// Request to complete a coding interview from sandbox results
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteCodingRequest {
    pub interview_id: String,
    pub user_id: String,
    pub results: CodingResults,
}

/// Completion acknowledgement
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResponse {
    pub status: String,
    /// False when the transcript was too short to evaluate and a neutral
    /// default record was persisted instead
    pub feedback_generated: bool,
}

/// Flatten a transcript into the "User:/Assistant:" lines the evaluation
/// pipeline expects
fn flatten_conversation(messages: &[SavedMessage]) -> String {
    messages
        .iter()
        .map(|msg| {
            let speaker = if msg.role.eq_ignore_ascii_case("user") {
                "User"
            } else {
                "Assistant"
            };
            format!("{}: {}", speaker, msg.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Complete a live interview: evaluate the transcript, persist feedback, and
/// mark the interview completed
#[utoipa::path(
    post,
    path = "/v1/interviews/complete",
    request_body = CompleteInterviewRequest,
    responses(
        (status = 200, description = "Interview completed", body = CompletionResponse),
        (status = 400, description = "Missing or invalid request fields"),
        (status = 500, description = "Persistence failure")
    ),
    tag = "interviews"
)]
#[post("/v1/interviews/complete")]
pub async fn complete_interview(
    service: web::Data<InterviewService>,
    body: web::Json<CompleteInterviewRequest>,
) -> Result<impl Responder, ApiError> {
    let request = body.into_inner();

    if request.id.trim().is_empty() {
        return Err(ApiError::BadRequest("id is required".to_string()));
    }
    if request.user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("userId is required".to_string()));
    }

    let conversation = flatten_conversation(&request.conversation);

    let summary = service
        .complete_interview(&request.id, &request.user_id, &conversation)
        .await?;

    tracing::debug!(
        interview = %request.id,
        source = ?summary.source,
        "Returning completion response"
    );

    Ok(HttpResponse::Ok().json(CompletionResponse {
        status: "completed".to_string(),
        feedback_generated: summary.feedback_generated,
    }))
}

/// Complete a coding interview from aggregated sandbox results
#[utoipa::path(
    post,
    path = "/v1/interviews/complete-coding",
    request_body = CompleteCodingRequest,
    responses(
        (status = 200, description = "Coding interview completed", body = CompletionResponse),
        (status = 400, description = "Missing or invalid request fields"),
        (status = 500, description = "Persistence failure")
    ),
    tag = "interviews"
)]
#[post("/v1/interviews/complete-coding")]
pub async fn complete_coding_interview(
    service: web::Data<InterviewService>,
    body: web::Json<CompleteCodingRequest>,
) -> Result<impl Responder, ApiError> {
    let request = body.into_inner();

    if request.interview_id.trim().is_empty() {
        return Err(ApiError::BadRequest("interviewId is required".to_string()));
    }
    if request.user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("userId is required".to_string()));
    }

    service
        .complete_coding_interview(&request.interview_id, &request.user_id, &request.results)
        .await?;

    Ok(HttpResponse::Ok().json(CompletionResponse {
        status: "completed".to_string(),
        feedback_generated: true,
    }))
}

/// Configure interview routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(complete_interview)
        .service(complete_coding_interview);
}
