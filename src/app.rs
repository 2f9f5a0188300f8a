//! Application state and service initialization
//!
//! This module centralizes all service initialization and dependency
//! injection, making it easier to manage the application lifecycle.

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::repository::FeedbackRepository;
use crate::model::Config;
use crate::service::{ChallengeService, InterviewService, LlmClient, ProfileService};

/// Application state containing all services and shared resources
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,
    /// Challenge generation service
    pub challenge_service: ChallengeService,
    /// Interview evaluation and completion service
    pub interview_service: InterviewService,
    /// Profile scoring and structuring service
    pub profile_service: ProfileService,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// This performs:
    /// 1. Database connection and schema initialization
    /// 2. LLM client initialization (requires OPENAI_API_KEY)
    /// 3. Service dependency graph construction
    pub async fn new(config: Config) -> Result<Self, AppError> {
        // Initialize PostgreSQL database
        let db_pool = crate::db::create_pool()
            .await
            .map_err(|e| AppError::DatabaseInit(e.to_string()))?;

        // Initialize database schema
        crate::db::init_schema(&db_pool)
            .await
            .map_err(|e| AppError::DatabaseInit(e.to_string()))?;

        // Create shared LLM client (required)
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| AppError::MissingConfig("OPENAI_API_KEY"))?;

        let llm_client = LlmClient::new(&api_key)
            .map_err(|_| AppError::InvalidConfig("Invalid OPENAI_API_KEY"))?;
        let generator: Arc<dyn crate::service::llm::TextGenerator> = Arc::new(llm_client);

        // Build service dependency graph
        let repository = FeedbackRepository::new(db_pool.clone());

        let challenge_service = ChallengeService::new(Arc::clone(&generator));
        let interview_service =
            InterviewService::new(Arc::clone(&generator), repository, config.limits);
        let profile_service = ProfileService::new(generator, config.limits);

        Ok(Self {
            db_pool,
            challenge_service,
            interview_service,
            profile_service,
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Database initialization failed
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),

    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
