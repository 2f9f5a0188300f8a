//! Repository for interview feedback database operations

use sqlx::PgPool;

use super::DbError;
use crate::model::FeedbackRecord;

/// Repository for feedback records and interview completion flags
#[derive(Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert or update the feedback record for an interview
    pub async fn insert_feedback(&self, record: &FeedbackRecord) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO interview_feedback (
                interview_id, user_id, feed_back,
                problem_solving, system_design, communication_skills,
                technical_accuracy, behavioral_responses, time_management
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (interview_id) DO UPDATE SET
                user_id = EXCLUDED.user_id,
                feed_back = EXCLUDED.feed_back,
                problem_solving = EXCLUDED.problem_solving,
                system_design = EXCLUDED.system_design,
                communication_skills = EXCLUDED.communication_skills,
                technical_accuracy = EXCLUDED.technical_accuracy,
                behavioral_responses = EXCLUDED.behavioral_responses,
                time_management = EXCLUDED.time_management
            "#,
        )
        .bind(&record.interview_id)
        .bind(&record.user_id)
        .bind(&record.feed_back)
        .bind(record.problem_solving)
        .bind(record.system_design)
        .bind(record.communication_skills)
        .bind(record.technical_accuracy)
        .bind(record.behavioral_responses)
        .bind(record.time_management)
        .execute(&self.pool)
        .await?;

        tracing::debug!(interview = %record.interview_id, "Upserted interview feedback");
        Ok(())
    }

    /// Mark an interview as completed, creating the row if the platform has
    /// not registered it yet
    pub async fn mark_interview_completed(&self, interview_id: &str) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO interviews (id, user_id, is_completed, completed_at)
            SELECT $1, user_id, TRUE, NOW() FROM interview_feedback WHERE interview_id = $1
            ON CONFLICT (id) DO UPDATE SET
                is_completed = TRUE,
                completed_at = NOW()
            "#,
        )
        .bind(interview_id)
        .execute(&self.pool)
        .await?;

        tracing::debug!(interview = %interview_id, "Marked interview completed");
        Ok(())
    }
}
