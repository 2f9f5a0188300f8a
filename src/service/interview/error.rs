//! Error types for interview completion

use thiserror::Error;

use crate::db::DbError;

/// Error type for interview completion
///
/// Evaluation itself cannot fail (the fallback path is infallible); only the
/// persistence collaborator can.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("failed to persist interview feedback: {0}")]
    Database(#[from] DbError),
}
