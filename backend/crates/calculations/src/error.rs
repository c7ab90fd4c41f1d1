//! Calculation Error Types
//!
//! Calculation-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::services::EvaluationError;

/// Calculation-specific result type alias
pub type CalculationResult<T> = Result<T, CalculationError>;

/// Calculation-specific error variants
#[derive(Debug, Error)]
pub enum CalculationError {
    /// Operation tag or operands rejected by the evaluator
    #[error(transparent)]
    Validation(#[from] EvaluationError),

    #[error("Calculation not found")]
    CalculationNotFound,

    /// A referenced owner does not exist
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CalculationError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculationError::Validation(_) => ErrorKind::BadRequest,
            CalculationError::CalculationNotFound | CalculationError::UserNotFound => {
                ErrorKind::NotFound
            }
            CalculationError::Database(_) | CalculationError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CalculationError::Database(e) => {
                tracing::error!(error = %e, "Calculation database error");
            }
            CalculationError::Internal(msg) => {
                tracing::error!(message = %msg, "Calculation internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Calculation error");
            }
        }
    }
}

impl From<CalculationError> for AppError {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::Database(e) => AppError::from(e),
            CalculationError::Internal(_) => {
                AppError::internal("Internal error").with_source(err)
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for CalculationError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
