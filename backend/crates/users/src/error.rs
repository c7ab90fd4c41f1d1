//! User Error Types
//!
//! User-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// User-specific result type alias
pub type UserResult<T> = Result<T, UserError>;

/// User-specific error variants
#[derive(Debug, Error)]
pub enum UserError {
    /// Registration with an email that is already stored
    #[error("Email already registered")]
    EmailTaken,

    /// Registration with a user name that is already stored
    #[error("Username already taken")]
    UsernameTaken,

    /// Unknown user name or wrong password; deliberately indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Malformed registration input
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    /// Get the ErrorKind for this error
    ///
    /// Registration conflicts are reported as 400 on the wire.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::EmailTaken | UserError::UsernameTaken | UserError::Validation(_) => {
                ErrorKind::BadRequest
            }
            UserError::InvalidCredentials => ErrorKind::Unauthorized,
            UserError::Database(_) | UserError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UserError::Database(e) => {
                tracing::error!(error = %e, "User database error");
            }
            UserError::Internal(msg) => {
                tracing::error!(message = %msg, "User internal error");
            }
            UserError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "User error");
            }
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            // Keeps pool/connection failures distinguishable (503 vs 500)
            UserError::Database(e) => AppError::from(e),
            UserError::Internal(_) => AppError::internal("Internal error").with_source(err),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
