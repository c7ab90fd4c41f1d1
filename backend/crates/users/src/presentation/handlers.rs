//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::AppJson;
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserStore;
use crate::error::UserResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

/// Shared state for user handlers
#[derive(Clone)]
pub struct UsersAppState<S>
where
    S: UserStore,
{
    pub store: Arc<S>,
    pub config: Arc<UsersConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /users/register
pub async fn register<S>(
    State(state): State<UsersAppState<S>>,
    AppJson(req): AppJson<RegisterRequest>,
) -> UserResult<(StatusCode, Json<UserResponse>)>
where
    S: UserStore,
{
    let use_case = RegisterUseCase::new(state.store.clone(), state.config.clone());

    let user = use_case
        .execute(RegisterInput {
            user_name: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

// ============================================================================
// Login
// ============================================================================

/// POST /users/login
pub async fn login<S>(
    State(state): State<UsersAppState<S>>,
    AppJson(req): AppJson<LoginRequest>,
) -> UserResult<Json<LoginResponse>>
where
    S: UserStore,
{
    let use_case = LoginUseCase::new(state.store.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user_id: output.user_id,
    }))
}
