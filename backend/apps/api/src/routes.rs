//! Router assembly.
//!
//! - `GET /health` - Database round trip
//! - `/users/*` - Registration and login
//! - `/calculations/*` - Calculation CRUD
//! - `/static/*` - Register and login pages
//! - `GET /` - Redirect to the login page

use axum::extract::State;
use axum::http::{HeaderValue, Method, header};
use axum::response::Redirect;
use axum::routing::get;
use axum::{Json, Router};
use kernel::error::app_error::{AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use serde::Serialize;
use sqlx::PgPool;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health(State(pool): State<PgPool>) -> AppResult<Json<HealthResponse>> {
    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_app_err(ErrorKind::ServiceUnavailable, "Database unavailable")?;

    Ok(Json(HealthResponse { status: "ok" }))
}

/// Combine the feature routers with the ambient endpoints and middleware.
pub fn build_router(users: Router, calculations: Router, pool: PgPool, config: &ApiConfig) -> Router {
    let health = Router::new()
        .route("/health", get(health))
        .with_state(pool);

    Router::new()
        .merge(health)
        .route("/", get(|| async { Redirect::temporary("/static/login.html") }))
        .nest("/users", users)
        .nest("/calculations", calculations)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}
