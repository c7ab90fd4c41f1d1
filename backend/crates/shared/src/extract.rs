//! Request extractors
//!
//! Thin wrappers over axum's `Json`, `Query` and `Path` whose rejections
//! are reported as [`AppError`] problem details instead of plain text.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::app_error::AppError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        a: f64,
    }

    async fn handler(AppPath(id): AppPath<i64>, AppJson(_): AppJson<Payload>) -> String {
        id.to_string()
    }

    fn app() -> Router {
        Router::new().route("/items/{id}", post(handler))
    }

    async fn problem(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_bad_path_is_problem_details() {
        let request = Request::builder()
            .method("POST")
            .uri("/items/abc")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"a": 1}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(problem(response).await["status"], 400);
    }

    #[tokio::test]
    async fn test_wrong_shape_is_unprocessable() {
        let request = Request::builder()
            .method("POST")
            .uri("/items/1")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"a": "four"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(problem(response).await["title"], "Unprocessable Entity");
    }

    #[tokio::test]
    async fn test_valid_request_passes_through() {
        let request = Request::builder()
            .method("POST")
            .uri("/items/7")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"a": 1}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
