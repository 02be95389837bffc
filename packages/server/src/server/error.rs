//! HTTP error type mapping to status codes and JSON envelopes.

use std::any::Any;

use axum::http::{header::ALLOW, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Transport-level failure. Resolver failures never end up here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A crash while executing the request.
    #[error("internal server error: {0}")]
    Internal(String),

    /// The GraphQL request could not be decoded.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The operation is not allowed over this HTTP method (mutations over GET).
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    /// No route for this path/method.
    #[error("no route for {method} {path}")]
    NotFound { method: String, path: String },
}

impl AppError {
    /// Build an internal error from a caught panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let details = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown error".to_string()
        };
        Self::Internal(details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Internal(details) => {
                tracing::error!(details = %details, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(error_envelope(
                        "Internal server error",
                        "INTERNAL_SERVER_ERROR",
                        &details,
                    )),
                )
                    .into_response()
            }
            AppError::BadRequest(details) => (
                StatusCode::BAD_REQUEST,
                Json(error_envelope("Bad request", "BAD_REQUEST", &details)),
            )
                .into_response(),
            AppError::MethodNotAllowed(details) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(ALLOW, HeaderValue::from_static("POST"))],
                Json(error_envelope(
                    "Method not allowed",
                    "METHOD_NOT_ALLOWED",
                    &details,
                )),
            )
                .into_response(),
            AppError::NotFound { method, path } => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Not Found",
                    "message": format!("No route for {} {}", method, path),
                })),
            )
                .into_response(),
        }
    }
}

/// `{errors: [{message, extensions: {code, details}}]}`
fn error_envelope(message: &str, code: &str, details: &str) -> serde_json::Value {
    json!({
        "errors": [{
            "message": message,
            "extensions": {
                "code": code,
                "details": details,
            }
        }]
    })
}

/// Response for a panic caught by the outer `CatchPanicLayer`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    AppError::from_panic(payload).into_response()
}
