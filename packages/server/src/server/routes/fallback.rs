use axum::http::{Method, Uri};

use crate::server::error::AppError;

/// Anything the router does not know, including unsupported methods on known paths.
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = %uri.path(), "No route");
    AppError::NotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
