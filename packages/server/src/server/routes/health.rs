use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// Health check endpoint
///
/// Answers without touching the GraphQL engine or the provider.
pub async fn health_handler(State(state): State<AxumAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
    })
}
