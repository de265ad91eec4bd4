use crate::api::AppState;
use crate::api::schemas::health::HealthResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Liveness probe: returns 200 OK as long as the server is running.
pub async fn live() -> impl IntoResponse {
    Json(json!({ "status": "live" }))
}

/// Readiness probe: checks that the webhook secret is provisioned and the
/// database answers `SELECT 1`.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let mut status_code = StatusCode::OK;

    let secret_status = if let Err(e) = state.health_service.check_secret() {
        tracing::warn!(error = %e, component = "secret", "Readiness probe failed");
        status_code = StatusCode::SERVICE_UNAVAILABLE;
        "error"
    } else {
        "ok"
    };

    let db_status = if let Err(e) = state.health_service.check_db().await {
        tracing::warn!(error = %e, component = "database", "Readiness probe failed");
        status_code = StatusCode::SERVICE_UNAVAILABLE;
        "error"
    } else {
        "ok"
    };

    let response = HealthResponse {
        status: if status_code == StatusCode::OK { "ready" } else { "error" }.to_string(),
        database: db_status.to_string(),
        secret: secret_status.to_string(),
    };

    (status_code, Json(response))
}
