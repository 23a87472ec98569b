use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let resources = state.resources.mounted_count();

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "store": state.store_backend,
            "session": if state.session.is_loading() { "restoring" } else { "operational" },
            "resources": resources,
            "refresh_tick": state.bus.current(),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Ready once the persisted session has been restored
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.session.is_loading() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Restoring session").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}
