//! Liveness probe

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::state::AppState;

fn readiness(available: bool) -> &'static str {
    if available {
        "ready"
    } else {
        "unconfigured"
    }
}

/// Process is up; also reports which analyzer backends are configured.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "alive",
            "face_detector": readiness(state.face_detector.is_available()),
            "deepfake_analyzer": readiness(state.deepfake_analyzer.is_available()),
        })),
    )
}
