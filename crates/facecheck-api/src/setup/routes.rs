//! Route configuration

use crate::constants::{
    ANTI_SPOOFING_PATH, DEEPFAKE_DETECTION_PATH, DETECT_FACE_PATH, DOCS_PATH, HEALTH_PATH,
    OPENAPI_JSON_PATH,
};
use crate::handlers::{anti_spoofing, deepfake, face_detection, fallback, health};
use crate::middleware::request_id_middleware;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router over an already initialized state.
pub fn setup_routes(state: Arc<AppState>) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;
    tracing::debug!(max_upload_bytes, "Upload body limit");

    Router::new()
        .route(DETECT_FACE_PATH, post(face_detection::detect_face))
        .route(ANTI_SPOOFING_PATH, post(anti_spoofing::anti_spoofing))
        .route(DEEPFAKE_DETECTION_PATH, post(deepfake::deepfake_detection))
        .route(HEALTH_PATH, get(health::health_check))
        .route(
            OPENAPI_JSON_PATH,
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .merge(utoipa_rapidoc::RapiDoc::new(OPENAPI_JSON_PATH).path(DOCS_PATH))
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state)
}
