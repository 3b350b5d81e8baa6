use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use facecheck_core::models::DeepfakeResponse;
use facecheck_processing::{AnalysisError, TempUpload, DEEPFAKE_ACTION};

use crate::constants::FILE_FIELD;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::run_analyzer;
use crate::state::AppState;
use crate::utils::upload::extract_upload;

/// Run deepfake analysis
///
/// The upload (field `file`) is spooled to a uniquely named temporary file for
/// the analyzer, which is asked for the `deepfake` action only. The analyzer's
/// record is returned untouched under `result`. The temporary file is removed
/// before the response is sent, whether the analysis succeeded or not.
#[utoipa::path(
    post,
    path = "/deepfake_detection",
    tag = "analysis",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Image file in the `file` field"),
    responses(
        (status = 200, description = "Deepfake analysis record", body = DeepfakeResponse),
        (status = 400, description = "Missing, unnamed or disallowed file", body = ErrorResponse),
        (status = 500, description = "Analysis failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "deepfake_detection"))]
pub async fn deepfake_detection(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DeepfakeResponse>, HttpAppError> {
    let upload = extract_upload(multipart, FILE_FIELD).await?;
    state.validator.validate(&upload)?;

    // File creation and the write are blocking IO
    let temp = {
        let dir = state.temp_dir.clone();
        let filename = upload.filename.clone();
        let data = upload.data.clone();
        tokio::task::spawn_blocking(move || TempUpload::create(&dir, &filename, &data))
            .await
            .map_err(|e| AnalysisError::Model(format!("Spool task failed: {}", e)))??
    };

    let outcome = run_analyzer(
        &state,
        state
            .deepfake_analyzer
            .analyze(temp.path(), &[DEEPFAKE_ACTION]),
    )
    .await;

    let path = temp.path().to_path_buf();
    if let Err(e) = temp.close() {
        tracing::warn!(error = %e, path = %path.display(), "Failed to remove temporary upload");
    }

    let report = outcome?;
    tracing::info!(filename = %upload.filename, "Deepfake analysis completed");

    Ok(Json(DeepfakeResponse { result: report }))
}
