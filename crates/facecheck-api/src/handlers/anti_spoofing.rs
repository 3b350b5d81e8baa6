use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use facecheck_core::models::SpoofCheckResponse;
use facecheck_processing::decode_rgb;

use crate::constants::IMAGE_FIELD;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::{run_analyzer, run_blocking};
use crate::state::AppState;
use crate::utils::upload::extract_upload;

/// Check an image for presentation attacks
///
/// Decoding is best effort: an image that fails to decode is still answered,
/// the spoof detector just receives nothing to look at.
#[utoipa::path(
    post,
    path = "/anti_spoofing",
    tag = "analysis",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Image file in the `image` field"),
    responses(
        (status = 200, description = "Spoofing check result", body = SpoofCheckResponse),
        (status = 400, description = "Missing, unnamed or disallowed file", body = ErrorResponse),
        (status = 500, description = "Spoofing check failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "anti_spoofing"))]
pub async fn anti_spoofing(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SpoofCheckResponse>, HttpAppError> {
    let upload = extract_upload(multipart, IMAGE_FIELD).await?;
    state.validator.validate(&upload)?;

    let detector = state.spoof_detector.clone();
    let filename = upload.filename;
    let data = upload.data;
    let result = run_analyzer(
        &state,
        run_blocking(move || {
            let image = match decode_rgb(&data) {
                Ok(image) => Some(image),
                Err(e) => {
                    tracing::warn!(error = %e, filename = %filename, "Could not decode image for spoofing check");
                    None
                }
            };
            detector.check(image.as_ref())
        }),
    )
    .await?;

    Ok(Json(SpoofCheckResponse { result }))
}
