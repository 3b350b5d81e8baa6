use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use facecheck_core::models::FaceDetectionResponse;
use facecheck_processing::decode_rgb;

use crate::constants::IMAGE_FIELD;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::{run_analyzer, run_blocking};
use crate::state::AppState;
use crate::utils::upload::extract_upload;

/// Detect face locations
///
/// Reads the `image` file part, decodes it to RGB and returns one
/// `[top, right, bottom, left]` box per detected face. An image without faces
/// yields an empty list.
///
/// # Errors
/// - `AppError::MissingField` / `EmptyFilename` / `DisallowedType` - 400
/// - `AppError::Analysis` - undecodable image or detector failure, 500
#[utoipa::path(
    post,
    path = "/detect_face",
    tag = "analysis",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Image file in the `image` field"),
    responses(
        (status = 200, description = "Faces detected", body = FaceDetectionResponse),
        (status = 400, description = "Missing, unnamed or disallowed file", body = ErrorResponse),
        (status = 500, description = "Decoding or detection failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "detect_face"))]
pub async fn detect_face(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<FaceDetectionResponse>, HttpAppError> {
    let upload = extract_upload(multipart, IMAGE_FIELD).await?;
    state.validator.validate(&upload)?;

    let detector = state.face_detector.clone();
    let data = upload.data;
    let face_locations = run_analyzer(
        &state,
        run_blocking(move || {
            let image = decode_rgb(&data)?;
            detector.detect(&image)
        }),
    )
    .await?;

    tracing::info!(faces = face_locations.len(), "Face detection completed");

    Ok(Json(FaceDetectionResponse { face_locations }))
}
