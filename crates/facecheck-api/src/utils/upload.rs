//! Multipart extraction shared by the upload handlers

use axum::extract::{multipart::MultipartRejection, Multipart};
use facecheck_core::{AppError, Upload};

/// Pull the file part named `field_name` out of a multipart body.
///
/// The first part with that name and a `filename` parameter wins. A part with the
/// right name but no filename is a plain form field and is skipped, as is
/// everything after the match. A request that is not multipart at all, or has
/// no such part, is reported as [`AppError::MissingField`].
pub async fn extract_upload(
    multipart: Result<Multipart, MultipartRejection>,
    field_name: &str,
) -> Result<Upload, AppError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Request is not a multipart upload");
            return Err(AppError::MissingField);
        }
    };

    let mut upload: Option<Upload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MalformedUpload(e.body_text()))?
    {
        if upload.is_some() || field.name() != Some(field_name) {
            continue;
        }

        let Some(filename) = field.file_name().map(|s: &str| s.to_string()) else {
            continue;
        };
        let content_type = field.content_type().map(|s: &str| s.to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::MalformedUpload(e.body_text()))?;

        upload = Some(Upload::new(filename, content_type, data));
    }

    let upload = upload.ok_or(AppError::MissingField)?;

    tracing::debug!(
        field = field_name,
        filename = %upload.filename,
        content_type = ?upload.content_type,
        bytes = upload.size(),
        "Received upload"
    );

    Ok(upload)
}
