//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`; anything convertible into `AppError`
//! becomes a JSON body of the form `{"error": message}` with the matching status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use facecheck_core::{AppError, ErrorMetadata, LogLevel};
use facecheck_processing::{AnalysisError, DecodeError, TempUploadError, ValidationError};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "File type not allowed")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rules: both the trait and AppError are foreign to this crate)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<ValidationError> for HttpAppError {
    fn from(err: ValidationError) -> Self {
        HttpAppError(err.into())
    }
}

impl From<DecodeError> for HttpAppError {
    fn from(err: DecodeError) -> Self {
        HttpAppError(err.into())
    }
}

impl From<AnalysisError> for HttpAppError {
    fn from(err: AnalysisError) -> Self {
        HttpAppError(err.into())
    }
}

impl From<TempUploadError> for HttpAppError {
    fn from(err: TempUploadError) -> Self {
        HttpAppError(err.into())
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, error_code, "Request rejected");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, error_code, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        (status, Json(ErrorResponse::new(app_error.client_message()))).into_response()
    }
}
