//! Per-step failure types. Each maps into `AppError` at the handler boundary;
//! decoding and analysis failures both surface as a 500 carrying their message.

use facecheck_core::AppError;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to decode image: image has zero width or height")]
    ZeroDimensions,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("{0} is not configured")]
    Unavailable(&'static str),

    #[error("{0}")]
    Model(String),

    #[error("Analysis timed out after {0}s")]
    Timeout(u64),

    #[error("Analyzer returned {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Analyzer request failed: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, thiserror::Error)]
pub enum TempUploadError {
    // io::Error displays carry the spool path; only the kind reaches clients
    #[error("Failed to create temporary file: {}", .0.kind())]
    Create(#[source] io::Error),

    #[error("Failed to write temporary file: {}", .0.kind())]
    Write(#[source] io::Error),
}

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        AppError::Analysis(err.to_string())
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        AppError::Analysis(err.to_string())
    }
}

impl From<TempUploadError> for AppError {
    fn from(err: TempUploadError) -> Self {
        AppError::Analysis(err.to_string())
    }
}
