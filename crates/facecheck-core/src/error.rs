//! Error types module
//!
//! Every failure a route can report is an `AppError`. Client errors carry a fixed
//! message per kind; server errors carry the message of the step that failed.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "MISSING_FIELD")
    fn error_code(&self) -> &'static str;

    /// Client-facing message, rendered as the `error` field of the response body
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file part")]
    MissingField,

    #[error("No selected file")]
    EmptyFilename,

    #[error("File type not allowed")]
    DisallowedType,

    #[error("Failed to read upload: {0}")]
    MalformedUpload(String),

    /// Decoding or analyzer failure. The message is returned to the client as-is.
    #[error("{0}")]
    Analysis(String),
}

/// Static metadata for each variant: (http_status, error_code, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::MissingField => (400, "MISSING_FIELD", LogLevel::Debug),
        AppError::EmptyFilename => (400, "EMPTY_FILENAME", LogLevel::Debug),
        AppError::DisallowedType => (400, "DISALLOWED_TYPE", LogLevel::Debug),
        AppError::MalformedUpload(_) => (400, "MALFORMED_UPLOAD", LogLevel::Debug),
        AppError::Analysis(_) => (500, "ANALYSIS_ERROR", LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for log fields
    pub fn error_type(&self) -> &str {
        match self {
            AppError::MissingField => "MissingField",
            AppError::EmptyFilename => "EmptyFilename",
            AppError::DisallowedType => "DisallowedType",
            AppError::MalformedUpload(_) => "MalformedUpload",
            AppError::Analysis(_) => "AnalysisError",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}
