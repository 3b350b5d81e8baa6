use facecheck_core::{AppError, Upload};

pub(crate) const MAX_FILENAME_LENGTH: usize = 255;
const FALLBACK_FILENAME: &str = "upload";

/// Filename checks applied to every upload before any decoding happens
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty filename")]
    EmptyFilename,

    #[error("Extension of '{filename}' is not allowed (allowed: {allowed:?})")]
    DisallowedType {
        filename: String,
        allowed: Vec<String>,
    },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyFilename => AppError::EmptyFilename,
            ValidationError::DisallowedType { .. } => AppError::DisallowedType,
        }
    }
}

/// Upload validator
///
/// Holds the allow-list fixed at startup; shared read-only between requests.
#[derive(Debug, Clone)]
pub struct UploadValidator {
    allowed_extensions: Vec<String>,
}

impl UploadValidator {
    /// `allowed_extensions` are compared lower-cased.
    pub fn new(allowed_extensions: Vec<String>) -> Self {
        Self {
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|e| e.to_lowercase())
                .collect(),
        }
    }

    /// The name must contain a `.` and the text after the last one, lower-cased,
    /// must be in the allow-list. `photo.JPG` passes, `photo` and `.jpg.exe` do not.
    pub fn is_allowed(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => self.allowed_extensions.contains(&ext.to_lowercase()),
            None => false,
        }
    }

    pub fn validate_filename(&self, filename: &str) -> Result<(), ValidationError> {
        if filename.is_empty() {
            return Err(ValidationError::EmptyFilename);
        }

        if !self.is_allowed(filename) {
            return Err(ValidationError::DisallowedType {
                filename: filename.to_string(),
                allowed: self.allowed_extensions.clone(),
            });
        }

        Ok(())
    }

    pub fn validate(&self, upload: &Upload) -> Result<(), ValidationError> {
        self.validate_filename(&upload.filename)
    }
}

/// Reduce a client-supplied filename to something safe to embed in a local path.
///
/// Keeps only the final path component, turns whitespace runs into `_`, drops
/// everything outside `[A-Za-z0-9._-]` and trims leading/trailing `.` and `_`,
/// so `../../etc/passwd` becomes `passwd`.
pub fn sanitize_filename(filename: &str) -> String {
    sanitize_filename_with_limit(filename, MAX_FILENAME_LENGTH)
}

/// [`sanitize_filename`] with a caller-chosen length cap, for names that get
/// extra text added around them. Over-long names lose characters from the end
/// of the stem; the extension is kept.
pub fn sanitize_filename_with_limit(filename: &str, max_len: usize) -> String {
    let last_component = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);

    let joined = last_component.split_whitespace().collect::<Vec<_>>().join("_");

    let sanitized: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(*c, '.' | '-' | '_'))
        .collect();

    let trimmed = sanitized.trim_matches(|c: char| c == '.' || c == '_');
    if trimmed.is_empty() {
        return FALLBACK_FILENAME.to_string();
    }
    truncate_keeping_extension(trimmed, max_len)
}

// Input is ASCII-only at this point, so byte offsets are char boundaries.
fn truncate_keeping_extension(name: &str, max_len: usize) -> String {
    if name.len() <= max_len {
        return name.to_string();
    }

    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && ext.len() + 2 <= max_len => {
            let stem = &stem[..max_len - ext.len() - 1];
            format!("{}.{}", stem, ext)
        }
        _ => name[..max_len].to_string(),
    }
}
