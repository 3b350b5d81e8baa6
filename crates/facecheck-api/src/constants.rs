//! Route paths and multipart field names

pub const DETECT_FACE_PATH: &str = "/detect_face";
pub const ANTI_SPOOFING_PATH: &str = "/anti_spoofing";
pub const DEEPFAKE_DETECTION_PATH: &str = "/deepfake_detection";
pub const HEALTH_PATH: &str = "/health";
pub const OPENAPI_JSON_PATH: &str = "/api/openapi.json";
pub const DOCS_PATH: &str = "/docs";

/// File field read by `/detect_face` and `/anti_spoofing`.
pub const IMAGE_FIELD: &str = "image";

/// File field read by `/deepfake_detection`.
pub const FILE_FIELD: &str = "file";

pub const REQUEST_ID_HEADER: &str = "x-request-id";
