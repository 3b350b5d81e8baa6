//! Request and response models shared by the processing and API crates.

use bytes::Bytes;
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

/// One file part received in a single request.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl Upload {
    pub fn new(filename: impl Into<String>, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            data,
        }
    }

    /// Size of the file content in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Bounding box of a detected face, in pixels.
///
/// Serialized as the 4-element array `[top, right, bottom, left]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceLocation {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl FaceLocation {
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Serialize for FaceLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.top, self.right, self.bottom, self.left].serialize(serializer)
    }
}

/// Deepfake analyzer output, passed through untouched.
///
/// The external model's record layout is not stable across versions, so it is
/// kept opaque rather than mapped onto fixed fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DeepfakeReport(pub serde_json::Value);

/// Body of a successful `/detect_face` response
#[derive(Debug, Serialize, ToSchema)]
pub struct FaceDetectionResponse {
    /// One `[top, right, bottom, left]` box per detected face
    #[schema(value_type = Vec<Vec<u32>>, example = json!([[48, 212, 201, 59]]))]
    pub face_locations: Vec<FaceLocation>,
}

/// Body of a successful `/anti_spoofing` response
#[derive(Debug, Serialize, ToSchema)]
pub struct SpoofCheckResponse {
    #[schema(example = "Spoofing detection logic is not implemented.")]
    pub result: String,
}

/// Body of a successful `/deepfake_detection` response
#[derive(Debug, Serialize, ToSchema)]
pub struct DeepfakeResponse {
    #[schema(value_type = Object)]
    pub result: DeepfakeReport,
}
