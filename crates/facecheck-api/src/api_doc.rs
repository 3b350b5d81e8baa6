//! OpenAPI documentation, served at `/api/openapi.json` and rendered at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use facecheck_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Facecheck API",
        version = "0.1.0",
        description = "Image analysis over multipart uploads: face-location detection, anti-spoofing and deepfake analysis. Errors are always returned as {\"error\": message}."
    ),
    paths(
        handlers::face_detection::detect_face,
        handlers::anti_spoofing::anti_spoofing,
        handlers::deepfake::deepfake_detection,
    ),
    components(
        schemas(
            models::FaceDetectionResponse,
            models::SpoofCheckResponse,
            models::DeepfakeResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "analysis", description = "Image analysis operations")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
