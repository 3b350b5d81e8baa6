//! `/detect_face` and `/anti_spoofing` integration tests.
//!
//! Run with: `cargo test -p facecheck-api --test face_detection_test`

mod helpers;

use facecheck_core::FaceLocation;
use facecheck_processing::UnavailableFaceDetector;
use helpers::fixtures::{corrupt_bytes, create_jpeg, create_png, file_form};
use helpers::{setup_test_app, setup_test_app_with, StubFaceDetector, TestAppOptions};
use serde_json::{json, Value};
use std::sync::Arc;

#[tokio::test]
async fn test_detect_face_returns_boxes() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/detect_face")
        .multipart(file_form("image", "face.jpg", create_jpeg()))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.json::<Value>(),
        json!({"face_locations": [[10, 90, 120, 20], [30, 200, 110, 140]]})
    );
}

#[tokio::test]
async fn test_detect_face_no_faces() {
    let app = setup_test_app_with(TestAppOptions {
        face_detector: Arc::new(StubFaceDetector { faces: vec![] }),
        ..Default::default()
    });

    let response = app
        .client()
        .post("/detect_face")
        .multipart(file_form("image", "landscape.png", create_png()))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>(), json!({"face_locations": []}));
}

#[tokio::test]
async fn test_detect_face_is_deterministic() {
    let app = setup_test_app_with(TestAppOptions {
        face_detector: Arc::new(StubFaceDetector {
            faces: vec![FaceLocation::new(5, 25, 20, 3)],
        }),
        ..Default::default()
    });

    let first = app
        .client()
        .post("/detect_face")
        .multipart(file_form("image", "face.png", create_png()))
        .await
        .json::<Value>();
    let second = app
        .client()
        .post("/detect_face")
        .multipart(file_form("image", "face.png", create_png()))
        .await
        .json::<Value>();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_detect_face_corrupt_image() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/detect_face")
        .multipart(file_form("image", "x.jpg", corrupt_bytes()))
        .await;

    assert_eq!(response.status_code(), 500);
    let body = response.json::<Value>();
    let error = body["error"].as_str().unwrap_or_default();
    assert!(!error.is_empty());
    assert!(body.get("face_locations").is_none());
}

#[tokio::test]
async fn test_detect_face_without_model() {
    let app = setup_test_app_with(TestAppOptions {
        face_detector: Arc::new(UnavailableFaceDetector),
        ..Default::default()
    });

    let response = app
        .client()
        .post("/detect_face")
        .multipart(file_form("image", "face.png", create_png()))
        .await;

    assert_eq!(response.status_code(), 500);
    let error = response.json::<Value>()["error"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    assert!(error.contains("FACE_MODEL_PATH"), "{}", error);
}

#[tokio::test]
async fn test_anti_spoofing_placeholder() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/anti_spoofing")
        .multipart(file_form("image", "selfie.png", create_png()))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.json::<Value>(),
        json!({"result": "Spoofing detection logic is not implemented."})
    );
}

#[tokio::test]
async fn test_anti_spoofing_tolerates_undecodable_image() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/anti_spoofing")
        .multipart(file_form("image", "selfie.jpg", corrupt_bytes()))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.json::<Value>()["result"],
        "Spoofing detection logic is not implemented."
    );
}
