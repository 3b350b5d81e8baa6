//! Test helpers: build AppState and router with stub analyzers.
//!
//! Run from workspace root: `cargo test -p facecheck-api`.

pub mod fixtures;

use async_trait::async_trait;
use axum_test::TestServer;
use facecheck_api::setup::routes;
use facecheck_api::state::AppState;
use facecheck_core::{Config, DeepfakeReport, FaceDetectionConfig, FaceLocation};
use facecheck_processing::{
    AnalysisError, DeepfakeAnalyzer, FaceDetector, PlaceholderSpoofDetector, UploadValidator,
};
use image::RgbImage;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

/// Face detector returning a fixed set of boxes for every image.
pub struct StubFaceDetector {
    pub faces: Vec<FaceLocation>,
}

impl FaceDetector for StubFaceDetector {
    fn detect(&self, _image: &RgbImage) -> Result<Vec<FaceLocation>, AnalysisError> {
        Ok(self.faces.clone())
    }
}

/// What the deepfake analyzer observed during one call.
#[derive(Debug, Clone)]
pub struct AnalyzerCall {
    pub path: PathBuf,
    pub existed: bool,
    pub contents: Vec<u8>,
    pub actions: Vec<String>,
}

pub enum StubOutcome {
    Report(serde_json::Value),
    Fail(u16, &'static str),
    Hang(Duration),
}

/// Deepfake analyzer that records each call and answers with a canned outcome.
pub struct RecordingDeepfakeAnalyzer {
    outcome: StubOutcome,
    calls: Mutex<Vec<AnalyzerCall>>,
}

impl RecordingDeepfakeAnalyzer {
    pub fn new(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<AnalyzerCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeepfakeAnalyzer for RecordingDeepfakeAnalyzer {
    async fn analyze(
        &self,
        path: &Path,
        actions: &[&str],
    ) -> Result<DeepfakeReport, AnalysisError> {
        self.calls.lock().unwrap().push(AnalyzerCall {
            path: path.to_path_buf(),
            existed: path.exists(),
            contents: std::fs::read(path).unwrap_or_default(),
            actions: actions.iter().map(|a| a.to_string()).collect(),
        });

        match &self.outcome {
            StubOutcome::Report(value) => Ok(DeepfakeReport(value.clone())),
            StubOutcome::Fail(status, body) => Err(AnalysisError::Remote {
                status: *status,
                body: body.to_string(),
            }),
            StubOutcome::Hang(duration) => {
                tokio::time::sleep(*duration).await;
                Ok(DeepfakeReport(serde_json::json!({})))
            }
        }
    }
}

pub fn sample_report() -> serde_json::Value {
    serde_json::json!([{ "deepfake": { "score": 0.07, "is_deepfake": false } }])
}

/// Test application: server plus the handles the tests inspect.
pub struct TestApp {
    pub server: TestServer,
    pub deepfake: Arc<RecordingDeepfakeAnalyzer>,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Files currently left in the spool directory.
    pub fn spooled_files(&self) -> usize {
        std::fs::read_dir(self.temp_dir.path())
            .expect("read temp dir")
            .count()
    }
}

pub struct TestAppOptions {
    pub face_detector: Arc<dyn FaceDetector>,
    pub deepfake_outcome: StubOutcome,
    pub max_upload_bytes: usize,
    pub analyzer_timeout_secs: u64,
}

impl Default for TestAppOptions {
    fn default() -> Self {
        Self {
            face_detector: Arc::new(StubFaceDetector {
                faces: vec![
                    FaceLocation::new(10, 90, 120, 20),
                    FaceLocation::new(30, 200, 110, 140),
                ],
            }),
            deepfake_outcome: StubOutcome::Report(sample_report()),
            max_upload_bytes: 16 * 1024 * 1024,
            analyzer_timeout_secs: 30,
        }
    }
}

pub fn test_config(temp_dir: &Path, options: &TestAppOptions) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        upload_folder: temp_dir.join("uploads-unused"),
        allowed_extensions: vec![
            "png".to_string(),
            "jpg".to_string(),
            "jpeg".to_string(),
            "gif".to_string(),
        ],
        max_upload_bytes: options.max_upload_bytes,
        temp_dir: Some(temp_dir.to_path_buf()),
        face_detection: FaceDetectionConfig {
            model_path: None,
            min_face_size: 20,
            score_threshold: 2.0,
        },
        deepfake_analyzer_url: None,
        analyzer_timeout_secs: options.analyzer_timeout_secs,
    }
}

pub fn setup_test_app_with(options: TestAppOptions) -> TestApp {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config = test_config(temp_dir.path(), &options);

    let deepfake = Arc::new(RecordingDeepfakeAnalyzer::new(options.deepfake_outcome));
    let state = Arc::new(AppState {
        validator: UploadValidator::new(config.allowed_extensions.clone()),
        face_detector: options.face_detector,
        spoof_detector: Arc::new(PlaceholderSpoofDetector),
        deepfake_analyzer: deepfake.clone(),
        temp_dir: temp_dir.path().to_path_buf(),
        config: Arc::new(config),
    });

    let server = TestServer::new(routes::setup_routes(state)).expect("create test server");

    TestApp {
        server,
        deepfake,
        temp_dir,
    }
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with(TestAppOptions::default())
}
