//! Shared application state.

use facecheck_core::Config;
use facecheck_processing::{DeepfakeAnalyzer, FaceDetector, SpoofDetector, UploadValidator};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Read-only state shared by every request: configuration plus the analyzer
/// handles built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub validator: UploadValidator,
    pub face_detector: Arc<dyn FaceDetector>,
    pub spoof_detector: Arc<dyn SpoofDetector>,
    pub deepfake_analyzer: Arc<dyn DeepfakeAnalyzer>,
    /// Directory the deepfake route spools uploads into
    pub temp_dir: PathBuf,
}

impl AppState {
    /// Bound applied to each analyzer call; `None` when disabled.
    pub fn analyzer_timeout(&self) -> Option<Duration> {
        match self.config.analyzer_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
