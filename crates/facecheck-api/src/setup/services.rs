//! Analyzer backend construction

use anyhow::{Context, Result};
use facecheck_core::Config;
use facecheck_processing::{
    DeepfakeAnalyzer, FaceDetector, PlaceholderSpoofDetector, UnavailableFaceDetector,
    UnconfiguredDeepfakeAnalyzer, UploadValidator,
};
use std::path::Path;
use std::sync::Arc;

use crate::state::AppState;

/// Build the shared state from configuration, loading the face model and
/// wiring the deepfake analyzer client.
pub fn initialize_services(config: Config) -> Result<Arc<AppState>> {
    let face_detector = setup_face_detector(&config)?;
    let deepfake_analyzer = setup_deepfake_analyzer(&config)?;

    let temp_dir = config
        .temp_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&temp_dir)
        .with_context(|| format!("Failed to create temp directory {}", temp_dir.display()))?;

    Ok(Arc::new(AppState {
        validator: UploadValidator::new(config.allowed_extensions.clone()),
        face_detector,
        spoof_detector: Arc::new(PlaceholderSpoofDetector),
        deepfake_analyzer,
        temp_dir,
        config: Arc::new(config),
    }))
}

#[cfg(feature = "rustface")]
fn setup_face_detector(config: &Config) -> Result<Arc<dyn FaceDetector>> {
    use facecheck_processing::RustfaceDetector;

    match RustfaceDetector::from_config(&config.face_detection)
        .context("Failed to load face detection model")?
    {
        Some(detector) => Ok(Arc::new(detector)),
        None => {
            tracing::warn!("FACE_MODEL_PATH not set - /detect_face will return errors");
            Ok(Arc::new(UnavailableFaceDetector))
        }
    }
}

#[cfg(not(feature = "rustface"))]
fn setup_face_detector(config: &Config) -> Result<Arc<dyn FaceDetector>> {
    if config.face_detection.model_path.is_some() {
        tracing::warn!("FACE_MODEL_PATH set but the rustface feature is disabled");
    }
    Ok(Arc::new(UnavailableFaceDetector))
}

#[cfg(feature = "remote-deepfake")]
fn setup_deepfake_analyzer(config: &Config) -> Result<Arc<dyn DeepfakeAnalyzer>> {
    use facecheck_processing::RemoteDeepfakeAnalyzer;

    match &config.deepfake_analyzer_url {
        Some(url) => {
            let analyzer = RemoteDeepfakeAnalyzer::new(url.clone())
                .context("Failed to create deepfake analyzer client")?;
            tracing::info!(endpoint = %url, "Deepfake analyzer configured");
            Ok(Arc::new(analyzer))
        }
        None => {
            tracing::warn!(
                "DEEPFAKE_ANALYZER_URL not set - /deepfake_detection will return errors"
            );
            Ok(Arc::new(UnconfiguredDeepfakeAnalyzer))
        }
    }
}

#[cfg(not(feature = "remote-deepfake"))]
fn setup_deepfake_analyzer(config: &Config) -> Result<Arc<dyn DeepfakeAnalyzer>> {
    if config.deepfake_analyzer_url.is_some() {
        tracing::warn!("DEEPFAKE_ANALYZER_URL set but the remote-deepfake feature is disabled");
    }
    Ok(Arc::new(UnconfiguredDeepfakeAnalyzer))
}

/// Create the upload folder if it does not exist yet.
pub fn ensure_upload_folder(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create upload folder {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Upload folder ready");
    Ok(())
}
