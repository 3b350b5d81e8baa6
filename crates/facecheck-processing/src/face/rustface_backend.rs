use super::{clip_to_image, FaceDetector};
use crate::error::AnalysisError;
use facecheck_core::{FaceDetectionConfig, FaceLocation};
use image::RgbImage;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// The model is read once at startup; every request gets its own detector built
/// from a clone of it, since `rustface` detectors are stateful.
pub struct RustfaceDetector {
    model: rustface::Model,
    min_face_size: u32,
    score_threshold: f64,
}

impl RustfaceDetector {
    pub fn from_file(
        path: &Path,
        min_face_size: u32,
        score_threshold: f64,
    ) -> Result<Self, AnalysisError> {
        let file = File::open(path)?;
        let model = rustface::read_model(BufReader::new(file)).map_err(|e| {
            AnalysisError::Model(format!(
                "Failed to load face model {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!(
            model = %path.display(),
            min_face_size,
            score_threshold,
            "Loaded SeetaFace detection model"
        );

        Ok(Self {
            model,
            min_face_size,
            score_threshold,
        })
    }

    /// Build from configuration. `Ok(None)` when no model path is configured.
    pub fn from_config(config: &FaceDetectionConfig) -> Result<Option<Self>, AnalysisError> {
        match &config.model_path {
            Some(path) => Self::from_file(path, config.min_face_size, config.score_threshold)
                .map(Some),
            None => Ok(None),
        }
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, image: &RgbImage) -> Result<Vec<FaceLocation>, AnalysisError> {
        let (width, height) = image.dimensions();
        let gray = image::imageops::grayscale(image);

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(self.min_face_size);
        detector.set_score_thresh(self.score_threshold);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        let faces = detector.detect(&rustface::ImageData::new(gray.as_raw(), width, height));

        let locations: Vec<FaceLocation> = faces
            .iter()
            .filter_map(|face| {
                let bbox = face.bbox();
                clip_to_image(
                    bbox.x() as i64,
                    bbox.y() as i64,
                    bbox.width() as i64,
                    bbox.height() as i64,
                    width,
                    height,
                )
            })
            .collect();

        tracing::debug!(
            width,
            height,
            raw_faces = faces.len(),
            faces = locations.len(),
            "Face detection finished"
        );

        Ok(locations)
    }
}
