//! Face-location detection

#[cfg(feature = "rustface")]
mod rustface_backend;

#[cfg(feature = "rustface")]
pub use rustface_backend::RustfaceDetector;

use crate::error::AnalysisError;
use facecheck_core::FaceLocation;
use image::RgbImage;

/// Pluggable face detection backend.
///
/// Implementations are called from the blocking thread pool, once per request,
/// and must not keep per-request state.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in an RGB image. Returns one box per face, possibly none.
    fn detect(&self, image: &RgbImage) -> Result<Vec<FaceLocation>, AnalysisError>;

    /// Whether the backend can serve requests (used by the health route).
    fn is_available(&self) -> bool {
        true
    }
}

/// Stand-in used when no detection model is configured.
#[derive(Debug, Default)]
pub struct UnavailableFaceDetector;

impl FaceDetector for UnavailableFaceDetector {
    fn detect(&self, _image: &RgbImage) -> Result<Vec<FaceLocation>, AnalysisError> {
        Err(AnalysisError::Unavailable("Face detector (FACE_MODEL_PATH)"))
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Convert an `x, y, width, height` box into a [`FaceLocation`] clipped to the image.
///
/// Detectors may report boxes that hang over the image edge; those are clipped.
/// Returns `None` when nothing of the box remains inside the image.
pub fn clip_to_image(
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    image_width: u32,
    image_height: u32,
) -> Option<FaceLocation> {
    let left = x.clamp(0, image_width as i64);
    let top = y.clamp(0, image_height as i64);
    let right = (x + width).clamp(0, image_width as i64);
    let bottom = (y + height).clamp(0, image_height as i64);

    if left >= right || top >= bottom {
        return None;
    }

    Some(FaceLocation::new(
        top as u32,
        right as u32,
        bottom as u32,
        left as u32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_inside_image() {
        let loc = clip_to_image(10, 20, 30, 40, 100, 100).unwrap();
        assert_eq!(loc, FaceLocation::new(20, 40, 60, 10));
    }

    #[test]
    fn test_clip_overhanging_box() {
        let loc = clip_to_image(-5, 90, 30, 40, 100, 100).unwrap();
        assert_eq!(loc, FaceLocation::new(90, 25, 100, 0));
        assert!(loc.left < loc.right && loc.top < loc.bottom);
    }

    #[test]
    fn test_clip_outside_image() {
        assert!(clip_to_image(120, 10, 30, 30, 100, 100).is_none());
        assert!(clip_to_image(10, 10, 0, 30, 100, 100).is_none());
    }

    #[test]
    fn test_unavailable_detector() {
        let detector = UnavailableFaceDetector;
        let img = RgbImage::new(2, 2);
        let err = detector.detect(&img).unwrap_err();
        assert!(err.to_string().contains("FACE_MODEL_PATH"));
        assert!(!detector.is_available());
    }
}
