//! Presentation-attack (anti-spoofing) checks

use crate::error::AnalysisError;
use image::RgbImage;

/// Answer returned until a real liveness model is wired in.
pub const SPOOF_PLACEHOLDER: &str = "Spoofing detection logic is not implemented.";

pub trait SpoofDetector: Send + Sync {
    /// `image` is `None` when the upload could not be decoded.
    fn check(&self, image: Option<&RgbImage>) -> Result<String, AnalysisError>;
}

/// Always answers [`SPOOF_PLACEHOLDER`], whatever the input.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderSpoofDetector;

impl SpoofDetector for PlaceholderSpoofDetector {
    fn check(&self, _image: Option<&RgbImage>) -> Result<String, AnalysisError> {
        Ok(SPOOF_PLACEHOLDER.to_string())
    }
}
