//! Upload validation and image analysis backends

pub mod decode;
pub mod deepfake;
pub mod error;
pub mod face;
pub mod spoofing;
pub mod temp_upload;
pub mod validator;

pub use decode::decode_rgb;
pub use deepfake::{DeepfakeAnalyzer, UnconfiguredDeepfakeAnalyzer, DEEPFAKE_ACTION};
#[cfg(feature = "remote-deepfake")]
pub use deepfake::RemoteDeepfakeAnalyzer;
pub use error::{AnalysisError, DecodeError, TempUploadError};
pub use face::{FaceDetector, UnavailableFaceDetector};
#[cfg(feature = "rustface")]
pub use face::RustfaceDetector;
pub use spoofing::{PlaceholderSpoofDetector, SpoofDetector, SPOOF_PLACEHOLDER};
pub use temp_upload::TempUpload;
pub use validator::{sanitize_filename, UploadValidator, ValidationError};
