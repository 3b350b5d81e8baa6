//! Facecheck Core Library
//!
//! Configuration, error types and response models shared by every facecheck crate.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{Config, FaceDetectionConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{DeepfakeReport, FaceLocation, Upload};
