//! Configuration module
//!
//! Process-wide settings read once from the environment at startup and shared
//! read-only with every handler through the application state.

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

// Common constants
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_UPLOAD_FOLDER: &str = "uploads";
const DEFAULT_ALLOWED_EXTENSIONS: &str = "png,jpg,jpeg,gif";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
const DEFAULT_FACE_MIN_SIZE: u32 = 20;
const DEFAULT_FACE_SCORE_THRESHOLD: f64 = 2.0;
const DEFAULT_ANALYZER_TIMEOUT_SECS: u64 = 120;

/// Face detector tuning
#[derive(Clone, Debug)]
pub struct FaceDetectionConfig {
    /// SeetaFace model file. `None` leaves face detection unavailable.
    pub model_path: Option<PathBuf>,
    pub min_face_size: u32,
    pub score_threshold: f64,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    /// Reserved for persisted uploads; created at startup, not written by any route.
    pub upload_folder: PathBuf,
    /// Lower-cased extensions accepted by every upload route.
    pub allowed_extensions: Vec<String>,
    pub max_upload_bytes: usize,
    /// Where deepfake uploads are spooled. `None` means the system temp dir.
    pub temp_dir: Option<PathBuf>,
    pub face_detection: FaceDetectionConfig,
    pub deepfake_analyzer_url: Option<String>,
    /// 0 disables the timeout.
    pub analyzer_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            environment: env::var("ENVIRONMENT")
                .or_else(|_| env::var("APP_ENV"))
                .unwrap_or_else(|_| "development".to_string()),
            upload_folder: env::var("UPLOAD_FOLDER")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_FOLDER.to_string())
                .into(),
            allowed_extensions: parse_extension_list(
                &env::var("ALLOWED_EXTENSIONS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_EXTENSIONS.to_string()),
            ),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            temp_dir: env::var("TEMP_DIR")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            face_detection: FaceDetectionConfig {
                model_path: env::var("FACE_MODEL_PATH")
                    .ok()
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from),
                min_face_size: env::var("FACE_MIN_SIZE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_FACE_MIN_SIZE),
                score_threshold: env::var("FACE_SCORE_THRESHOLD")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_FACE_SCORE_THRESHOLD),
            },
            deepfake_analyzer_url: env::var("DEEPFAKE_ANALYZER_URL")
                .ok()
                .filter(|s| !s.is_empty()),
            analyzer_timeout_secs: env::var("ANALYZER_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_ANALYZER_TIMEOUT_SECS),
        };

        Ok(config)
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.host.parse::<IpAddr>().is_err() && self.host != "localhost" {
            return Err(anyhow::anyhow!(
                "HOST must be an IP address or 'localhost', got '{}'",
                self.host
            ));
        }

        if self.allowed_extensions.is_empty() {
            return Err(anyhow::anyhow!(
                "ALLOWED_EXTENSIONS must list at least one extension"
            ));
        }

        if self.max_upload_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_BYTES cannot be 0"));
        }

        if let Some(url) = &self.deepfake_analyzer_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow::anyhow!(
                    "DEEPFAKE_ANALYZER_URL must be an http(s) URL"
                ));
            }
        }

        if !self.face_detection.score_threshold.is_finite() {
            return Err(anyhow::anyhow!("FACE_SCORE_THRESHOLD must be a finite number"));
        }

        Ok(())
    }
}

/// Split a comma-separated list, trimming and lower-casing each entry.
/// A leading `.` is tolerated (`.JPG` and `jpg` are the same entry).
pub fn parse_extension_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_start_matches('.').to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: "test".to_string(),
            upload_folder: DEFAULT_UPLOAD_FOLDER.into(),
            allowed_extensions: parse_extension_list(DEFAULT_ALLOWED_EXTENSIONS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            temp_dir: None,
            face_detection: FaceDetectionConfig {
                model_path: None,
                min_face_size: DEFAULT_FACE_MIN_SIZE,
                score_threshold: DEFAULT_FACE_SCORE_THRESHOLD,
            },
            deepfake_analyzer_url: None,
            analyzer_timeout_secs: DEFAULT_ANALYZER_TIMEOUT_SECS,
        }
    }

    #[test]
    fn test_parse_extension_list() {
        assert_eq!(
            parse_extension_list(" PNG, .jpg,,jpeg ,gif"),
            vec!["png", "jpg", "jpeg", "gif"]
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = sample_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert!(!config.is_production());
    }

    #[test]
    fn test_validate_rejects_empty_allow_list() {
        let mut config = sample_config();
        config.allowed_extensions.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_analyzer_url() {
        let mut config = sample_config();
        config.deepfake_analyzer_url = Some("ftp://models.internal".to_string());
        assert!(config.validate().is_err());

        config.deepfake_analyzer_url = Some("http://models.internal:8000/analyze".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_host() {
        let mut config = sample_config();
        config.host = "not a host".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_production() {
        let mut config = sample_config();
        config.environment = "PROD".to_string();
        assert!(config.is_production());
    }
}
