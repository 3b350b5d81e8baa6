//! Deepfake analysis of a spooled upload

#[cfg(feature = "remote-deepfake")]
mod remote;

#[cfg(feature = "remote-deepfake")]
pub use remote::RemoteDeepfakeAnalyzer;

use crate::error::AnalysisError;
use async_trait::async_trait;
use facecheck_core::DeepfakeReport;
use std::path::Path;

/// The only action requested from the analyzer.
pub const DEEPFAKE_ACTION: &str = "deepfake";

/// External deepfake model, invoked with the path of a file on local disk.
///
/// The file only exists for the duration of the call.
#[async_trait]
pub trait DeepfakeAnalyzer: Send + Sync {
    async fn analyze(&self, path: &Path, actions: &[&str])
        -> Result<DeepfakeReport, AnalysisError>;

    fn is_available(&self) -> bool {
        true
    }
}

/// Stand-in used when `DEEPFAKE_ANALYZER_URL` is unset.
#[derive(Debug, Default)]
pub struct UnconfiguredDeepfakeAnalyzer;

#[async_trait]
impl DeepfakeAnalyzer for UnconfiguredDeepfakeAnalyzer {
    async fn analyze(
        &self,
        _path: &Path,
        _actions: &[&str],
    ) -> Result<DeepfakeReport, AnalysisError> {
        Err(AnalysisError::Unavailable(
            "Deepfake analyzer (DEEPFAKE_ANALYZER_URL)",
        ))
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_analyzer_fails() {
        let analyzer = UnconfiguredDeepfakeAnalyzer;
        let err = analyzer
            .analyze(Path::new("/tmp/x.jpg"), &[DEEPFAKE_ACTION])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("DEEPFAKE_ANALYZER_URL"));
        assert!(!analyzer.is_available());
    }
}
