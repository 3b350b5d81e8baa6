pub mod anti_spoofing;
pub mod deepfake;
pub mod face_detection;
pub mod fallback;
pub mod health;

use crate::state::AppState;
use facecheck_processing::AnalysisError;
use std::future::Future;

/// Await an analyzer call, bounded by the configured analyzer timeout.
pub(crate) async fn run_analyzer<T, F>(state: &AppState, analysis: F) -> Result<T, AnalysisError>
where
    F: Future<Output = Result<T, AnalysisError>>,
{
    match state.analyzer_timeout() {
        Some(limit) => tokio::time::timeout(limit, analysis).await.map_err(|_| {
            tracing::warn!(timeout_secs = limit.as_secs(), "Analyzer call timed out");
            AnalysisError::Timeout(limit.as_secs())
        })?,
        None => analysis.await,
    }
}

/// Run CPU-bound decoding and detection on the blocking thread pool.
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T, AnalysisError>
where
    F: FnOnce() -> Result<T, AnalysisError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AnalysisError::Model(format!("Analysis task failed: {}", e)))?
}
