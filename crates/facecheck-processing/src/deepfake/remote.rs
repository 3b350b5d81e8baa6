use super::DeepfakeAnalyzer;
use crate::error::AnalysisError;
use async_trait::async_trait;
use facecheck_core::DeepfakeReport;
use std::path::Path;

/// Calls an HTTP deepfake model service.
///
/// The spooled file is sent as a `file` part, followed by one `actions` text
/// part per requested action. The service's JSON body is returned as-is.
pub struct RemoteDeepfakeAnalyzer {
    http_client: reqwest::Client,
    endpoint: String,
}

impl RemoteDeepfakeAnalyzer {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, AnalysisError> {
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| AnalysisError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl DeepfakeAnalyzer for RemoteDeepfakeAnalyzer {
    async fn analyze(
        &self,
        path: &Path,
        actions: &[&str],
    ) -> Result<DeepfakeReport, AnalysisError> {
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let mut form = reqwest::multipart::Form::new().part(
            "file",
            reqwest::multipart::Part::bytes(data).file_name(file_name),
        );
        for action in actions {
            form = form.text("actions", action.to_string());
        }

        let response = self
            .http_client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), endpoint = %self.endpoint, "Deepfake analyzer rejected request");
            return Err(AnalysisError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let report: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AnalysisError::Transport(format!("Invalid analyzer response: {}", e)))?;

        Ok(DeepfakeReport(report))
    }
}
