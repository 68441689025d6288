use async_trait::async_trait;
use std::path::PathBuf;

use crate::data::client::{AnalysisBackend, AnalysisFailure, parse_response_body};
use crate::domain::{AnalysisRequest, AnalysisResult};

/// Serves every request from a saved `/analyze` response on disk.
///
/// Request parameters are ignored: the file is the answer. Useful for
/// working on the dashboard without the analysis engine running.
#[derive(Debug, Clone)]
pub struct ReplayBackend {
    path: PathBuf,
}

impl ReplayBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AnalysisBackend for ReplayBackend {
    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisFailure> {
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            AnalysisFailure::new(format!(
                "Could not read replay file {}: {}",
                self.path.display(),
                err
            ))
        })?;
        parse_response_body(&body)
    }

    fn signature(&self) -> &'static str {
        "Replay file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Interval, Period, Ticker, Weight};

    fn request() -> AnalysisRequest {
        AnalysisRequest::new(
            Ticker::parse("tsla").unwrap(),
            Interval::OneMinute,
            Period::OneDay,
            Weight::new(30),
        )
    }

    #[tokio::test]
    async fn replays_saved_payload() {
        let path = std::env::temp_dir().join(format!(
            "liquidity_lens_replay_{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"score": 5, "prices": [1, 2], "volumes": [3, 4],
                "times": ["2024-01-01T10:00:00Z", "2024-01-01T10:01:00Z"],
                "absorption_signals": [], "vwap_signals": []}"#,
        )
        .unwrap();

        let result = ReplayBackend::new(&path).analyze(&request()).await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(result.bar_count(), 2);
        assert_eq!(result.score, 5.0);
    }

    #[tokio::test]
    async fn missing_file_is_a_failure() {
        let failure = ReplayBackend::new("/definitely/not/here.json")
            .analyze(&request())
            .await
            .unwrap_err();
        assert!(failure.message().contains("Could not read replay file"));
    }
}
