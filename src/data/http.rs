use async_trait::async_trait;

use crate::config::BACKEND;
use crate::data::client::{AnalysisBackend, AnalysisFailure, parse_http_response};
use crate::domain::{AnalysisRequest, AnalysisResult};

/// Talks to the analysis engine over `POST /analyze`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    analyze_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: build_client(),
            analyze_url: BACKEND.analyze_url(base_url),
        }
    }

    /// The backend that served the page the dashboard is running in.
    #[cfg(target_arch = "wasm32")]
    pub fn for_page_origin() -> Option<Self> {
        let origin = web_sys::window()?.location().origin().ok()?;
        Some(Self::new(&origin))
    }

    pub fn analyze_url(&self) -> &str {
        &self.analyze_url
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(BACKEND.user_agent)
        .timeout(std::time::Duration::from_millis(BACKEND.timeout_ms))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AnalysisBackend for HttpBackend {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisFailure> {
        let response = self
            .client
            .post(&self.analyze_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        parse_http_response(status, &body)
    }

    fn signature(&self) -> &'static str {
        "HTTP backend"
    }
}
