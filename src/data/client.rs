//! The Analysis Request Client: one backend round trip per user-triggered run.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

use crate::domain::{AnalysisRequest, AnalysisResult};
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Any reason an analysis run produced no result.
///
/// Transport errors, unreadable bodies and `{error}` payloads all collapse
/// into this one value; only the message differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisFailure {
    message: String,
}

impl AnalysisFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AnalysisFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AnalysisFailure {}

impl From<reqwest::Error> for AnalysisFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("Request failed: {}", err))
    }
}

impl From<serde_json::Error> for AnalysisFailure {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Unreadable response: {}", err))
    }
}

/// A source of analysis results.
///
/// Browser futures are not `Send`, so the wasm build drops that bound.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisFailure>;

    /// A short identifier for logs (so afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Runs one analysis against `backend`.
///
/// No retries, no caching, no de-duplication: every call is exactly one
/// backend round trip. Never panics; every failure path ends in `Err`.
pub async fn request_analysis(
    backend: &dyn AnalysisBackend,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, AnalysisFailure> {
    let started = now();

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_requests {
        log::info!(
            "[{}] analyze {} interval={} period={} weight={}",
            backend.signature(),
            request.ticker,
            request.interval,
            request.period,
            request.weight.get()
        );
    }

    let outcome = backend.analyze(request).await;

    match &outcome {
        Ok(result) => log::info!(
            "Analysis for {} ready in {:?}: {} bars, {} absorption, {} VWAP signals",
            request.ticker,
            started.elapsed(),
            result.bar_count(),
            result.absorption_signals.len(),
            result.vwap_signals.len()
        ),
        Err(failure) => log::warn!(
            "Analysis for {} failed after {:?}: {}",
            request.ticker,
            started.elapsed(),
            failure
        ),
    }

    outcome
}

/// Decodes a response body into a result, honouring the `{error}` convention.
pub fn parse_response_body(body: &str) -> Result<AnalysisResult, AnalysisFailure> {
    let value: Value = serde_json::from_str(body)?;
    interpret_response(value)
}

/// Decodes an HTTP reply. The backend reports its own failures as `{error}`
/// with a 500, so the body is read whatever the status. A body that is not
/// JSON is a transport failure on an error status and a decode failure
/// otherwise.
pub fn parse_http_response(
    status: StatusCode,
    body: &str,
) -> Result<AnalysisResult, AnalysisFailure> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !status.is_success() => {
            return Err(AnalysisFailure::new(format!(
                "Backend responded with {}",
                status
            )));
        }
        Err(err) => return Err(err.into()),
    };
    interpret_response(value)
}

pub(crate) fn interpret_response(value: Value) -> Result<AnalysisResult, AnalysisFailure> {
    if let Some(error) = value.get("error").filter(|error| is_set(error)) {
        let message = match error.as_str() {
            Some(text) => text.to_string(),
            None => error.to_string(),
        };
        return Err(AnalysisFailure::new(message));
    }
    Ok(serde_json::from_value(value)?)
}

// Null, false and "" mean "no error".
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::String(text) => !text.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Interval, Period, Ticker, Weight};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubBackend {
        body: &'static str,
        calls: AtomicUsize,
    }

    impl StubBackend {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AnalysisBackend for StubBackend {
        async fn analyze(
            &self,
            _request: &AnalysisRequest,
        ) -> Result<AnalysisResult, AnalysisFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            parse_response_body(self.body)
        }

        fn signature(&self) -> &'static str {
            "Stub"
        }
    }

    fn aapl() -> AnalysisRequest {
        AnalysisRequest::new(
            Ticker::parse("aapl").unwrap(),
            Interval::default(),
            Period::default(),
            Weight::default(),
        )
    }

    const PAYLOAD: &str = r#"{
        "score": 42.4, "absorption_count": 1, "vwap_count": 0,
        "prices": [10, 10.5, 11], "volumes": [900, 5000, 1100],
        "times": ["2024-01-01T09:55:00Z", "2024-01-01T10:00:00Z", "2024-01-01T10:05:00Z"],
        "absorption_signals": [{"index": 1, "time": "2024-01-01T10:00:00Z", "volume": 5000,
            "avg_volume": 1000, "z_score": 4.0, "price_change": 0.001}],
        "vwap_signals": []
    }"#;

    #[tokio::test]
    async fn successful_run_returns_the_payload() {
        let backend = StubBackend::new(PAYLOAD);
        let result = request_analysis(&backend, &aapl()).await.unwrap();
        assert_eq!(result.prices, vec![10.0, 10.5, 11.0]);
        assert_eq!(result.absorption_signals.len(), 1);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn error_payload_becomes_a_failure() {
        let backend = StubBackend::new(r#"{"error": "No data found for ticker 'ZZZZ'"}"#);
        let failure = request_analysis(&backend, &aapl()).await.unwrap_err();
        assert_eq!(failure.message(), "No data found for ticker 'ZZZZ'");
    }

    #[tokio::test]
    async fn each_call_is_one_round_trip() {
        let backend = StubBackend::new(PAYLOAD);
        let request = aapl();
        let _ = request_analysis(&backend, &request).await;
        let _ = request_analysis(&backend, &request).await;
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn non_json_body_is_a_failure() {
        let failure = parse_response_body("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(failure.message().starts_with("Unreadable response"));
    }

    #[test]
    fn payload_missing_required_fields_is_a_failure() {
        assert!(parse_response_body(r#"{"prices": []}"#).is_err());
    }

    #[test]
    fn empty_error_field_is_not_an_error() {
        let body = r#"{"error": "", "score": 0, "prices": [], "volumes": [], "times": [],
                       "absorption_signals": [], "vwap_signals": []}"#;
        let result = parse_response_body(body).unwrap();
        assert_eq!(result.bar_count(), 0);
    }

    #[test]
    fn non_string_error_is_still_reported() {
        let failure = parse_response_body(r#"{"error": {"code": 7}}"#).unwrap_err();
        assert_eq!(failure.message(), r#"{"code":7}"#);
    }

    #[test]
    fn html_error_page_reports_the_status() {
        let failure = parse_http_response(StatusCode::BAD_GATEWAY, "<html>502 Bad Gateway</html>")
            .unwrap_err();
        assert_eq!(failure.message(), "Backend responded with 502 Bad Gateway");
    }

    #[test]
    fn html_body_with_success_status_is_a_decode_failure() {
        let failure = parse_http_response(StatusCode::OK, "<html>maintenance</html>").unwrap_err();
        assert!(failure.message().starts_with("Unreadable response"));
    }

    #[test]
    fn error_payload_on_server_error_keeps_its_message() {
        let failure = parse_http_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": "No data found for ticker 'ZZZZ'"}"#,
        )
        .unwrap_err();
        assert_eq!(failure.message(), "No data found for ticker 'ZZZZ'");
    }

    #[test]
    fn payload_on_success_status_decodes() {
        let result = parse_http_response(StatusCode::OK, PAYLOAD).unwrap();
        assert_eq!(result.bar_count(), 3);
    }
}
