// Backend access: the request client and its implementations
pub mod client;
pub mod http;
#[cfg(not(target_arch = "wasm32"))]
pub mod replay;

// Re-export commonly used types
pub use client::{AnalysisBackend, AnalysisFailure, parse_response_body, request_analysis};
pub use http::HttpBackend;
#[cfg(not(target_arch = "wasm32"))]
pub use replay::ReplayBackend;

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

/// Picks the backend for a native run: a replay file when one is given,
/// the HTTP engine otherwise.
#[cfg(not(target_arch = "wasm32"))]
pub fn select_backend(
    backend_url: Option<&str>,
    replay: Option<&Path>,
) -> Box<dyn AnalysisBackend> {
    let backend: Box<dyn AnalysisBackend> = match replay {
        Some(path) => Box::new(ReplayBackend::new(path)),
        None => Box::new(HttpBackend::new(
            backend_url.unwrap_or(crate::config::BACKEND.default_base_url),
        )),
    };
    log::info!("Using analysis source: {}", backend.signature());
    backend
}
