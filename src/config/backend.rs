//! Analysis backend connection settings.

/// Where and how the dashboard talks to the analysis engine.
pub struct BackendConfig {
    /// Base URL used by native builds when `--backend-url` is not given.
    /// The browser build always uses the page origin instead.
    pub default_base_url: &'static str,
    /// Route of the analysis endpoint, appended to the base URL.
    pub analyze_path: &'static str,
    /// Per-request timeout (native only; the browser applies its own).
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

pub const BACKEND: BackendConfig = BackendConfig {
    default_base_url: "http://127.0.0.1:5000",
    analyze_path: "/analyze",
    // Covers the backend's vendor download plus detection.
    timeout_ms: 60_000,
    user_agent: concat!("liquidity-lens/", env!("CARGO_PKG_VERSION")),
};

impl BackendConfig {
    /// Joins a base URL and the analyze route without doubling slashes.
    pub fn analyze_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.analyze_path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_url_joins_cleanly() {
        assert_eq!(
            BACKEND.analyze_url("http://localhost:5000/"),
            "http://localhost:5000/analyze"
        );
        assert_eq!(
            BACKEND.analyze_url("https://lens.example"),
            "https://lens.example/analyze"
        );
    }
}
