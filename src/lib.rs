#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{ChartOverlay, FilterState, SignalView, describe, normalize};
pub use app::{AppState, Effect, Intent};
pub use data::{AnalysisBackend, AnalysisFailure, HttpBackend, request_analysis};
pub use domain::{AnalysisRequest, AnalysisResult, NormalizedSignal};
pub use ui::DashboardApp;
pub use utils::app_time;

use std::sync::Arc;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the analysis backend (the one serving POST /analyze)
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Serve every analysis from a saved JSON response instead of the network
    #[arg(long, value_name = "FILE")]
    pub replay: Option<std::path::PathBuf>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    backend: Arc<dyn AnalysisBackend>,
) -> Box<dyn eframe::App> {
    Box::new(ui::DashboardApp::new(cc, backend))
}
