use eframe::{Frame, egui};
use std::sync::Arc;

use crate::app::{AppState, RequestForm};
use crate::data::AnalysisBackend;
use crate::ui::app_async::PendingAnalysis;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The dashboard window.
///
/// All dashboard data lives in [`AppState`]; this struct only adds the
/// pieces that belong to the frame loop: the backend handle, requests still
/// in flight and render caches.
pub struct DashboardApp {
    pub(super) state: AppState,
    pub(super) backend: Arc<dyn AnalysisBackend>,
    pub(super) pending: Vec<PendingAnalysis>,
    pub(super) plot_view: PlotView,
    // Set when a run was refused for a blank ticker.
    pub(super) focus_ticker: bool,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, backend: Arc<dyn AnalysisBackend>) -> Self {
        let form = Self::load_form(cc).unwrap_or_default();

        log::info!("Analysis source: {}", backend.signature());

        Self {
            state: AppState::new(form),
            backend,
            pending: Vec::new(),
            plot_view: PlotView::new(),
            focus_ticker: false,
        }
    }

    // Only the request form survives restarts.
    fn load_form(cc: &eframe::CreationContext<'_>) -> Option<RequestForm> {
        let storage = cc.storage?;
        let form: Option<RequestForm> = eframe::get_value(storage, eframe::APP_KEY);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            match &form {
                Some(form) => log::info!("Restored request form: {:?}", form),
                None => log::info!("No stored request form. Starting with defaults."),
            }
        }

        form
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // In-flight requests are not cancelled; their results are just dropped.
        self.pending.clear();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state.form);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_pending_analyses();

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        self.render_detail_modal(ctx);
        self.render_notification_modal(ctx);
    }
}
