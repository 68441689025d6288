use eframe::egui;
use poll_promise::Promise;

use crate::app::{Effect, Intent};
use crate::data::{AnalysisFailure, request_analysis};
use crate::domain::{AnalysisRequest, AnalysisResult};
use crate::ui::app::DashboardApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

type AnalysisOutcome = Result<AnalysisResult, AnalysisFailure>;

/// One request the backend has not answered yet.
pub(super) struct PendingAnalysis {
    seq: u64,
    request: AnalysisRequest,
    promise: Promise<AnalysisOutcome>,
}

impl DashboardApp {
    /// Runs an intent through the state and carries out whatever it asks for.
    pub(super) fn apply_intent(&mut self, ctx: &egui::Context, intent: Intent) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Intent: {:?}", intent);
        }

        match self.state.dispatch(intent) {
            Effect::None => {}
            Effect::FocusTicker => self.focus_ticker = true,
            Effect::Request { seq, request } => self.start_analysis(ctx, seq, request),
        }
    }

    fn start_analysis(&mut self, ctx: &egui::Context, seq: u64, request: AnalysisRequest) {
        let backend = self.backend.clone();
        let repaint = ctx.clone();
        let sent = request.clone();

        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_thread("analysis_request", move || {
            let outcome = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt.block_on(request_analysis(backend.as_ref(), &sent)),
                Err(e) => Err(AnalysisFailure::new(format!(
                    "Could not start request runtime: {}",
                    e
                ))),
            };
            repaint.request_repaint();
            outcome
        });

        #[cfg(target_arch = "wasm32")]
        let promise = Promise::spawn_local(async move {
            let outcome = request_analysis(backend.as_ref(), &sent).await;
            repaint.request_repaint();
            outcome
        });

        self.pending.push(PendingAnalysis {
            seq,
            request,
            promise,
        });
    }

    /// Hands every finished request to the state, oldest first.
    pub(super) fn poll_pending_analyses(&mut self) {
        let (finished, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|pending| pending.promise.ready().is_some());
        self.pending = waiting;

        for pending in finished {
            let PendingAnalysis {
                seq,
                request,
                promise,
            } = pending;
            match promise.try_take() {
                Ok(outcome) => {
                    self.state.complete(seq, request, outcome);
                }
                Err(_) => log::warn!("Request #{} reported ready but had no value", seq),
            }
        }
    }
}
