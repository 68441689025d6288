// src/app/state.rs

use serde::{Deserialize, Serialize};

use crate::analysis::{
    ChartOverlay, FilterState, SignalDetail, SignalView, StatSummary, describe, normalize,
};
use crate::data::AnalysisFailure;
use crate::domain::{AnalysisRequest, AnalysisResult, Interval, Period, SignalId, Ticker, Weight};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The request controls as the user left them. This is the only part of the
/// state that is persisted between sessions.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RequestForm {
    #[serde(default)]
    pub ticker_input: String,
    #[serde(default)]
    pub interval: Interval,
    #[serde(default)]
    pub period: Period,
    #[serde(default)]
    pub weight: Weight,
}

impl RequestForm {
    /// `None` when the ticker field is blank.
    pub fn to_request(&self) -> Option<AnalysisRequest> {
        let ticker = Ticker::parse(&self.ticker_input)?;
        Some(AnalysisRequest::new(
            ticker,
            self.interval,
            self.period,
            self.weight,
        ))
    }
}

/// Everything derived from one successful analysis run.
#[derive(Debug, Clone)]
pub struct LoadedAnalysis {
    pub request: AnalysisRequest,
    pub result: AnalysisResult,
    pub summary: StatSummary,
    pub overlay: ChartOverlay,
    pub view: SignalView,
}

impl LoadedAnalysis {
    pub fn new(request: AnalysisRequest, result: AnalysisResult, filter: FilterState) -> Self {
        let summary =
            StatSummary::from_result(&request.ticker, request.interval, request.period, &result);
        if summary.count_mismatch() {
            log::warn!(
                "{}: reported counts ({} absorption, {} VWAP) differ from received lists ({}, {})",
                request.ticker,
                summary.reported_absorption,
                summary.reported_vwap,
                summary.absorption_signals,
                summary.vwap_signals
            );
        }
        let overlay = ChartOverlay::from_analysis(&result);
        let view = SignalView::new(
            normalize(&result.absorption_signals, &result.vwap_signals),
            filter,
        );
        Self {
            request,
            result,
            summary,
            overlay,
            view,
        }
    }
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    RunAnalysis,
    SetFilter(FilterState),
    SelectSignal(SignalId),
    CloseDetail,
    DismissNotification,
}

/// What the caller has to do after a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The ticker was blank: move focus back to the input, send nothing.
    FocusTicker,
    /// Start exactly one backend request and hand its outcome to
    /// [`AppState::complete`] with the same `seq`.
    Request { seq: u64, request: AnalysisRequest },
}

/// The single owner of dashboard state. Every change goes through
/// [`AppState::dispatch`] or [`AppState::complete`].
///
/// Overlapping requests resolve last-started-wins: a completion for any
/// request older than the most recently started one is discarded.
#[derive(Debug, Default)]
pub struct AppState {
    pub form: RequestForm,
    filter: FilterState,
    analysis: Option<LoadedAnalysis>,
    selected: Option<SignalId>,
    notification: Option<String>,
    next_seq: u64,
    in_flight: Option<u64>,
}

impl AppState {
    pub fn new(form: RequestForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn dispatch(&mut self, intent: Intent) -> Effect {
        match intent {
            Intent::RunAnalysis => {
                let Some(request) = self.form.to_request() else {
                    return Effect::FocusTicker;
                };
                self.next_seq += 1;
                let seq = self.next_seq;
                self.in_flight = Some(seq);
                Effect::Request { seq, request }
            }
            Intent::SetFilter(filter) => {
                self.filter = filter;
                if let Some(analysis) = self.analysis.as_mut() {
                    analysis.view.set_filter(filter);
                }
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("Filter set to {}", filter);
                }
                Effect::None
            }
            Intent::SelectSignal(id) => {
                let exists = self
                    .analysis
                    .as_ref()
                    .is_some_and(|analysis| analysis.view.get(id).is_some());
                if exists {
                    self.selected = Some(id);
                }
                Effect::None
            }
            Intent::CloseDetail => {
                self.selected = None;
                Effect::None
            }
            Intent::DismissNotification => {
                self.notification = None;
                Effect::None
            }
        }
    }

    /// Applies a finished request. Returns whether it was applied.
    ///
    /// On failure the previous analysis stays on screen untouched and a
    /// notification is raised. On success the new analysis replaces the old
    /// one, the detail view closes and the filter carries over.
    pub fn complete(
        &mut self,
        seq: u64,
        request: AnalysisRequest,
        outcome: Result<AnalysisResult, AnalysisFailure>,
    ) -> bool {
        if self.in_flight != Some(seq) {
            log::info!(
                "Discarding response #{} for {}: superseded by a newer request",
                seq,
                request.ticker
            );
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_requests {
                    log::info!("Applying response #{} for {}", seq, request.ticker);
                }
                self.analysis = Some(LoadedAnalysis::new(request, result, self.filter));
                self.selected = None;
            }
            Err(failure) => {
                self.notification = Some(format!("Error: {}", failure));
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn filter(&self) -> FilterState {
        self.filter
    }

    pub fn analysis(&self) -> Option<&LoadedAnalysis> {
        self.analysis.as_ref()
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    pub fn selected(&self) -> Option<SignalId> {
        self.selected
    }

    /// Detail record for the open signal, read from the full sequence.
    pub fn selected_detail(&self) -> Option<SignalDetail> {
        let id = self.selected?;
        let signal = self.analysis.as_ref()?.view.get(id)?;
        Some(describe(signal))
    }
}
