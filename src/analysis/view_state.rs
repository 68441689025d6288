//! The full signal sequence of the current analysis and its filtered view.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::domain::{NormalizedSignal, SignalId, SignalKind};

/// Which category of signal the list shows.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
)]
pub enum FilterState {
    #[default]
    #[strum(to_string = "All", serialize = "all")]
    All,
    #[strum(to_string = "Absorption", serialize = "absorption")]
    AbsorptionOnly,
    #[strum(to_string = "VWAP", serialize = "vwap")]
    VwapOnly,
}

impl FilterState {
    pub fn admits(self, kind: SignalKind) -> bool {
        match self {
            FilterState::All => true,
            FilterState::AbsorptionOnly => kind == SignalKind::Absorption,
            FilterState::VwapOnly => kind == SignalKind::Vwap,
        }
    }
}

/// Owns the normalized sequence for one analysis run.
///
/// The sequence is never re-sorted or mutated; filtering only recomputes the
/// list of visible ids. Lookups by `SignalId` always hit the full sequence.
#[derive(Debug, Clone, Default)]
pub struct SignalView {
    signals: Vec<NormalizedSignal>,
    filter: FilterState,
    visible: Vec<SignalId>,
}

impl SignalView {
    pub fn new(signals: Vec<NormalizedSignal>, filter: FilterState) -> Self {
        let mut view = Self {
            signals,
            filter,
            visible: Vec::new(),
        };
        view.recompute_visible();
        view
    }

    pub fn filter(&self) -> FilterState {
        self.filter
    }

    /// Switches the filter. Returns whether anything changed; setting the
    /// current filter again is a no-op.
    pub fn set_filter(&mut self, filter: FilterState) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        self.recompute_visible();
        true
    }

    /// Signals admitted by the current filter, most recent first.
    pub fn visible_signals(&self) -> Vec<(SignalId, &NormalizedSignal)> {
        self.visible
            .iter()
            .map(|&id| (id, &self.signals[id.0]))
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// The full sequence, regardless of filter.
    pub fn all(&self) -> &[NormalizedSignal] {
        &self.signals
    }

    pub fn get(&self, id: SignalId) -> Option<&NormalizedSignal> {
        self.signals.get(id.0)
    }

    /// Count of one category in the full sequence.
    pub fn count(&self, kind: SignalKind) -> usize {
        self.signals.iter().filter(|s| s.kind() == kind).count()
    }

    fn recompute_visible(&mut self) {
        let filter = self.filter;
        self.visible = self
            .signals
            .iter()
            .enumerate()
            .filter(|(_, signal)| filter.admits(signal.kind()))
            .map(|(position, _)| SignalId(position))
            .collect();
    }
}
