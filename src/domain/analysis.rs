use serde::{Deserialize, Serialize};

/// One absorption event as emitted by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawAbsorptionSignal {
    /// Position into `prices` / `volumes` / `times`.
    pub index: i64,
    pub time: String,
    pub volume: f64,
    pub avg_volume: f64,
    pub z_score: f64,
    /// Fractional |close - open| / open of the bar.
    pub price_change: f64,
}

/// One VWAP snap-back event as emitted by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawVwapSignal {
    pub index: i64,
    pub time: String,
    #[serde(default)]
    pub volume: Option<f64>,
    pub close_price: f64,
    pub vwap: f64,
    /// Signed fractional distance of the close from VWAP.
    pub deviation: f64,
    pub direction: String,
}

/// A complete analysis run. Immutable once received.
///
/// `prices`, `volumes` and `times` are index-aligned bars. The two counts
/// are display hints only: nothing sizes or loops on them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    pub score: f64,
    #[serde(default)]
    pub absorption_count: usize,
    #[serde(default)]
    pub vwap_count: usize,
    #[serde(default)]
    pub prices: Vec<f64>,
    #[serde(default)]
    pub volumes: Vec<f64>,
    #[serde(default)]
    pub times: Vec<String>,
    #[serde(default)]
    pub absorption_signals: Vec<RawAbsorptionSignal>,
    #[serde(default)]
    pub vwap_signals: Vec<RawVwapSignal>,
}

impl AnalysisResult {
    /// Number of bars. The three series are expected to agree; if they do
    /// not, the shortest one bounds what can be drawn.
    pub fn bar_count(&self) -> usize {
        self.prices
            .len()
            .min(self.volumes.len())
            .min(self.times.len())
    }

    /// Whether the reported counts agree with the lists actually received.
    pub fn count_hints_match(&self) -> bool {
        self.absorption_count == self.absorption_signals.len()
            && self.vwap_count == self.vwap_signals.len()
    }

    pub fn time_at(&self, index: usize) -> Option<&str> {
        self.times.get(index).map(String::as_str)
    }
}
