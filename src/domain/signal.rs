use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The two categories of detected signal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum SignalKind {
    Absorption,
    #[strum(serialize = "VWAP")]
    Vwap,
}

impl SignalKind {
    /// Compact badge shown in the signal list.
    pub fn badge(self) -> &'static str {
        match self {
            SignalKind::Absorption => "ABS",
            SignalKind::Vwap => "VWAP",
        }
    }

    /// One-line description shown under the timestamp in the signal list.
    pub fn summary(self) -> &'static str {
        match self {
            SignalKind::Absorption => "Large order absorbed",
            SignalKind::Vwap => "Price snapped back to VWAP",
        }
    }
}

/// Position of a signal in the full normalized sequence of the current
/// analysis. Stable for the lifetime of that analysis, regardless of filter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignalId(pub usize);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AbsorptionFields {
    pub volume: f64,
    pub avg_volume: f64,
    pub z_score: f64,
    pub price_change: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VwapFields {
    /// Zero when the backend omitted it.
    pub volume: f64,
    pub close_price: f64,
    pub vwap: f64,
    pub deviation: f64,
    pub direction: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum SignalPayload {
    Absorption(AbsorptionFields),
    Vwap(VwapFields),
}

/// A signal of either category in the common shape used for listing,
/// filtering and detail lookup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NormalizedSignal {
    /// Source timestamp, kept verbatim for display.
    pub time: String,
    /// Parsed epoch milliseconds. Ordering only, never displayed.
    /// `None` when the source string could not be parsed.
    pub timestamp_millis: Option<i64>,
    /// Bar position as reported by the backend (may be out of range).
    pub index: i64,
    pub payload: SignalPayload,
}

impl NormalizedSignal {
    pub fn kind(&self) -> SignalKind {
        match self.payload {
            SignalPayload::Absorption(_) => SignalKind::Absorption,
            SignalPayload::Vwap(_) => SignalKind::Vwap,
        }
    }

    pub fn volume(&self) -> f64 {
        match &self.payload {
            SignalPayload::Absorption(fields) => fields.volume,
            SignalPayload::Vwap(fields) => fields.volume,
        }
    }
}
