// Domain types and value objects
pub mod analysis;
pub mod request;
pub mod signal;

// Re-export commonly used types
pub use analysis::{AnalysisResult, RawAbsorptionSignal, RawVwapSignal};
pub use request::{AnalysisRequest, Interval, Period, Ticker, Weight};
pub use signal::{
    AbsorptionFields, NormalizedSignal, SignalId, SignalKind, SignalPayload, VwapFields,
};
