// Signal pipeline: normalization, chart overlay, filtering and detail projection
pub mod detail;
pub mod normalizer;
pub mod overlay;
pub mod summary;
pub mod view_state;

// Re-export commonly used types
pub use detail::{DetailRow, SignalDetail, describe};
pub use normalizer::normalize;
pub use overlay::{BarClass, ChartOverlay, Membership, PointStyle, build_overlay};
pub use summary::{ActivityLevel, StatSummary};
pub use view_state::{FilterState, SignalView};
