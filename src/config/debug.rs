//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so the
//! console stays quiet. Every use is additionally gated by
//! `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit one line per analysis request sent and per response applied.
    pub print_requests: bool,
    /// Emit merged signal counts and ordering details after normalization.
    pub print_normalizer: bool,
    /// Emit overlay indices that were dropped for being out of range.
    pub print_overlay: bool,
    /// Emit UI interaction logs (filter changes, signal selection, etc.).
    pub print_ui_interactions: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_requests: true,
    print_normalizer: false,
    print_overlay: false,
    print_ui_interactions: false,
    print_state_serde: false,
    print_shutdown: false,
};
