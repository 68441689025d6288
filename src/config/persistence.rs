//! UI state persistence

/// Directory eframe writes the request-form preferences to (native only).
pub const APP_STATE_PATH: &str = ".liquidity_lens_state";

/// Window title, also the eframe application id.
pub const APP_NAME: &str = "Liquidity Lens - Hidden Liquidity Dashboard";
