//! Configuration module for the dashboard.

pub mod backend;
pub mod plot;

mod debug; // Private: use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use backend::BACKEND;
pub use persistence::{APP_NAME, APP_STATE_PATH};
pub use plot::PLOT_CONFIG;
