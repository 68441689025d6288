// Formatting and time helpers shared by the core and the presentation layer
pub mod app_time;
pub mod format;
pub mod time_utils;

pub use format::{format_percent, format_price, format_volume};
pub use time_utils::TimeUtils;
