//! Display formatting for raw numbers and timestamps.
//!
//! Everything here is a pure function so the chart tooltips, the signal list,
//! the detail modal and the headless `inspect` output all render identically.

use crate::domain::Period;
use crate::utils::time_utils::{TimeUtils, parse_timestamp};

/// Shown wherever a value is missing or cannot be computed.
pub const PLACEHOLDER: &str = "—";

/// Rounds to `decimals` places with ties going away from zero, so `{:.N}`
/// afterwards never meets a tie (`2.5` -> `3`, `187.125` -> `187.13`).
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Fixed-point text with half-up rounding.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, round_half_up(value, decimals as i32))
}

/// Volume magnitude: `1.5M`, `12K`, or the plain number below a thousand.
pub fn format_volume(volume: f64) -> String {
    if volume >= 1e6 {
        format!("{}M", format_fixed(volume / 1e6, 1))
    } else if volume >= 1e3 {
        format!("{}K", format_fixed(volume / 1e3, 0))
    } else {
        format!("{}", volume)
    }
}

/// Volume, or the placeholder when the bar carried no (or zero) volume.
pub fn format_optional_volume(volume: f64) -> String {
    if volume == 0.0 || !volume.is_finite() {
        PLACEHOLDER.to_string()
    } else {
        format_volume(volume)
    }
}

pub fn format_price(price: f64) -> String {
    format!("${}", format_fixed(price, 2))
}

/// A fraction rendered as a percentage with three decimals (`0.001` -> `0.100%`).
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", format_fixed(fraction * 100.0, 3))
}

/// Timestamp for signal rows, tooltips and the detail modal.
/// Unparseable strings are returned verbatim.
pub fn format_signal_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format(TimeUtils::SIGNAL_TIME_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// X-axis label: time of day for a single-day period, the date otherwise.
pub fn format_axis_label(raw: &str, period: Period) -> String {
    let layout = if period.is_intraday() {
        TimeUtils::AXIS_TIME_FORMAT
    } else {
        TimeUtils::AXIS_DATE_FORMAT
    };
    match parse_timestamp(raw) {
        Some(dt) => dt.format(layout).to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_magnitudes() {
        assert_eq!(format_volume(2_500_000.0), "2.5M");
        assert_eq!(format_volume(1_000_000.0), "1.0M");
        assert_eq!(format_volume(5_000.0), "5K");
        assert_eq!(format_volume(12_600.0), "13K");
        assert_eq!(format_volume(950.0), "950");
        assert_eq!(format_volume(0.0), "0");
    }

    #[test]
    fn ties_round_half_up() {
        assert_eq!(format_volume(2_500.0), "3K");
        assert_eq!(format_volume(12_500.0), "13K");
        assert_eq!(format_volume(1_250_000.0), "1.3M");
        assert_eq!(format_price(187.125), "$187.13");
        assert_eq!(format_fixed(4.125, 2), "4.13");
        assert_eq!(format_fixed(-2.5, 0), "-3");
    }

    #[test]
    fn missing_volume_uses_placeholder() {
        assert_eq!(format_optional_volume(0.0), PLACEHOLDER);
        assert_eq!(format_optional_volume(f64::NAN), PLACEHOLDER);
        assert_eq!(format_optional_volume(1_200.0), "1K");
    }

    #[test]
    fn percent_and_price() {
        assert_eq!(format_percent(0.001), "0.100%");
        assert_eq!(format_percent(-0.0125), "-1.250%");
        assert_eq!(format_price(10.5), "$10.50");
    }

    #[test]
    fn signal_time_keeps_source_offset() {
        assert_eq!(format_signal_time("2024-01-02 09:35:00-05:00"), "Jan 2, 09:35 AM");
        assert_eq!(format_signal_time("2024-01-01T15:05:00Z"), "Jan 1, 03:05 PM");
        assert_eq!(format_signal_time("not a time"), "not a time");
    }

    #[test]
    fn axis_labels_follow_period() {
        let raw = "2024-03-08 14:30:00-05:00";
        assert_eq!(format_axis_label(raw, Period::OneDay), "02:30 PM");
        assert_eq!(format_axis_label(raw, Period::FiveDays), "Mar 8");
    }
}
