use itertools::{Itertools, MinMaxResult};
use strum_macros::Display;

use crate::domain::{AnalysisResult, Interval, Period, Ticker};
use crate::utils::format::{PLACEHOLDER, format_price};

/// Activity bucket for the rounded score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ActivityLevel {
    High,
    Moderate,
    Low,
}

impl ActivityLevel {
    pub fn from_score(score: i64) -> Self {
        if score >= 67 {
            ActivityLevel::High
        } else if score >= 34 {
            ActivityLevel::Moderate
        } else {
            ActivityLevel::Low
        }
    }
}

/// The stat strip above the charts.
#[derive(Debug, Clone, PartialEq)]
pub struct StatSummary {
    pub ticker: Ticker,
    pub score: i64,
    pub activity: ActivityLevel,
    /// Counts as reported by the backend (display hints).
    pub reported_absorption: usize,
    pub reported_vwap: usize,
    /// Counts of the lists actually received.
    pub absorption_signals: usize,
    pub vwap_signals: usize,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub bar_count: usize,
    /// "5m • 5d"
    pub subtitle: String,
}

impl StatSummary {
    pub fn from_result(
        ticker: &Ticker,
        interval: Interval,
        period: Period,
        result: &AnalysisResult,
    ) -> Self {
        let score = if result.score.is_finite() {
            result.score.round() as i64
        } else {
            0
        };

        let (low, high) = match result.prices.iter().copied().filter(|p| p.is_finite()).minmax_by(
            |a, b| a.total_cmp(b),
        ) {
            MinMaxResult::NoElements => (None, None),
            MinMaxResult::OneElement(price) => (Some(price), Some(price)),
            MinMaxResult::MinMax(low, high) => (Some(low), Some(high)),
        };

        Self {
            ticker: ticker.clone(),
            score,
            activity: ActivityLevel::from_score(score),
            reported_absorption: result.absorption_count,
            reported_vwap: result.vwap_count,
            absorption_signals: result.absorption_signals.len(),
            vwap_signals: result.vwap_signals.len(),
            high,
            low,
            bar_count: result.prices.len(),
            subtitle: format!("{} • {}", interval, period),
        }
    }

    pub fn score_text(&self) -> String {
        format!("{}/100", self.score)
    }

    /// True when the backend's counts disagree with its own lists.
    pub fn count_mismatch(&self) -> bool {
        self.reported_absorption != self.absorption_signals
            || self.reported_vwap != self.vwap_signals
    }

    pub fn high_text(&self) -> String {
        self.high
            .map(format_price)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn low_text(&self) -> String {
        self.low
            .map(format_price)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawAbsorptionSignal;

    fn summary_for(result: &AnalysisResult) -> StatSummary {
        StatSummary::from_result(
            &Ticker::parse("nvda").unwrap(),
            Interval::FiveMinutes,
            Period::FiveDays,
            result,
        )
    }

    #[test]
    fn activity_thresholds() {
        assert_eq!(ActivityLevel::from_score(100), ActivityLevel::High);
        assert_eq!(ActivityLevel::from_score(67), ActivityLevel::High);
        assert_eq!(ActivityLevel::from_score(66), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::from_score(34), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::from_score(33), ActivityLevel::Low);
        assert_eq!(ActivityLevel::from_score(0), ActivityLevel::Low);
    }

    #[test]
    fn summary_rounds_score_and_finds_range() {
        let result = AnalysisResult {
            score: 66.6,
            prices: vec![10.0, 10.5, 11.0, 9.75],
            ..Default::default()
        };
        let summary = summary_for(&result);
        assert_eq!(summary.score_text(), "67/100");
        assert_eq!(summary.activity, ActivityLevel::High);
        assert_eq!(summary.high_text(), "$11.00");
        assert_eq!(summary.low_text(), "$9.75");
        assert_eq!(summary.bar_count, 4);
        assert_eq!(summary.subtitle, "5m • 5d");
    }

    #[test]
    fn empty_prices_show_placeholders() {
        let summary = summary_for(&AnalysisResult::default());
        assert_eq!(summary.high_text(), PLACEHOLDER);
        assert_eq!(summary.low_text(), PLACEHOLDER);
        assert_eq!(summary.bar_count, 0);
    }

    #[test]
    fn count_mismatch_is_reported_not_corrected() {
        let result = AnalysisResult {
            absorption_count: 3,
            absorption_signals: vec![RawAbsorptionSignal {
                index: 0,
                time: "2024-01-01T10:00:00Z".to_string(),
                volume: 1.0,
                avg_volume: 1.0,
                z_score: 3.1,
                price_change: 0.0,
            }],
            ..Default::default()
        };
        let summary = summary_for(&result);
        assert!(summary.count_mismatch());
        assert_eq!(summary.reported_absorption, 3);
        assert_eq!(summary.absorption_signals, 1);
    }
}
