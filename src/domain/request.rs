use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A validated ticker symbol: trimmed, uppercase, never empty.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Normalises raw user input. An empty (or all-whitespace) entry yields
    /// `None`, which callers treat as a local no-op rather than a request.
    pub fn parse(raw: &str) -> Option<Self> {
        let symbol = raw.trim().to_uppercase();
        if symbol.is_empty() {
            None
        } else {
            Some(Self(symbol))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bar width requested from the backend.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
)]
pub enum Interval {
    #[serde(rename = "1m")]
    #[strum(serialize = "1m")]
    OneMinute,
    #[default]
    #[serde(rename = "5m")]
    #[strum(serialize = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    #[strum(serialize = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    #[strum(serialize = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    #[strum(serialize = "1h")]
    OneHour,
}

/// How far back the backend looks.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
)]
pub enum Period {
    #[serde(rename = "1d")]
    #[strum(serialize = "1d")]
    OneDay,
    #[default]
    #[serde(rename = "5d")]
    #[strum(serialize = "5d")]
    FiveDays,
    #[serde(rename = "1mo")]
    #[strum(serialize = "1mo")]
    OneMonth,
}

impl Period {
    /// Single-session periods label the chart axis by time of day.
    pub fn is_intraday(self) -> bool {
        matches!(self, Period::OneDay)
    }
}

/// Share (in percent) of the activity score given to absorption signals.
/// VWAP signals receive the remainder.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(from = "u8", into = "u8")]
pub struct Weight(u8);

impl Weight {
    pub const MAX: u8 = 100;

    pub fn new(percent: u8) -> Self {
        Self(percent.min(Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for Weight {
    fn from(percent: u8) -> Self {
        Self::new(percent)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self(50)
    }
}

/// Body of `POST /analyze`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub ticker: Ticker,
    pub interval: Interval,
    pub period: Period,
    pub weight: Weight,
}

impl AnalysisRequest {
    pub fn new(ticker: Ticker, interval: Interval, period: Period, weight: Weight) -> Self {
        Self {
            ticker,
            interval,
            period,
            weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ticker_is_trimmed_and_uppercased() {
        assert_eq!(Ticker::parse("  aapl ").unwrap().as_str(), "AAPL");
    }

    #[test]
    fn blank_ticker_is_rejected() {
        assert!(Ticker::parse("").is_none());
        assert!(Ticker::parse("   \t").is_none());
    }

    #[test]
    fn weight_is_clamped() {
        assert_eq!(Weight::new(250).get(), 100);
        assert_eq!(Weight::default().get(), 50);
    }

    #[test]
    fn deserialized_weight_is_clamped() {
        let weight: Weight = serde_json::from_str("250").unwrap();
        assert_eq!(weight.get(), 100);
        assert_eq!(serde_json::to_string(&Weight::new(30)).unwrap(), "30");
    }

    #[test]
    fn request_body_uses_wire_names() {
        let request = AnalysisRequest::new(
            Ticker::parse("spy").unwrap(),
            Interval::FifteenMinutes,
            Period::OneMonth,
            Weight::new(70),
        );
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "ticker": "SPY",
                "interval": "15m",
                "period": "1mo",
                "weight": 70
            })
        );
    }

    #[test]
    fn display_matches_wire_names() {
        let intervals: Vec<String> = Interval::iter().map(|i| i.to_string()).collect();
        assert_eq!(intervals, ["1m", "5m", "15m", "30m", "1h"]);
        assert_eq!(Period::OneDay.to_string(), "1d");
        assert!(Period::OneDay.is_intraday());
        assert!(!Period::FiveDays.is_intraday());
    }

    #[test]
    fn wire_names_parse_back() {
        use std::str::FromStr;
        assert_eq!(Interval::from_str("30m").unwrap(), Interval::ThirtyMinutes);
        assert_eq!(Period::from_str("1mo").unwrap(), Period::OneMonth);
        assert!(Interval::from_str("2h").is_err());
    }
}
