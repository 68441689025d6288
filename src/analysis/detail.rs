//! Read-only detail projection for a single signal.
//!
//! This is the one place the ratio and the percentages are derived; the
//! modal, the headless output and the tests all read them from here.

use crate::domain::{AbsorptionFields, NormalizedSignal, SignalKind, SignalPayload, VwapFields};
use crate::utils::format::{
    PLACEHOLDER, format_fixed, format_optional_volume, format_percent, format_price,
    format_signal_time, format_volume, round_half_up,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AbsorptionDetail {
    pub time: String,
    pub volume: String,
    pub avg_volume: String,
    /// volume / average volume, rounded to one decimal. `None` when the
    /// average is zero or not finite.
    pub ratio: Option<f64>,
    pub z_score: String,
    pub price_change: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VwapDetail {
    pub time: String,
    pub close_price: String,
    pub vwap: String,
    pub deviation: String,
    pub direction: String,
    pub volume: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignalDetail {
    Absorption(AbsorptionDetail),
    Vwap(VwapDetail),
}

/// Projects a signal into its display record. Pure: same input, same output.
pub fn describe(signal: &NormalizedSignal) -> SignalDetail {
    match &signal.payload {
        SignalPayload::Absorption(fields) => {
            SignalDetail::Absorption(describe_absorption(&signal.time, fields))
        }
        SignalPayload::Vwap(fields) => SignalDetail::Vwap(describe_vwap(&signal.time, fields)),
    }
}

fn describe_absorption(time: &str, fields: &AbsorptionFields) -> AbsorptionDetail {
    let ratio = volume_ratio(fields.volume, fields.avg_volume);
    let magnitude = ratio
        .map(|r| format!("{:.1}x higher than", r))
        .unwrap_or_else(|| "well above".to_string());

    AbsorptionDetail {
        time: format_signal_time(time),
        volume: format_volume(fields.volume),
        avg_volume: format_volume(fields.avg_volume),
        ratio,
        z_score: format_fixed(fields.z_score, 2),
        price_change: format_percent(fields.price_change),
        note: format!(
            "Volume was {} normal while price barely moved. \
             This pattern may indicate a large institutional order being absorbed by the market.",
            magnitude
        ),
    }
}

fn describe_vwap(time: &str, fields: &VwapFields) -> VwapDetail {
    VwapDetail {
        time: format_signal_time(time),
        close_price: format_price(fields.close_price),
        vwap: format_price(fields.vwap),
        deviation: format_percent(fields.deviation),
        direction: fields.direction.replace('_', " "),
        volume: format_optional_volume(fields.volume),
        note: "Price deviated from VWAP then snapped back. \
               This pattern is consistent with algorithmic execution strategies used by institutional traders."
            .to_string(),
    }
}

fn volume_ratio(volume: f64, avg_volume: f64) -> Option<f64> {
    let ratio = volume / avg_volume;
    if avg_volume == 0.0 || !ratio.is_finite() {
        return None;
    }
    Some(round_half_up(ratio, 1))
}

impl SignalDetail {
    pub fn kind(&self) -> SignalKind {
        match self {
            SignalDetail::Absorption(_) => SignalKind::Absorption,
            SignalDetail::Vwap(_) => SignalKind::Vwap,
        }
    }

    pub fn title(&self) -> String {
        format!("{} Signal", self.kind())
    }

    pub fn note(&self) -> &str {
        match self {
            SignalDetail::Absorption(detail) => &detail.note,
            SignalDetail::Vwap(detail) => &detail.note,
        }
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> Vec<DetailRow> {
        match self {
            SignalDetail::Absorption(d) => vec![
                DetailRow::new("Time", d.time.clone()),
                DetailRow::new("Volume", d.volume.clone()),
                DetailRow::new("Avg Volume", d.avg_volume.clone()),
                DetailRow::new(
                    "Ratio",
                    d.ratio
                        .map(|r| format!("{:.1}x normal", r))
                        .unwrap_or_else(|| PLACEHOLDER.to_string()),
                ),
                DetailRow::new("Z-Score", d.z_score.clone()),
                DetailRow::new("Price Change", d.price_change.clone()),
            ],
            SignalDetail::Vwap(d) => vec![
                DetailRow::new("Time", d.time.clone()),
                DetailRow::new("Close Price", d.close_price.clone()),
                DetailRow::new("VWAP", d.vwap.clone()),
                DetailRow::new("Deviation", d.deviation.clone()),
                DetailRow::new("Direction", d.direction.clone()),
                DetailRow::new("Volume", d.volume.clone()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absorption_signal(volume: f64, avg_volume: f64) -> NormalizedSignal {
        NormalizedSignal {
            time: "2024-01-01T10:00:00Z".to_string(),
            timestamp_millis: Some(1_704_103_200_000),
            index: 1,
            payload: SignalPayload::Absorption(AbsorptionFields {
                volume,
                avg_volume,
                z_score: 4.0,
                price_change: 0.001,
            }),
        }
    }

    fn vwap_signal(volume: f64, direction: &str) -> NormalizedSignal {
        NormalizedSignal {
            time: "2024-01-02 09:35:00-05:00".to_string(),
            timestamp_millis: Some(1_704_206_100_000),
            index: 4,
            payload: SignalPayload::Vwap(VwapFields {
                volume,
                close_price: 187.456,
                vwap: 187.1,
                deviation: 0.0019,
                direction: direction.to_string(),
            }),
        }
    }

    #[test]
    fn absorption_detail_matches_reference_scenario() {
        let SignalDetail::Absorption(detail) = describe(&absorption_signal(5_000.0, 1_000.0))
        else {
            panic!("expected absorption detail");
        };
        assert_eq!(detail.ratio, Some(5.0));
        assert_eq!(detail.price_change, "0.100%");
        assert_eq!(detail.z_score, "4.00");
        assert_eq!(detail.volume, "5K");
        assert_eq!(detail.avg_volume, "1K");
        assert_eq!(detail.time, "Jan 1, 10:00 AM");
        assert!(detail.note.starts_with("Volume was 5.0x higher"));
    }

    #[test]
    fn ratio_is_rounded_to_one_decimal() {
        let SignalDetail::Absorption(detail) = describe(&absorption_signal(4_570.0, 1_000.0))
        else {
            panic!("expected absorption detail");
        };
        assert_eq!(detail.ratio, Some(4.6));
    }

    #[test]
    fn ties_in_detail_figures_round_up() {
        let mut signal = absorption_signal(2_500.0, 1_000.0);
        if let SignalPayload::Absorption(fields) = &mut signal.payload {
            fields.z_score = 4.125;
        }
        let SignalDetail::Absorption(detail) = describe(&signal) else {
            panic!("expected absorption detail");
        };
        assert_eq!(detail.z_score, "4.13");
        assert_eq!(detail.volume, "3K");
        assert_eq!(detail.ratio, Some(2.5));
    }

    #[test]
    fn zero_average_volume_degrades_to_placeholder() {
        let detail = describe(&absorption_signal(5_000.0, 0.0));
        let ratio_row = detail.rows().into_iter().find(|r| r.label == "Ratio").unwrap();
        assert_eq!(ratio_row.value, PLACEHOLDER);
        assert!(detail.note().starts_with("Volume was well above normal"));
    }

    #[test]
    fn vwap_detail_formats_fields() {
        let SignalDetail::Vwap(detail) = describe(&vwap_signal(1_300_000.0, "snap_up")) else {
            panic!("expected vwap detail");
        };
        assert_eq!(detail.close_price, "$187.46");
        assert_eq!(detail.vwap, "$187.10");
        assert_eq!(detail.deviation, "0.190%");
        assert_eq!(detail.direction, "snap up");
        assert_eq!(detail.volume, "1.3M");
        assert_eq!(detail.time, "Jan 2, 09:35 AM");
    }

    #[test]
    fn missing_vwap_volume_shows_placeholder() {
        let detail = describe(&vwap_signal(0.0, "below_vwap"));
        let volume_row = detail.rows().into_iter().find(|r| r.label == "Volume").unwrap();
        assert_eq!(volume_row.value, PLACEHOLDER);
        assert_ne!(volume_row.value, "0");
        assert_ne!(volume_row.value, "NaN");
    }

    #[test]
    fn describe_is_deterministic() {
        let signal = vwap_signal(900.0, "above_vwap");
        assert_eq!(describe(&signal), describe(&signal));
        assert_eq!(
            format!("{:?}", describe(&signal)),
            format!("{:?}", describe(&signal))
        );
    }

    #[test]
    fn titles_and_row_order() {
        let detail = describe(&absorption_signal(5_000.0, 1_000.0));
        assert_eq!(detail.title(), "Absorption Signal");
        let labels: Vec<&str> = detail.rows().iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            ["Time", "Volume", "Avg Volume", "Ratio", "Z-Score", "Price Change"]
        );
        assert_eq!(describe(&vwap_signal(1.0, "x")).title(), "VWAP Signal");
    }
}
