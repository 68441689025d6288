//! Merges the two raw signal lists into one chronological stream.

use crate::domain::{
    AbsorptionFields, NormalizedSignal, RawAbsorptionSignal, RawVwapSignal, SignalPayload,
    VwapFields,
};
use crate::utils::time_utils::timestamp_millis;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl From<&RawAbsorptionSignal> for NormalizedSignal {
    fn from(raw: &RawAbsorptionSignal) -> Self {
        Self {
            time: raw.time.clone(),
            timestamp_millis: timestamp_millis(&raw.time),
            index: raw.index,
            payload: SignalPayload::Absorption(AbsorptionFields {
                volume: raw.volume,
                avg_volume: raw.avg_volume,
                z_score: raw.z_score,
                price_change: raw.price_change,
            }),
        }
    }
}

impl From<&RawVwapSignal> for NormalizedSignal {
    fn from(raw: &RawVwapSignal) -> Self {
        Self {
            time: raw.time.clone(),
            timestamp_millis: timestamp_millis(&raw.time),
            index: raw.index,
            payload: SignalPayload::Vwap(VwapFields {
                volume: raw.volume.unwrap_or(0.0),
                close_price: raw.close_price,
                vwap: raw.vwap,
                deviation: raw.deviation,
                direction: raw.direction.clone(),
            }),
        }
    }
}

/// Builds the unified signal sequence, most recent first.
///
/// Ordering rule: descending `timestamp_millis` with a stable sort over the
/// concatenation `absorption ++ vwap`. Signals sharing a timestamp therefore
/// keep their input order, which puts absorption ahead of VWAP. Signals whose
/// time could not be parsed sort after every parsed one, in input order.
pub fn normalize(
    absorption: &[RawAbsorptionSignal],
    vwap: &[RawVwapSignal],
) -> Vec<NormalizedSignal> {
    let mut merged: Vec<NormalizedSignal> = absorption
        .iter()
        .map(NormalizedSignal::from)
        .chain(vwap.iter().map(NormalizedSignal::from))
        .collect();

    // `sort_by` is stable; `None < Some(_)` so unparsed times land last.
    merged.sort_by(|a, b| b.timestamp_millis.cmp(&a.timestamp_millis));

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_normalizer {
        let unparsed = merged
            .iter()
            .filter(|signal| signal.timestamp_millis.is_none())
            .count();
        log::info!(
            "Normalized {} absorption + {} VWAP signals ({} with unparseable time)",
            absorption.len(),
            vwap.len(),
            unparsed
        );
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SignalKind;

    fn absorption(index: i64, time: &str) -> RawAbsorptionSignal {
        RawAbsorptionSignal {
            index,
            time: time.to_string(),
            volume: 5000.0,
            avg_volume: 1000.0,
            z_score: 4.0,
            price_change: 0.001,
        }
    }

    fn vwap(index: i64, time: &str, volume: Option<f64>) -> RawVwapSignal {
        RawVwapSignal {
            index,
            time: time.to_string(),
            volume,
            close_price: 101.0,
            vwap: 100.5,
            deviation: 0.004,
            direction: "above_vwap".to_string(),
        }
    }

    fn is_non_increasing(signals: &[NormalizedSignal]) -> bool {
        signals
            .windows(2)
            .all(|pair| pair[0].timestamp_millis >= pair[1].timestamp_millis)
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(normalize(&[], &[]).is_empty());
    }

    #[test]
    fn single_absorption_signal() {
        let out = normalize(&[absorption(1, "2024-01-01T10:00:00Z")], &[]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind(), SignalKind::Absorption);
        assert_eq!(out[0].index, 1);
        assert_eq!(out[0].time, "2024-01-01T10:00:00Z");
    }

    #[test]
    fn output_is_complete_and_most_recent_first() {
        let abs = [
            absorption(2, "2024-01-02 10:00:00-05:00"),
            absorption(9, "2024-01-03 15:30:00-05:00"),
            absorption(4, "2024-01-02 11:15:00-05:00"),
        ];
        let vw = [
            vwap(3, "2024-01-02 10:40:00-05:00", Some(1200.0)),
            vwap(12, "2024-01-04 09:35:00-05:00", None),
        ];

        let out = normalize(&abs, &vw);

        assert_eq!(out.len(), abs.len() + vw.len());
        assert!(is_non_increasing(&out));
        let order: Vec<i64> = out.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![12, 9, 4, 3, 2]);
    }

    #[test]
    fn equal_timestamps_keep_absorption_before_vwap() {
        let time = "2024-01-01T10:00:00Z";
        let out = normalize(&[absorption(5, time)], &[vwap(5, time, Some(10.0))]);
        let kinds: Vec<SignalKind> = out.iter().map(NormalizedSignal::kind).collect();
        assert_eq!(kinds, vec![SignalKind::Absorption, SignalKind::Vwap]);

        // Same instant written with a different offset still ties.
        let out = normalize(
            &[absorption(5, "2024-01-01 05:00:00-05:00")],
            &[vwap(5, time, None)],
        );
        assert_eq!(out[0].kind(), SignalKind::Absorption);
        assert_eq!(out[1].kind(), SignalKind::Vwap);
    }

    #[test]
    fn missing_vwap_volume_becomes_zero() {
        let out = normalize(&[], &[vwap(0, "2024-01-01T10:00:00Z", None)]);
        assert_eq!(out[0].volume(), 0.0);
    }

    #[test]
    fn unparseable_times_sort_last_in_input_order() {
        let out = normalize(
            &[absorption(1, "garbled"), absorption(2, "2024-01-01T10:00:00Z")],
            &[vwap(3, "also garbled", None)],
        );
        let order: Vec<i64> = out.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![2, 1, 3]);
        assert!(out[1].timestamp_millis.is_none());
    }
}
