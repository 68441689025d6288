//! Per-bar chart metadata derived from signal indices.

use eframe::egui::Color32;
use std::collections::HashSet;

use crate::config::PLOT_CONFIG;
use crate::domain::AnalysisResult;
use crate::utils::{format_price, format_volume};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Which signal lists reference a bar. Both can be true at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Membership {
    pub absorption: bool,
    pub vwap: bool,
}

/// Visual category of a bar. Absorption takes precedence for coloring when
/// a bar is in both lists; the tooltip still names both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarClass {
    Absorption,
    Vwap,
    Neutral,
}

impl Membership {
    pub fn class(self) -> BarClass {
        if self.absorption {
            BarClass::Absorption
        } else if self.vwap {
            BarClass::Vwap
        } else {
            BarClass::Neutral
        }
    }
}

/// Marker drawn on the price line at one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub color: Color32,
    pub radius: f32,
}

impl PointStyle {
    pub fn is_visible(&self) -> bool {
        self.radius > 0.0
    }
}

impl BarClass {
    pub fn point_style(self) -> PointStyle {
        match self {
            BarClass::Absorption => PointStyle {
                color: PLOT_CONFIG.absorption_color,
                radius: PLOT_CONFIG.signal_marker_radius,
            },
            BarClass::Vwap => PointStyle {
                color: PLOT_CONFIG.vwap_color,
                radius: PLOT_CONFIG.signal_marker_radius,
            },
            BarClass::Neutral => PointStyle {
                color: Color32::TRANSPARENT,
                radius: 0.0,
            },
        }
    }

    pub fn volume_color(self) -> Color32 {
        match self {
            BarClass::Absorption => PLOT_CONFIG.absorption_color,
            BarClass::Vwap => PLOT_CONFIG.vwap_color,
            BarClass::Neutral => PLOT_CONFIG.normal_volume_color,
        }
    }
}

/// Overlay descriptors for the price line and the volume bars, one entry per
/// bar index. Rebuilt in full whenever a new analysis arrives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartOverlay {
    memberships: Vec<Membership>,
    price_points: Vec<PointStyle>,
    volume_colors: Vec<Color32>,
}

/// Classifies every index in `0..bar_count`. Indices in the sets that fall
/// outside that range are ignored.
pub fn build_overlay(
    bar_count: usize,
    absorption: &HashSet<usize>,
    vwap: &HashSet<usize>,
) -> ChartOverlay {
    let memberships: Vec<Membership> = (0..bar_count)
        .map(|index| Membership {
            absorption: absorption.contains(&index),
            vwap: vwap.contains(&index),
        })
        .collect();

    let price_points = memberships
        .iter()
        .map(|membership| membership.class().point_style())
        .collect();
    let volume_colors = memberships
        .iter()
        .map(|membership| membership.class().volume_color())
        .collect();

    ChartOverlay {
        memberships,
        price_points,
        volume_colors,
    }
}

impl ChartOverlay {
    /// Builds the overlay straight from a payload. Negative indices are
    /// dropped here; indices past the last bar are dropped by `build_overlay`.
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        let bar_count = result.bar_count();
        let absorption = collect_indices(result.absorption_signals.iter().map(|s| s.index));
        let vwap = collect_indices(result.vwap_signals.iter().map(|s| s.index));

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_overlay {
            let dropped = result
                .absorption_signals
                .iter()
                .map(|s| s.index)
                .chain(result.vwap_signals.iter().map(|s| s.index))
                .filter(|&index| index < 0 || index as usize >= bar_count)
                .count();
            if dropped > 0 {
                log::info!("Overlay ignored {} out-of-range signal indices", dropped);
            }
        }

        build_overlay(bar_count, &absorption, &vwap)
    }

    pub fn len(&self) -> usize {
        self.memberships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memberships.is_empty()
    }

    pub fn membership(&self, index: usize) -> Option<Membership> {
        self.memberships.get(index).copied()
    }

    pub fn classification(&self, index: usize) -> Option<BarClass> {
        self.membership(index).map(Membership::class)
    }

    pub fn price_point(&self, index: usize) -> Option<PointStyle> {
        self.price_points.get(index).copied()
    }

    pub fn volume_color(&self, index: usize) -> Option<Color32> {
        self.volume_colors.get(index).copied()
    }

    /// Bars that carry a visible price marker, with their style.
    pub fn marked_points(&self) -> impl Iterator<Item = (usize, PointStyle)> + '_ {
        self.price_points
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, style)| style.is_visible())
    }

    /// Tooltip line for the price chart, e.g. `Price: $10.50  •  Absorption Signal`.
    pub fn price_tooltip(&self, index: usize, price: f64) -> String {
        self.annotate(index, format!("Price: {}", format_price(price)))
    }

    /// Tooltip line for the volume chart, e.g. `Volume: 5K  •  VWAP Signal`.
    pub fn volume_tooltip(&self, index: usize, volume: f64) -> String {
        self.annotate(index, format!("Volume: {}", format_volume(volume)))
    }

    // Appends one segment per category the bar belongs to.
    fn annotate(&self, index: usize, mut label: String) -> String {
        let membership = self.membership(index).unwrap_or_default();
        if membership.absorption {
            label.push_str("  •  Absorption Signal");
        }
        if membership.vwap {
            label.push_str("  •  VWAP Signal");
        }
        label
    }
}

fn collect_indices(indices: impl Iterator<Item = i64>) -> HashSet<usize> {
    indices
        .filter_map(|index| usize::try_from(index).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawAbsorptionSignal, RawVwapSignal};

    fn set(indices: &[usize]) -> HashSet<usize> {
        indices.iter().copied().collect()
    }

    fn result_with(abs_indices: &[i64], vwap_indices: &[i64], bars: usize) -> AnalysisResult {
        AnalysisResult {
            prices: vec![10.0; bars],
            volumes: vec![1_000.0; bars],
            times: vec!["2024-01-01T10:00:00Z".to_string(); bars],
            absorption_signals: abs_indices
                .iter()
                .map(|&index| RawAbsorptionSignal {
                    index,
                    time: "2024-01-01T10:00:00Z".to_string(),
                    volume: 5_000.0,
                    avg_volume: 1_000.0,
                    z_score: 4.0,
                    price_change: 0.001,
                })
                .collect(),
            vwap_signals: vwap_indices
                .iter()
                .map(|&index| RawVwapSignal {
                    index,
                    time: "2024-01-01T10:00:00Z".to_string(),
                    volume: None,
                    close_price: 10.0,
                    vwap: 10.1,
                    deviation: -0.01,
                    direction: "below_vwap".to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn referenced_indices_are_classified_and_others_are_neutral() {
        let absorption = set(&[1, 4]);
        let vwap = set(&[2, 4, 6]);
        let overlay = build_overlay(8, &absorption, &vwap);

        assert_eq!(overlay.len(), 8);
        for index in 0..8 {
            let class = overlay.classification(index).unwrap();
            let referenced = absorption.contains(&index) || vwap.contains(&index);
            assert_eq!(class != BarClass::Neutral, referenced, "index {index}");
        }
        assert_eq!(overlay.classification(4), Some(BarClass::Absorption));
        assert_eq!(overlay.classification(6), Some(BarClass::Vwap));
    }

    #[test]
    fn neutral_bars_have_invisible_markers_but_visible_volume() {
        let overlay = build_overlay(3, &set(&[1]), &set(&[]));

        let neutral = overlay.price_point(0).unwrap();
        assert_eq!(neutral.radius, 0.0);
        assert_eq!(neutral.color, Color32::TRANSPARENT);
        assert_eq!(
            overlay.volume_color(0),
            Some(PLOT_CONFIG.normal_volume_color)
        );

        let marked = overlay.price_point(1).unwrap();
        assert!(marked.radius > 0.0);
        assert_eq!(marked.color, PLOT_CONFIG.absorption_color);
        assert_eq!(overlay.volume_color(1), Some(PLOT_CONFIG.absorption_color));

        let marked: Vec<usize> = overlay.marked_points().map(|(i, _)| i).collect();
        assert_eq!(marked, vec![1]);
    }

    #[test]
    fn tooltip_names_every_matching_category() {
        let overlay = build_overlay(3, &set(&[1]), &set(&[1, 2]));

        assert_eq!(
            overlay.price_tooltip(1, 10.5),
            "Price: $10.50  •  Absorption Signal  •  VWAP Signal"
        );
        assert_eq!(overlay.volume_tooltip(2, 5_000.0), "Volume: 5K  •  VWAP Signal");
        assert_eq!(overlay.price_tooltip(0, 10.0), "Price: $10.00");
    }

    #[test]
    fn out_of_range_indices_get_no_overlay() {
        let result = result_with(&[1, 7, -2], &[], 3);
        let overlay = ChartOverlay::from_analysis(&result);

        assert_eq!(overlay.len(), 3);
        assert_eq!(overlay.classification(1), Some(BarClass::Absorption));
        assert_eq!(overlay.classification(7), None);
        assert_eq!(overlay.marked_points().count(), 1);
        // Tooltips past the end degrade to the bare value.
        assert_eq!(overlay.volume_tooltip(7, 10.0), "Volume: 10");
    }

    #[test]
    fn empty_analysis_gives_empty_overlay() {
        let overlay = ChartOverlay::from_analysis(&AnalysisResult::default());
        assert!(overlay.is_empty());
    }

    #[test]
    fn scenario_price_series_marks_signal_bar() {
        let mut result = result_with(&[1], &[], 3);
        result.prices = vec![10.0, 10.5, 11.0];
        let overlay = ChartOverlay::from_analysis(&result);
        let classes: Vec<BarClass> = (0..3).filter_map(|i| overlay.classification(i)).collect();
        assert_eq!(
            classes,
            vec![BarClass::Neutral, BarClass::Absorption, BarClass::Neutral]
        );
    }
}
