use eframe::egui::{Id, LayerId, Order::Tooltip, RichText, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{Bar, BarChart, Line, MarkerShape, PlotPoints, PlotUi, Points};

use crate::analysis::{BarClass, ChartOverlay};
use crate::config::PLOT_CONFIG;
use crate::domain::AnalysisResult;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::format::format_signal_time;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub result: &'a AnalysisResult,
    pub overlay: &'a ChartOverlay,
    /// Bars drawn; never more than the shortest of the three series.
    pub bar_count: usize,
    pub hovered: Option<usize>,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// PRICE CHART
// ============================================================================
pub struct PriceLineLayer;

impl PlotLayer for PriceLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let points: PlotPoints = ctx
            .result
            .prices
            .iter()
            .take(ctx.bar_count)
            .enumerate()
            .map(|(i, price)| [i as f64, *price])
            .collect();

        plot_ui.line(
            Line::new(UI_TEXT.legend_price, points)
                .color(PLOT_CONFIG.price_line_color)
                .width(PLOT_CONFIG.price_line_width),
        );
    }
}

/// Markers on bars referenced by a signal; one series per category so the
/// legend names both.
pub struct SignalMarkerLayer;

impl PlotLayer for SignalMarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for (class, name) in [
            (BarClass::Absorption, UI_TEXT.legend_absorption),
            (BarClass::Vwap, UI_TEXT.legend_vwap),
        ] {
            let style = class.point_style();
            let points: PlotPoints = ctx
                .overlay
                .marked_points()
                .filter(|(i, _)| ctx.overlay.classification(*i) == Some(class))
                .filter_map(|(i, _)| ctx.result.prices.get(i).map(|price| [i as f64, *price]))
                .collect();

            plot_ui.points(
                Points::new(name, points)
                    .color(style.color)
                    .radius(style.radius)
                    .shape(MarkerShape::Circle)
                    .filled(true),
            );
        }
    }
}

pub struct PriceHoverLayer;

impl PlotLayer for PriceHoverLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(index) = ctx.hovered else {
            return;
        };
        let Some(price) = ctx.result.prices.get(index).copied() else {
            return;
        };

        plot_ui.points(
            Points::new("", PlotPoints::new(vec![[index as f64, price]]))
                .color(PLOT_CONFIG.hover_marker_color)
                .radius(PLOT_CONFIG.hover_marker_radius)
                .shape(MarkerShape::Circle)
                .filled(false),
        );

        show_bar_tooltip(
            plot_ui,
            "price_tooltip",
            ctx.result.time_at(index),
            ctx.overlay.price_tooltip(index, price),
        );
    }
}

// ============================================================================
// VOLUME CHART
// ============================================================================
pub struct VolumeBarLayer;

impl PlotLayer for VolumeBarLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let bars: Vec<Bar> = ctx
            .result
            .volumes
            .iter()
            .take(ctx.bar_count)
            .enumerate()
            .map(|(i, volume)| {
                let color = ctx
                    .overlay
                    .volume_color(i)
                    .unwrap_or(PLOT_CONFIG.normal_volume_color);
                Bar::new(i as f64, *volume)
                    .width(PLOT_CONFIG.volume_bar_width)
                    .fill(color)
            })
            .collect();

        plot_ui.bar_chart(BarChart::new(UI_TEXT.legend_volume, bars));
    }
}

pub struct VolumeHoverLayer;

impl PlotLayer for VolumeHoverLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(index) = ctx.hovered else {
            return;
        };
        let Some(volume) = ctx.result.volumes.get(index).copied() else {
            return;
        };

        show_bar_tooltip(
            plot_ui,
            "volume_tooltip",
            ctx.result.time_at(index),
            ctx.overlay.volume_tooltip(index, volume),
        );
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// The bar under the pointer, if the pointer is inside the plot area.
pub fn hovered_bar(plot_ui: &PlotUi, bar_count: usize) -> Option<usize> {
    let pointer = plot_ui.pointer_coordinate()?;
    let bounds = plot_ui.plot_bounds();
    let (min, max) = (bounds.min(), bounds.max());
    if pointer.x < min[0] || pointer.x > max[0] || pointer.y < min[1] || pointer.y > max[1] {
        return None;
    }

    let index = pointer.x.round();
    if index < 0.0 || index >= bar_count as f64 {
        return None;
    }
    Some(index as usize)
}

fn show_bar_tooltip(plot_ui: &PlotUi, salt: &str, time: Option<&str>, line: String) {
    let tooltip_layer = LayerId::new(Tooltip, Id::new("bar_tooltips"));

    #[allow(deprecated)]
    show_tooltip_at_pointer(
        plot_ui.ctx(),
        tooltip_layer,
        Id::new(salt),
        |ui: &mut Ui| {
            if let Some(time) = time {
                ui.label(RichText::new(format_signal_time(time)).strong());
                ui.separator();
            }
            ui.label(line);
        },
    );
}
