use std::hash::{Hash, Hasher};
use std::sync::Arc;

use eframe::egui;
use egui_plot::{AxisHints, Corner, GridInput, GridMark, HPlacement, Legend, Plot, PlotUi};

use crate::app::LoadedAnalysis;
use crate::config::PLOT_CONFIG;
use crate::domain::{AnalysisResult, Period};
use crate::ui::plot_layers::{
    LayerContext, PlotLayer, PriceHoverLayer, PriceLineLayer, SignalMarkerLayer, VolumeBarLayer,
    VolumeHoverLayer, hovered_bar,
};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::colored_subsection_heading;
use crate::utils::format::format_axis_label;
use crate::utils::{format_price, format_volume};

/// X-axis labels for one analysis, keyed by a hash of its timestamps.
#[derive(Clone)]
struct AxisLabelCache {
    key: u64,
    labels: Arc<Vec<String>>,
}

/// Draws the price and volume charts for the loaded analysis.
#[derive(Default)]
pub struct PlotView {
    cache: Option<AxisLabelCache>,
}

impl PlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn show_charts(&mut self, ui: &mut egui::Ui, analysis: &LoadedAnalysis) {
        let result = &analysis.result;
        let bar_count = result.bar_count();
        if bar_count == 0 {
            ui.label_subdued(UI_TEXT.no_bars);
            return;
        }

        let labels = self.axis_labels(result, analysis.request.period);
        let subtitle = &analysis.summary.subtitle;

        ui.label(colored_subsection_heading(format!(
            "{}  {}",
            UI_TEXT.price_chart_title, subtitle
        )));
        let (low, high) = price_range(analysis.summary.low, analysis.summary.high);
        Plot::new("price_chart")
            .height(PLOT_CONFIG.price_chart_height)
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![create_x_axis(Arc::clone(&labels))])
            .custom_y_axes(vec![
                AxisHints::new_y()
                    .formatter(|grid_mark, _range| format_price(grid_mark.value))
                    .placement(HPlacement::Left),
            ])
            .x_grid_spacer(index_spacer(bar_count))
            .label_formatter(|_, _| String::new())
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(-0.5..=(bar_count as f64 - 0.5));
                plot_ui.set_plot_bounds_y(low..=high);

                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(PriceLineLayer),
                    Box::new(SignalMarkerLayer),
                    Box::new(PriceHoverLayer),
                ];
                render_layers(plot_ui, analysis, bar_count, &layers);
            });

        ui.add_space(10.0);
        ui.label(colored_subsection_heading(format!(
            "{}  {}",
            UI_TEXT.volume_chart_title, subtitle
        )));
        let peak_volume = result
            .volumes
            .iter()
            .take(bar_count)
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        Plot::new("volume_chart")
            .height(PLOT_CONFIG.volume_chart_height)
            .custom_x_axes(vec![create_x_axis(labels)])
            .custom_y_axes(vec![
                AxisHints::new_y()
                    .formatter(|grid_mark, _range| format_volume(grid_mark.value))
                    .placement(HPlacement::Left),
            ])
            .x_grid_spacer(index_spacer(bar_count))
            .label_formatter(|_, _| String::new())
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(-0.5..=(bar_count as f64 - 0.5));
                let top = if peak_volume > 0.0 {
                    peak_volume * 1.1
                } else {
                    1.0
                };
                plot_ui.set_plot_bounds_y(0.0..=top);

                let layers: Vec<Box<dyn PlotLayer>> =
                    vec![Box::new(VolumeBarLayer), Box::new(VolumeHoverLayer)];
                render_layers(plot_ui, analysis, bar_count, &layers);
            });
    }

    fn axis_labels(&mut self, result: &AnalysisResult, period: Period) -> Arc<Vec<String>> {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        result.times.hash(&mut hasher);
        period.hash(&mut hasher);
        let key = hasher.finish();

        if let Some(cache) = &self.cache {
            if cache.key == key {
                return Arc::clone(&cache.labels);
            }
        }

        let labels = Arc::new(
            result
                .times
                .iter()
                .map(|raw| format_axis_label(raw, period))
                .collect::<Vec<_>>(),
        );
        self.cache = Some(AxisLabelCache {
            key,
            labels: Arc::clone(&labels),
        });
        labels
    }
}

fn render_layers(
    plot_ui: &mut PlotUi,
    analysis: &LoadedAnalysis,
    bar_count: usize,
    layers: &[Box<dyn PlotLayer>],
) {
    let ctx = LayerContext {
        result: &analysis.result,
        overlay: &analysis.overlay,
        bar_count,
        hovered: hovered_bar(plot_ui, bar_count),
    };
    for layer in layers {
        layer.render(plot_ui, &ctx);
    }
}

// Pads the close range so markers at the extremes stay inside the frame.
fn price_range(low: Option<f64>, high: Option<f64>) -> (f64, f64) {
    match (low, high) {
        (Some(low), Some(high)) if high > low => {
            let pad = (high - low) * 0.05;
            (low - pad, high + pad)
        }
        (Some(low), _) => (low - 1.0, low + 1.0),
        _ => (0.0, 1.0),
    }
}

/// Grid marks on whole bar indices, at most `max_axis_labels` of them.
fn index_spacer(bar_count: usize) -> impl Fn(GridInput) -> Vec<GridMark> {
    let step = (bar_count as f64 / PLOT_CONFIG.max_axis_labels as f64)
        .ceil()
        .max(1.0);
    move |_input| {
        let mut marks = Vec::new();
        let mut value = 0.0;
        while value < bar_count as f64 {
            marks.push(GridMark {
                value,
                step_size: step,
            });
            value += step;
        }
        marks
    }
}

fn create_x_axis(labels: Arc<Vec<String>>) -> AxisHints<'static> {
    AxisHints::new_x().formatter(move |grid_mark, _range| {
        let index = grid_mark.value.round();
        if index < 0.0 {
            return String::new();
        }
        labels.get(index as usize).cloned().unwrap_or_default()
    })
}
