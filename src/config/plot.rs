//! Chart visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Markers and volume bars on bars referenced by an absorption signal
    pub absorption_color: Color32,
    /// Markers and volume bars on bars referenced by a VWAP signal
    pub vwap_color: Color32,
    /// Volume bars with no signal
    pub normal_volume_color: Color32,
    /// Price line stroke
    pub price_line_color: Color32,
    pub price_line_width: f32,
    /// Marker radius on signal bars (neutral bars get zero)
    pub signal_marker_radius: f32,
    /// Ring drawn around the hovered bar
    pub hover_marker_radius: f32,
    pub hover_marker_color: Color32,
    /// Fraction of the bar slot a volume bar fills
    pub volume_bar_width: f64,
    /// Height of each chart in points
    pub price_chart_height: f32,
    pub volume_chart_height: f32,
    /// Upper bound on x-axis labels per chart
    pub max_axis_labels: usize,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    absorption_color: Color32::from_rgb(0, 188, 212), // Cyan
    vwap_color: Color32::from_rgb(171, 71, 188),      // Purple
    normal_volume_color: Color32::from_rgb(255, 152, 0), // Orange
    price_line_color: Color32::from_rgb(255, 152, 0),
    price_line_width: 2.0,
    signal_marker_radius: 5.0,
    hover_marker_radius: 7.0,
    hover_marker_color: Color32::WHITE,
    volume_bar_width: 0.8,
    price_chart_height: 300.0,
    volume_chart_height: 160.0,
    max_axis_labels: 10,
};
