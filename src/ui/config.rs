use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub activity_high: Color32,
    pub activity_moderate: Color32,
    pub activity_low: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
    pub signal_list_height: f32,
    pub detail_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(0, 188, 212),
        subsection_heading: Color32::from_rgb(255, 152, 0),
        central_panel: Color32::from_rgb(18, 20, 26),
        side_panel: Color32::from_rgb(25, 25, 25),
        activity_high: Color32::from_rgb(239, 83, 80),
        activity_moderate: Color32::from_rgb(255, 193, 7),
        activity_low: Color32::from_rgb(102, 187, 106),
    },
    side_panel_width: 220.0,
    signal_list_height: 260.0,
    detail_width: 360.0,
};
