use eframe::egui::{
    Align, Button, ComboBox, Key, Layout, RichText, ScrollArea, Sense, Slider, TextEdit, Ui,
};
use strum::IntoEnumIterator;

use crate::analysis::{FilterState, SignalView};
use crate::app::RequestForm;
use crate::domain::{Interval, Period, SignalId, SignalKind, Weight};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator};
use crate::utils::format::{format_optional_volume, format_signal_time};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// The request form plus the run control. Edits land in the form directly;
/// the only event is a run request.
pub struct ControlsPanel<'a> {
    form: &'a mut RequestForm,
    loading: bool,
    focus_ticker: bool,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(form: &'a mut RequestForm, loading: bool, focus_ticker: bool) -> Self {
        Self {
            form,
            loading,
            focus_ticker,
        }
    }

    /// Returns true when Enter was pressed in the ticker field.
    fn render_ticker_input(&mut self, ui: &mut Ui) -> bool {
        ui.label(colored_subsection_heading(UI_TEXT.ticker_label));
        let response = ui.add(
            TextEdit::singleline(&mut self.form.ticker_input)
                .hint_text(UI_TEXT.ticker_hint)
                .desired_width(f32::INFINITY),
        );
        if self.focus_ticker {
            response.request_focus();
        }
        response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
    }

    fn render_interval_selector(&mut self, ui: &mut Ui) {
        ui.label(colored_subsection_heading(UI_TEXT.interval_label));
        ComboBox::from_id_salt("interval")
            .selected_text(self.form.interval.to_string())
            .show_ui(ui, |ui| {
                for interval in Interval::iter() {
                    ui.selectable_value(&mut self.form.interval, interval, interval.to_string());
                }
            });
    }

    fn render_period_selector(&mut self, ui: &mut Ui) {
        ui.label(colored_subsection_heading(UI_TEXT.period_label));
        ComboBox::from_id_salt("period")
            .selected_text(self.form.period.to_string())
            .show_ui(ui, |ui| {
                for period in Period::iter() {
                    ui.selectable_value(&mut self.form.period, period, period.to_string());
                }
            });
    }

    fn render_weight_slider(&mut self, ui: &mut Ui) {
        ui.label(colored_subsection_heading(UI_TEXT.weight_label));
        let mut percent = self.form.weight.get();
        ui.add(Slider::new(&mut percent, 0..=Weight::MAX).suffix("%"));
        self.form.weight = Weight::new(percent);

        ui.label_subdued(format!(
            "{}{}{}",
            UI_TEXT.weight_helper_prefix,
            Weight::MAX - self.form.weight.get(),
            UI_TEXT.weight_helper_suffix
        ));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsEvent {
    Run,
}

impl<'a> Panel for ControlsPanel<'a> {
    type Event = ControlsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.controls_heading);

        let submitted = self.render_ticker_input(ui);
        ui.add_space(5.0);
        self.render_interval_selector(ui);
        ui.add_space(5.0);
        self.render_period_selector(ui);
        ui.add_space(5.0);
        self.render_weight_slider(ui);
        ui.add_space(10.0);

        let label = if self.loading {
            UI_TEXT.running_button
        } else {
            UI_TEXT.run_button
        };
        let clicked = ui
            .add_enabled(
                !self.loading,
                Button::new(label).min_size([ui.available_width(), 24.0].into()),
            )
            .clicked();

        // Enter is gated the same way as the button.
        if clicked || (submitted && !self.loading) {
            events.push(ControlsEvent::Run);
        }
        events
    }
}

/// The three-way category filter.
pub struct FilterPanel {
    selected: FilterState,
    absorption_count: usize,
    vwap_count: usize,
}

impl FilterPanel {
    pub fn new(selected: FilterState, view: Option<&SignalView>) -> Self {
        Self {
            selected,
            absorption_count: view.map_or(0, |v| v.count(SignalKind::Absorption)),
            vwap_count: view.map_or(0, |v| v.count(SignalKind::Vwap)),
        }
    }

    fn count_for(&self, filter: FilterState) -> usize {
        match filter {
            FilterState::All => self.absorption_count + self.vwap_count,
            FilterState::AbsorptionOnly => self.absorption_count,
            FilterState::VwapOnly => self.vwap_count,
        }
    }
}

impl Panel for FilterPanel {
    type Event = FilterState;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        spaced_separator(ui);
        section_heading(ui, UI_TEXT.filter_heading);

        let options: Vec<(FilterState, String)> = FilterState::iter()
            .map(|filter| (filter, format!("{} ({})", filter, self.count_for(filter))))
            .collect();
        let selected = &mut self.selected;

        ui.horizontal_wrapped(|ui| {
            for (filter, text) in options {
                if ui.selectable_value(selected, filter, text).clicked() {
                    events.push(filter);
                }
            }
        });

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions && !events.is_empty() {
            log::info!("Filter clicked: {:?}", events);
        }
        events
    }
}

/// The visible signal entries, most recent first.
pub struct SignalListPanel<'a> {
    view: &'a SignalView,
}

impl<'a> SignalListPanel<'a> {
    pub fn new(view: &'a SignalView) -> Self {
        Self { view }
    }
}

impl<'a> Panel for SignalListPanel<'a> {
    type Event = SignalId;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.signals_heading);

        if self.view.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label_subdued(UI_TEXT.no_signals);
                ui.add_space(10.0);
            });
            return events;
        }

        ScrollArea::vertical()
            .max_height(UI_CONFIG.signal_list_height)
            .id_salt("signal_list")
            .show(ui, |ui| {
                for (id, signal) in self.view.visible_signals() {
                    let clicked = ui
                        .group(|ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.signal_badge(signal.kind());
                                ui.label(RichText::new(format_signal_time(&signal.time)).strong());
                            });
                            ui.horizontal(|ui| {
                                ui.label_subdued(signal.kind().summary());
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    ui.label_subdued(format_optional_volume(signal.volume()));
                                });
                            });
                        })
                        .response
                        .interact(Sense::click())
                        .clicked();
                    if clicked {
                        events.push(id);
                    }
                    ui.add_space(3.0);
                }
            });
        events
    }
}
