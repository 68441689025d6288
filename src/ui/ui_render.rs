use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Grid, Id, Margin, Modal, RichText, ScrollArea,
    SidePanel, TopBottomPanel, Ui,
};

use crate::analysis::{SignalDetail, StatSummary};
use crate::app::Intent;
use crate::domain::SignalKind;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::{UiStyleExt, kind_color};
use crate::ui::ui_panels::{ControlsEvent, ControlsPanel, FilterPanel, Panel, SignalListPanel};
use crate::ui::utils::{activity_color, spaced_separator};

use super::app::DashboardApp;

impl DashboardApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(8));
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let loading = self.state.is_loading();
                let focus = std::mem::take(&mut self.focus_ticker);
                let control_events =
                    ControlsPanel::new(&mut self.state.form, loading, focus).render(ui);

                let filter_events = FilterPanel::new(
                    self.state.filter(),
                    self.state.analysis().map(|analysis| &analysis.view),
                )
                .render(ui);

                for event in control_events {
                    match event {
                        ControlsEvent::Run => self.apply_intent(ctx, Intent::RunAnalysis),
                    }
                }
                for filter in filter_events {
                    self.apply_intent(ctx, Intent::SetFilter(filter));
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(10));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                let Some(analysis) = self.state.analysis() else {
                    if self.state.is_loading() {
                        render_placeholder(ui, UI_TEXT.loading_heading, UI_TEXT.loading_body, true);
                    } else {
                        render_placeholder(ui, UI_TEXT.welcome_heading, UI_TEXT.welcome_body, false);
                    }
                    return;
                };

                let mut selected = Vec::new();
                ScrollArea::vertical().id_salt("dashboard").show(ui, |ui| {
                    render_stats_strip(ui, &analysis.summary);
                    spaced_separator(ui);
                    self.plot_view.show_charts(ui, analysis);
                    spaced_separator(ui);
                    selected = SignalListPanel::new(&analysis.view).render(ui);
                });

                for id in selected {
                    self.apply_intent(ctx, Intent::SelectSignal(id));
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.metric(
                        UI_TEXT.status_source,
                        self.backend.signature(),
                        Color32::from_rgb(100, 200, 255),
                    );
                    ui.separator();

                    if self.state.is_loading() {
                        ui.spinner();
                        ui.label_warning(UI_TEXT.status_loading);
                    } else {
                        ui.label_subdued(UI_TEXT.status_idle);
                    }

                    if let Some(analysis) = self.state.analysis() {
                        ui.separator();
                        ui.label_subdued(format!(
                            "{}  {}  ({} bars)",
                            analysis.summary.ticker,
                            analysis.summary.subtitle,
                            analysis.summary.bar_count
                        ));
                        ui.separator();
                        ui.label_subdued(format!(
                            "{} of {} signals shown",
                            analysis.view.visible_len(),
                            analysis.view.all().len()
                        ));
                    }
                });
            });
    }

    pub(super) fn render_detail_modal(&mut self, ctx: &Context) {
        let Some(detail) = self.state.selected_detail() else {
            return;
        };

        let mut close_clicked = false;
        let response = Modal::new(Id::new("signal_detail")).show(ctx, |ui| {
            ui.set_width(UI_CONFIG.detail_width);
            render_detail(ui, &detail);
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui.button(UI_TEXT.detail_close).clicked() {
                    close_clicked = true;
                }
            });
        });

        // Click outside or Escape also closes.
        if close_clicked || response.should_close() {
            self.apply_intent(ctx, Intent::CloseDetail);
        }
    }

    pub(super) fn render_notification_modal(&mut self, ctx: &Context) {
        let Some(message) = self.state.notification().map(str::to_owned) else {
            return;
        };

        let mut dismissed = false;
        let response = Modal::new(Id::new("analysis_error")).show(ctx, |ui| {
            ui.set_width(UI_CONFIG.detail_width);
            ui.label_subheader(UI_TEXT.notification_title);
            ui.add_space(6.0);
            ui.label_error(message);
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui.button(UI_TEXT.notification_dismiss).clicked() {
                    dismissed = true;
                }
            });
        });

        if dismissed || response.should_close() {
            self.apply_intent(ctx, Intent::DismissNotification);
        }
    }
}

fn render_placeholder(ui: &mut Ui, heading: &str, body: &str, spinner: bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        if spinner {
            ui.spinner();
            ui.add_space(12.0);
        }
        ui.heading(heading);
        ui.add_space(6.0);
        ui.label(RichText::new(body).color(Color32::from_gray(190)));
    });
}

fn render_stats_strip(ui: &mut Ui, summary: &StatSummary) {
    ui.horizontal_wrapped(|ui| {
        ui.label(
            RichText::new(summary.ticker.as_str())
                .heading()
                .color(UI_CONFIG.colors.heading),
        );
        ui.separator();
        ui.metric(
            UI_TEXT.stat_score,
            &summary.score_text(),
            activity_color(summary.activity),
        );
        ui.metric(
            UI_TEXT.stat_activity,
            &summary.activity.to_string(),
            activity_color(summary.activity),
        );
        ui.separator();
        ui.metric(
            UI_TEXT.stat_absorption,
            &summary.reported_absorption.to_string(),
            kind_color(SignalKind::Absorption),
        );
        ui.metric(
            UI_TEXT.stat_vwap,
            &summary.reported_vwap.to_string(),
            kind_color(SignalKind::Vwap),
        );
        ui.separator();
        ui.metric(UI_TEXT.stat_high, &summary.high_text(), Color32::LIGHT_GRAY);
        ui.metric(UI_TEXT.stat_low, &summary.low_text(), Color32::LIGHT_GRAY);
    });

    if summary.count_mismatch() {
        ui.label_warning(format!(
            "{} ({} absorption, {} VWAP received)",
            UI_TEXT.count_mismatch_note, summary.absorption_signals, summary.vwap_signals
        ));
    }
}

fn render_detail(ui: &mut Ui, detail: &SignalDetail) {
    let color = kind_color(detail.kind());
    ui.label(RichText::new(detail.title()).heading().color(color));
    ui.add_space(8.0);

    Grid::new("detail_rows")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for row in detail.rows() {
                ui.label_subdued(row.label);
                ui.label(RichText::new(row.value).monospace());
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    ui.label(RichText::new(detail.note()).italics().color(Color32::from_gray(190)));
}
