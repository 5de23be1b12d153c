//! Cross-filter tab: metric and scale pickers, the scatter, and the two
//! linked time series of the hovered location.

use chrono::NaiveDate;
use egui::Ui;

use super::chart_ui::draw_chart;
use super::panel_trait::Panel;
use crate::coordinator::Coordinator;
use crate::data::metric::MetricId;
use crate::data::selection::{Scale, SelectorUpdate};
use crate::events::{DashboardEvent, OutputId};

const COMBO_WIDTH: f32 = 260.0;
const DATE_POPUP_HEIGHT: f32 = 320.0;

#[derive(Default)]
pub struct CrossFilterPanel;

impl Panel for CrossFilterPanel {
    fn name(&self) -> &'static str {
        "Cross-filter"
    }

    fn icon(&self) -> Option<&'static str> {
        Some(egui_phosphor::regular::CHART_SCATTER)
    }

    fn render_panel(
        &mut self,
        ui: &mut Ui,
        coordinator: &Coordinator,
        events: &mut Vec<DashboardEvent>,
    ) {
        let sel = coordinator.selection();

        ui.columns(2, |cols| {
            if let Some(m) = metric_combo(&mut cols[0], "x_column", sel.x_column) {
                events.push(DashboardEvent::SelectorChanged(SelectorUpdate::XColumn(
                    m.to_string(),
                )));
            }
            if let Some(s) = scale_radio(&mut cols[0], sel.x_scale) {
                events.push(DashboardEvent::SelectorChanged(SelectorUpdate::XScale(s)));
            }
            if let Some(m) = metric_combo(&mut cols[1], "y_column", sel.y_column) {
                events.push(DashboardEvent::SelectorChanged(SelectorUpdate::YColumn(
                    m.to_string(),
                )));
            }
            if let Some(s) = scale_radio(&mut cols[1], sel.y_scale) {
                events.push(DashboardEvent::SelectorChanged(SelectorUpdate::YScale(s)));
            }
        });

        ui.horizontal(|ui| {
            ui.label("Date:");
            if let Some(d) = date_combo(ui, coordinator.dataset().dates(), sel.reference_date) {
                events.push(DashboardEvent::SelectorChanged(
                    SelectorUpdate::ReferenceDate(d),
                ));
            }
        });
        ui.separator();

        let hovered = sel.hovered_location.as_str();
        ui.columns(2, |cols| {
            let scatter = coordinator.output(OutputId::Scatter);
            if let Some(payload) = draw_chart(&mut cols[0], "crossfilter_scatter", scatter, Some(hovered)) {
                // Only report a change; the pointer resting on a point would
                // otherwise re-render the time series every frame.
                if payload.location() != Some(hovered) {
                    events.push(DashboardEvent::ScatterHovered(payload));
                }
            }
            draw_chart(
                &mut cols[1],
                "crossfilter_x_time_series",
                coordinator.output(OutputId::XTimeSeries),
                None,
            );
            draw_chart(
                &mut cols[1],
                "crossfilter_y_time_series",
                coordinator.output(OutputId::YTimeSeries),
                None,
            );
        });
    }
}

fn metric_combo(ui: &mut Ui, id_salt: &str, current: MetricId) -> Option<MetricId> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(current.as_str())
        .width(COMBO_WIDTH)
        .show_ui(ui, |ui| {
            for m in MetricId::ALL {
                if ui.selectable_label(m == current, m.as_str()).clicked() && m != current {
                    picked = Some(m);
                }
            }
        });
    picked
}

fn scale_radio(ui: &mut Ui, current: Scale) -> Option<Scale> {
    let mut picked = None;
    ui.horizontal(|ui| {
        for s in Scale::ALL {
            if ui.radio(current == s, s.label()).clicked() && s != current {
                picked = Some(s);
            }
        }
    });
    picked
}

fn date_combo(ui: &mut Ui, dates: &[NaiveDate], current: NaiveDate) -> Option<NaiveDate> {
    let mut picked = None;
    egui::ComboBox::from_id_salt("reference_date")
        .selected_text(current.to_string())
        .height(DATE_POPUP_HEIGHT)
        .show_ui(ui, |ui| {
            // Newest first, matching the default selection.
            for &d in dates.iter().rev() {
                if ui.selectable_label(d == current, d.to_string()).clicked() && d != current {
                    picked = Some(d);
                }
            }
        });
    picked
}
