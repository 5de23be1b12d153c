use egui::Ui;

use super::chart_ui::draw_chart;
use super::panel_trait::Panel;
use crate::coordinator::Coordinator;
use crate::events::{DashboardEvent, OutputId};
use crate::render::ChartStyle;

/// Country overview tab: daily new cases of one location as bars or a line.
#[derive(Default)]
pub struct OverviewPanel;

impl Panel for OverviewPanel {
    fn name(&self) -> &'static str {
        "Country overview"
    }

    fn icon(&self) -> Option<&'static str> {
        Some(egui_phosphor::regular::CHART_LINE)
    }

    fn render_panel(
        &mut self,
        ui: &mut Ui,
        coordinator: &Coordinator,
        events: &mut Vec<DashboardEvent>,
    ) {
        let overview = coordinator.overview();
        ui.horizontal(|ui| {
            ui.label("Country:");
            egui::ComboBox::from_id_salt("overview_country")
                .selected_text(overview.location.as_str())
                .width(220.0)
                .height(320.0)
                .show_ui(ui, |ui| {
                    for loc in coordinator.dataset().locations() {
                        if ui.selectable_label(*loc == overview.location, loc).clicked()
                            && *loc != overview.location
                        {
                            events.push(DashboardEvent::OverviewCountry(loc.clone()));
                        }
                    }
                });

            ui.separator();
            for style in ChartStyle::ALL {
                if ui.radio(overview.style == style, style.label()).clicked()
                    && style != overview.style
                {
                    events.push(DashboardEvent::OverviewStyle(style));
                }
            }
        });
        ui.separator();

        draw_chart(ui, "overview_chart", coordinator.output(OutputId::Overview), None);
    }
}
