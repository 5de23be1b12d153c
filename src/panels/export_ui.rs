use egui::Ui;
use tracing::{error, info};

use crate::coordinator::Coordinator;
use crate::data::export;

pub const EXPORT_MENU_LABEL: &str = "Export";
pub const EXPORT_JSON_LABEL: &str = "Charts as JSON…";

/// File menu entry that writes every displayed chart to a JSON file.
pub fn render_export_menu(ui: &mut Ui, coordinator: &Coordinator) {
    let label = format!("{} {}", egui_phosphor::regular::EXPORT, EXPORT_MENU_LABEL);
    ui.menu_button(label, |ui| {
        if ui
            .button(EXPORT_JSON_LABEL)
            .on_hover_text("Save the scatter, time series and overview charts")
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new()
                .set_file_name("charts.json")
                .add_filter("JSON", &["json"])
                .save_file()
            {
                match export::save_charts_json(&path, coordinator.outputs()) {
                    Ok(()) => info!(path = %path.display(), "charts exported"),
                    Err(e) => error!(error = %e, "failed to export charts"),
                }
            }
            ui.close();
        }
    });
}
