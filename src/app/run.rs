//! Top-level entry point for running the dashboard as a native window.

use std::sync::Arc;

use eframe::egui;
use tracing::error;

use crate::config::DashboardConfig;
use crate::coordinator::Coordinator;
use crate::data::dataset::Dataset;

use super::DashboardApp;

/// Open the dashboard for `dataset` and block until the window is closed.
///
/// Fails before opening a window if `cfg.default_location` cannot seed the
/// selector state (the dataset has no dates).
pub fn run_dashboard(dataset: Arc<Dataset>, cfg: DashboardConfig) -> eframe::Result<()> {
    let coordinator = Coordinator::new(
        dataset,
        cfg.default_location.clone(),
        cfg.overview_location.clone(),
    )
    .map_err(|e| {
        error!(error = %e, "failed to initialise dashboard");
        eframe::Error::AppCreation(Box::new(e))
    })?;
    let app = DashboardApp::new(coordinator, cfg.color_scheme);

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(cfg.window_size[0], cfg.window_size[1]))
            .with_title(cfg.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &cfg.title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
