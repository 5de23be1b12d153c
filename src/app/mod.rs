//! Native dashboard window.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`run`]    | [`run_dashboard()`] entry point, fonts and viewport setup |
//!
//! [`DashboardApp`] owns the [`Coordinator`] and the tab panels. Each frame the
//! active panel is drawn from the coordinator's current charts and the events
//! it produced are applied afterwards, so a change shows up on the next frame.

mod run;

pub use run::run_dashboard;

use eframe::egui;
use tracing::warn;

use crate::color_scheme::ColorScheme;
use crate::coordinator::Coordinator;
use crate::events::DashboardEvent;
use crate::panels::{render_export_menu, CrossFilterPanel, OverviewPanel, Panel};

pub struct DashboardApp {
    pub coordinator: Coordinator,
    panels: Vec<Box<dyn Panel>>,
    active: usize,
    pub color_scheme: ColorScheme,
    /// Only apply the color scheme once, on the first frame.
    color_scheme_applied: bool,
}

impl DashboardApp {
    pub fn new(coordinator: Coordinator, color_scheme: ColorScheme) -> Self {
        Self {
            coordinator,
            panels: vec![
                Box::new(CrossFilterPanel),
                Box::new(OverviewPanel),
            ],
            active: 0,
            color_scheme,
            color_scheme_applied: false,
        }
    }

    /// Apply queued events in order. Rejected ones are logged and skipped.
    pub fn dispatch(&mut self, events: Vec<DashboardEvent>) {
        for event in events {
            if let Err(e) = self.coordinator.handle(event) {
                warn!(error = %e, "event rejected");
            }
        }
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                render_export_menu(ui, &self.coordinator);
            });
            ui.menu_button("Theme", |ui| {
                for scheme in ColorScheme::all() {
                    if ui
                        .selectable_label(self.color_scheme == *scheme, scheme.label())
                        .clicked()
                    {
                        self.color_scheme = *scheme;
                        scheme.apply(ui.ctx());
                        ui.close();
                    }
                }
            });
            ui.separator();
            for (i, panel) in self.panels.iter().enumerate() {
                if ui
                    .selectable_label(self.active == i, panel.title_and_icon())
                    .clicked()
                {
                    self.active = i;
                }
            }
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        egui::TopBottomPanel::top("dashboard_menu").show(ctx, |ui| {
            self.render_menu(ui);
        });

        let mut events = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(panel) = self.panels.get_mut(self.active) {
                panel.render_panel(ui, &self.coordinator, &mut events);
            }
        });

        if !events.is_empty() {
            self.dispatch(events);
            ctx.request_repaint();
        }
    }
}
