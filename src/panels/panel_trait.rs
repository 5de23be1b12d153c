use egui::Ui;

use crate::coordinator::Coordinator;
use crate::events::DashboardEvent;

/// A tab of the dashboard.
///
/// Panels only read from the [`Coordinator`]; anything the user changes is
/// pushed to `events` and applied by the app after the frame is drawn.
pub trait Panel {
    fn name(&self) -> &'static str;

    fn icon(&self) -> Option<&'static str> {
        None
    }

    fn title_and_icon(&self) -> String {
        match self.icon() {
            Some(icon) => format!("{icon} {}", self.name()),
            None => self.name().to_string(),
        }
    }

    fn render_panel(
        &mut self,
        ui: &mut Ui,
        coordinator: &Coordinator,
        events: &mut Vec<DashboardEvent>,
    );
}
