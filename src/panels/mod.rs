pub mod chart_ui;
pub mod crossfilter_ui;
pub mod export_ui;
pub mod overview_ui;
pub mod panel_trait;

pub use chart_ui::draw_chart;
pub use crossfilter_ui::CrossFilterPanel;
pub use export_ui::render_export_menu;
pub use overview_ui::OverviewPanel;
pub use panel_trait::Panel;
