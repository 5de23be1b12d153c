//! owidplot crate root: re-exports and module wiring.
//!
//! An interactive COVID-19 dashboard over the Our World in Data dataset:
//! - `data`: CSV loading, the indexed [`Dataset`], metric ids and selector state
//! - `render`: pure chart builders (time series, cross-filter scatter, overview)
//! - `coordinator`: applies user events and re-renders the affected charts
//! - `panels` / `app`: the egui front end

pub mod app;
pub mod chart;
pub mod color_scheme;
pub mod config;
pub mod coordinator;
pub mod data;
pub mod error;
pub mod events;
pub mod panels;
pub mod render;

// Public re-exports for a compact external API
pub use app::{run_dashboard, DashboardApp};
pub use chart::{ChartKind, ChartSpec, Series, XValue};
pub use color_scheme::ColorScheme;
pub use config::DashboardConfig;
pub use coordinator::Coordinator;
pub use data::dataset::{Dataset, Row};
pub use data::metric::MetricId;
pub use data::selection::{Scale, SelectorState, SelectorUpdate};
pub use data::source::{CsvSource, DatasetSource};
pub use error::{Error, Result};
pub use events::{DashboardEvent, HoverPayload, HoverPoint, OutputId};
pub use render::{render_overview, render_scatter, render_time_series, ChartStyle};
