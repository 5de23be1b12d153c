//! Renderers: pure functions from dataset + selections to [`ChartSpec`]s.
//!
//! [`ChartSpec`]: crate::chart::ChartSpec

pub mod overview;
pub mod scatter;
pub mod time_series;

pub use overview::{render_overview, ChartStyle};
pub use scatter::render_scatter;
pub use time_series::{render_time_series, time_series_title};
