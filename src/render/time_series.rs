//! Per-location time series for the two linked detail panels.

use crate::chart::{Annotation, Axis, ChartKind, ChartSpec, Margins, Series, XValue};
use crate::color_scheme::PRIMARY;
use crate::data::dataset::Dataset;
use crate::data::metric::MetricId;
use crate::data::selection::Scale;

/// Panel height for the linked time series, in pixels.
pub const TIME_SERIES_HEIGHT: f32 = 225.0;

/// Annotation text: emphasized location name, then the metric on a new line.
pub fn time_series_title(location: &str, column: MetricId) -> String {
    format!("**{}**\n{}", location, column)
}

/// Line+markers chart of `column` for `location` over every date it reports.
///
/// One point per row of the location, including rows where the metric is
/// missing (`None`, drawn as a gap). An unknown location gives a chart with no
/// points.
pub fn render_time_series(
    dataset: &Dataset,
    location: &str,
    column: MetricId,
    scale: Scale,
    title: &str,
) -> ChartSpec {
    let mut rows = dataset.rows_by_location(location);
    // Source files are date-ordered per location; sort anyway so the x axis is
    // always ascending.
    rows.sort_by_key(|r| r.date);

    let mut series = Series::new(column.as_str(), PRIMARY);
    for row in rows {
        series.x.push(XValue::Date(row.date));
        series.y.push(row.value(column));
        series.labels.push(row.location.clone());
        series.custom_data.push(row.location.clone());
    }

    let mut x_axis = Axis::new(None, Scale::Linear);
    x_axis.show_grid = false;
    ChartSpec {
        kind: ChartKind::LineMarkers,
        traces: vec![series],
        x_axis,
        y_axis: Axis::new(None, scale),
        annotation: Some(Annotation::top_left(title)),
        margins: Some(Margins::COMPACT),
        height: Some(TIME_SERIES_HEIGHT),
    }
}
