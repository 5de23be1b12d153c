//! Cross-filter scatter: one point per location on the reference date.

use chrono::NaiveDate;

use crate::chart::{Axis, ChartKind, ChartSpec, Series, XValue};
use crate::color_scheme::{location_color, PRIMARY};
use crate::data::dataset::Dataset;
use crate::data::metric::MetricId;
use crate::data::selection::Scale;

/// Scatter of `x_column` against `y_column` for every location reporting on
/// `reference_date`.
///
/// Each location becomes its own series so it gets a legend entry and a
/// stable color. Rows missing either metric are left out. Every point carries
/// the location name as both its label and its hover identity.
pub fn render_scatter(
    dataset: &Dataset,
    x_column: MetricId,
    y_column: MetricId,
    x_scale: Scale,
    y_scale: Scale,
    reference_date: NaiveDate,
) -> ChartSpec {
    let mut traces: Vec<Series> = Vec::new();
    for row in dataset.rows_by_date(reference_date) {
        let (Some(x), Some(y)) = (row.value(x_column), row.value(y_column)) else {
            continue;
        };
        let color = dataset
            .location_index(&row.location)
            .map(location_color)
            .unwrap_or(PRIMARY);
        let mut series = Series::new(row.location.clone(), color);
        series.x.push(XValue::Number(x));
        series.y.push(Some(y));
        series.labels.push(row.location.clone());
        series.custom_data.push(row.location.clone());
        traces.push(series);
    }

    ChartSpec {
        kind: ChartKind::Scatter,
        traces,
        x_axis: Axis::new(Some(x_column.to_string()), x_scale),
        y_axis: Axis::new(Some(y_column.to_string()), y_scale),
        annotation: None,
        margins: None,
        height: None,
    }
}
