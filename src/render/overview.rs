//! Country overview: daily new cases for one location as bars or a line.

use serde::{Deserialize, Serialize};

use crate::chart::{Axis, ChartKind, ChartSpec, Series, XValue};
use crate::color_scheme::PRIMARY;
use crate::data::dataset::Dataset;
use crate::data::metric::MetricId;
use crate::data::selection::Scale;

/// Metric shown by the overview.
pub const OVERVIEW_METRIC: MetricId = MetricId::NewCases;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartStyle {
    Bar,
    #[default]
    Line,
}

impl ChartStyle {
    pub const ALL: [ChartStyle; 2] = [ChartStyle::Bar, ChartStyle::Line];

    pub fn label(self) -> &'static str {
        match self {
            ChartStyle::Bar => "Bar",
            ChartStyle::Line => "Line",
        }
    }
}

pub fn render_overview(dataset: &Dataset, location: &str, style: ChartStyle) -> ChartSpec {
    let mut rows = dataset.rows_by_location(location);
    rows.sort_by_key(|r| r.date);

    let mut series = Series::new(OVERVIEW_METRIC.as_str(), PRIMARY);
    for row in rows {
        series.x.push(XValue::Date(row.date));
        series.y.push(row.value(OVERVIEW_METRIC));
        series.labels.push(row.location.clone());
        series.custom_data.push(row.location.clone());
    }

    ChartSpec {
        kind: match style {
            ChartStyle::Bar => ChartKind::Bar,
            ChartStyle::Line => ChartKind::Line,
        },
        traces: vec![series],
        x_axis: Axis::new(Some("date".to_string()), Scale::Linear),
        y_axis: Axis::new(Some(OVERVIEW_METRIC.to_string()), Scale::Linear),
        annotation: None,
        margins: None,
        height: None,
    }
}
