//! ChartSpec: renderer-agnostic description of one chart.
//!
//! Specs are plain values built fresh on every state change. The egui front end
//! in [`crate::panels::chart_ui`] draws them; [`ChartSpec::to_json`] serializes
//! them for export.

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::selection::Scale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    /// Line through the points with a marker on each one.
    LineMarkers,
    Line,
    Bar,
    Scatter,
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum XValue {
    Date(NaiveDate),
    Number(f64),
}

impl XValue {
    /// Numeric position on the x axis; dates map to days since 1970-01-01.
    pub fn as_f64(&self) -> f64 {
        match self {
            XValue::Date(d) => date_to_days(*d),
            XValue::Number(v) => *v,
        }
    }
}

pub fn date_to_days(d: NaiveDate) -> f64 {
    d.signed_duration_since(NaiveDate::default()).num_days() as f64
}

pub fn days_to_date(days: f64) -> Option<NaiveDate> {
    if !days.is_finite() || days.abs() > 1e7 {
        return None;
    }
    NaiveDate::default().checked_add_signed(chrono::Duration::days(days.round() as i64))
}

/// One named set of points drawn in a single color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<XValue>,
    /// `None` where the observation has no value.
    pub y: Vec<Option<f64>>,
    pub color: Rgb,
    /// Per-point hover label.
    pub labels: Vec<String>,
    /// Per-point identity reported back by hover events.
    pub custom_data: Vec<String>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            x: Vec::new(),
            y: Vec::new(),
            color,
            labels: Vec::new(),
            custom_data: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Option<String>,
    pub scale: Scale,
    pub show_grid: bool,
}

impl Axis {
    pub fn new(title: Option<String>, scale: Scale) -> Self {
        Self {
            title,
            scale,
            show_grid: true,
        }
    }
}

/// Text placed relative to the plot area: `(0, 0)` bottom-left, `(1, 1)`
/// top-right. The text box's bottom-left corner sits on `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

impl Annotation {
    pub fn top_left(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: 0.0,
            y: 0.85,
        }
    }
}

/// Margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl Margins {
    /// Tight margins for the small linked panels.
    pub const COMPACT: Margins = Margins {
        left: 20.0,
        bottom: 30.0,
        right: 10.0,
        top: 10.0,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub traces: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub annotation: Option<Annotation>,
    pub margins: Option<Margins>,
    pub height: Option<f32>,
}

impl ChartSpec {
    /// Total number of x values across all series.
    pub fn x_len(&self) -> usize {
        self.traces.iter().map(|t| t.x.len()).sum()
    }

    /// Total number of y values across all series.
    pub fn y_len(&self) -> usize {
        self.traces.iter().map(|t| t.y.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.y_len() == 0
    }

    /// All points flattened as `(x, y, custom_data)`, series by series.
    pub fn points(&self) -> impl Iterator<Item = (XValue, Option<f64>, &str)> + '_ {
        self.traces.iter().flat_map(|t| {
            t.x.iter()
                .zip(t.y.iter())
                .zip(t.custom_data.iter().map(String::as_str).chain(std::iter::repeat("")))
                .map(|((x, y), id)| (*x, *y, id))
        })
    }

    /// Deterministic JSON rendering of the spec.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_round_trip_through_day_numbers() {
        let d = NaiveDate::from_ymd_opt(2021, 7, 14).unwrap();
        assert_eq!(days_to_date(date_to_days(d)), Some(d));
        assert_eq!(date_to_days(NaiveDate::from_ymd_opt(1970, 1, 2).unwrap()), 1.0);
        assert_eq!(days_to_date(f64::NAN), None);
    }

    #[test]
    fn points_pad_missing_identity() {
        let mut s = Series::new("a", Rgb(0, 0, 0));
        s.x = vec![XValue::Number(1.0), XValue::Number(2.0)];
        s.y = vec![Some(3.0), None];
        s.custom_data = vec!["A".into()];
        let spec = ChartSpec {
            kind: ChartKind::Scatter,
            traces: vec![s],
            x_axis: Axis::new(None, Scale::Linear),
            y_axis: Axis::new(None, Scale::Linear),
            annotation: None,
            margins: None,
            height: None,
        };
        let ids: Vec<&str> = spec.points().map(|p| p.2).collect();
        assert_eq!(ids, vec!["A", ""]);
        assert_eq!(spec.x_len(), 2);
    }
}
