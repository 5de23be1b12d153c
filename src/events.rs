//! Events flowing from the UI into the [`Coordinator`](crate::coordinator::Coordinator).
//!
//! The UI never hands widget identifiers to the core. It reports "the user
//! chose value V for logical field F" as a [`DashboardEvent`], and receives
//! charts keyed by [`OutputId`].

use serde::{Deserialize, Serialize};

use crate::data::selection::SelectorUpdate;
use crate::render::ChartStyle;

/// One point reported by a hover over the scatter plot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoverPoint {
    /// Identity attached to the point (the location name).
    pub custom_data: Option<String>,
    /// Label shown in the hover tooltip.
    pub hover_text: Option<String>,
}

impl HoverPoint {
    pub fn for_location(location: impl Into<String>) -> Self {
        let location = location.into();
        Self {
            custom_data: Some(location.clone()),
            hover_text: Some(location),
        }
    }
}

/// Hover payload as delivered by the scatter plot. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoverPayload {
    pub points: Vec<HoverPoint>,
}

impl HoverPayload {
    pub fn single(location: impl Into<String>) -> Self {
        Self {
            points: vec![HoverPoint::for_location(location)],
        }
    }

    /// Location identity of the first point, if there is one.
    ///
    /// Uses `custom_data`, falling back to `hover_text`. Empty strings count
    /// as absent.
    pub fn location(&self) -> Option<&str> {
        let first = self.points.first()?;
        non_empty(&first.custom_data).or_else(|| non_empty(&first.hover_text))
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    SelectorChanged(SelectorUpdate),
    ScatterHovered(HoverPayload),
    ScatterUnhovered,
    OverviewCountry(String),
    OverviewStyle(ChartStyle),
}

/// A logical chart slot in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum OutputId {
    Scatter,
    XTimeSeries,
    YTimeSeries,
    Overview,
}

impl OutputId {
    pub const ALL: [OutputId; 4] = [
        OutputId::Scatter,
        OutputId::XTimeSeries,
        OutputId::YTimeSeries,
        OutputId::Overview,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OutputId::Scatter => "scatter",
            OutputId::XTimeSeries => "x-time-series",
            OutputId::YTimeSeries => "y-time-series",
            OutputId::Overview => "overview",
        }
    }
}
