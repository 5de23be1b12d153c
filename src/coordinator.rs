//! Interaction coordinator: turns [`DashboardEvent`]s into fresh charts.
//!
//! There is a single "idle" state. Each event is applied to the selector
//! state and the affected renderers are re-run synchronously before the call
//! returns. Rejected updates leave both the state and the displayed charts
//! exactly as they were.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::chart::ChartSpec;
use crate::data::dataset::Dataset;
use crate::data::selection::{SelectorField, SelectorState, SelectorUpdate};
use crate::error::Result;
use crate::events::{DashboardEvent, HoverPayload, OutputId};
use crate::render::{
    render_overview, render_scatter, render_time_series, time_series_title, ChartStyle,
};

/// Selections for the country overview tab.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewState {
    pub location: String,
    pub style: ChartStyle,
}

pub struct Coordinator {
    dataset: Arc<Dataset>,
    selection: SelectorState,
    overview: OverviewState,
    outputs: BTreeMap<OutputId, ChartSpec>,
}

impl Coordinator {
    /// Build the coordinator with default selections and render every output
    /// once.
    pub fn new(
        dataset: Arc<Dataset>,
        hovered_location: impl Into<String>,
        overview_location: impl Into<String>,
    ) -> Result<Self> {
        let selection = SelectorState::new(&dataset, hovered_location)?;
        let mut this = Self {
            dataset,
            selection,
            overview: OverviewState {
                location: overview_location.into(),
                style: ChartStyle::default(),
            },
            outputs: BTreeMap::new(),
        };
        for id in OutputId::ALL {
            let spec = this.render(id);
            this.outputs.insert(id, spec);
        }
        Ok(this)
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn selection(&self) -> &SelectorState {
        &self.selection
    }

    pub fn overview(&self) -> &OverviewState {
        &self.overview
    }

    /// The chart currently shown in `id`.
    pub fn output(&self, id: OutputId) -> &ChartSpec {
        // Every id is rendered in `new` and only ever replaced afterwards.
        &self.outputs[&id]
    }

    pub fn outputs(&self) -> &BTreeMap<OutputId, ChartSpec> {
        &self.outputs
    }

    /// Apply one event and return the outputs it replaced, in [`OutputId`]
    /// order. An empty vector means nothing changed.
    pub fn handle(&mut self, event: DashboardEvent) -> Result<Vec<(OutputId, ChartSpec)>> {
        debug!(?event, "dashboard event");
        let affected: Vec<OutputId> = match event {
            DashboardEvent::SelectorChanged(update) => self.apply_update(&update)?,
            DashboardEvent::ScatterHovered(payload) => self.apply_hover(&payload),
            DashboardEvent::ScatterUnhovered => Vec::new(),
            DashboardEvent::OverviewCountry(location) => {
                self.overview.location = location;
                vec![OutputId::Overview]
            }
            DashboardEvent::OverviewStyle(style) => {
                self.overview.style = style;
                vec![OutputId::Overview]
            }
        };
        Ok(self.refresh(&affected))
    }

    fn apply_update(&mut self, update: &SelectorUpdate) -> Result<Vec<OutputId>> {
        let next = self
            .selection
            .apply(update, &self.dataset)
            .inspect_err(|e| warn!(error = %e, ?update, "selector update rejected"))?;
        self.selection = next;
        let mut affected = vec![OutputId::Scatter];
        match update.field() {
            SelectorField::XColumn | SelectorField::XScale => affected.push(OutputId::XTimeSeries),
            SelectorField::YColumn | SelectorField::YScale => affected.push(OutputId::YTimeSeries),
            SelectorField::HoveredLocation => {
                affected.extend([OutputId::XTimeSeries, OutputId::YTimeSeries])
            }
            SelectorField::ReferenceDate => {}
        }
        Ok(affected)
    }

    fn apply_hover(&mut self, payload: &HoverPayload) -> Vec<OutputId> {
        let Some(location) = payload.location() else {
            warn!("hover without point data ignored");
            return Vec::new();
        };
        if !self.dataset.has_location(location) {
            debug!(location, "hovered location has no rows");
        }
        self.selection.hovered_location = location.to_string();
        vec![OutputId::XTimeSeries, OutputId::YTimeSeries]
    }

    fn refresh(&mut self, affected: &[OutputId]) -> Vec<(OutputId, ChartSpec)> {
        affected
            .iter()
            .map(|&id| {
                let spec = self.render(id);
                self.outputs.insert(id, spec.clone());
                (id, spec)
            })
            .collect()
    }

    fn render(&self, id: OutputId) -> ChartSpec {
        let s = &self.selection;
        match id {
            OutputId::Scatter => render_scatter(
                &self.dataset,
                s.x_column,
                s.y_column,
                s.x_scale,
                s.y_scale,
                s.reference_date,
            ),
            OutputId::XTimeSeries => render_time_series(
                &self.dataset,
                &s.hovered_location,
                s.x_column,
                s.x_scale,
                &time_series_title(&s.hovered_location, s.x_column),
            ),
            OutputId::YTimeSeries => render_time_series(
                &self.dataset,
                &s.hovered_location,
                s.y_column,
                s.y_scale,
                &time_series_title(&s.hovered_location, s.y_column),
            ),
            OutputId::Overview => {
                render_overview(&self.dataset, &self.overview.location, self.overview.style)
            }
        }
    }
}
