//! Selector state: the user's current choices for the cross-filter view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::dataset::Dataset;
use crate::data::metric::MetricId;
use crate::error::{Error, Result};

/// Axis scale mode, offered as a Linear/Log radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Scale {
    #[default]
    Linear,
    Log,
}

impl Scale {
    pub const ALL: [Scale; 2] = [Scale::Linear, Scale::Log];

    pub fn label(self) -> &'static str {
        match self {
            Scale::Linear => "Linear",
            Scale::Log => "Log",
        }
    }

    pub fn is_log(self) -> bool {
        self == Scale::Log
    }
}

/// One field change requested by the user.
///
/// Metric fields carry raw column names because that is what the dropdown
/// reports; they are validated against [`MetricId`] when applied.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorUpdate {
    XColumn(String),
    YColumn(String),
    XScale(Scale),
    YScale(Scale),
    ReferenceDate(NaiveDate),
    HoveredLocation(String),
}

impl SelectorUpdate {
    /// Which logical field this update targets.
    pub fn field(&self) -> SelectorField {
        match self {
            SelectorUpdate::XColumn(_) => SelectorField::XColumn,
            SelectorUpdate::YColumn(_) => SelectorField::YColumn,
            SelectorUpdate::XScale(_) => SelectorField::XScale,
            SelectorUpdate::YScale(_) => SelectorField::YScale,
            SelectorUpdate::ReferenceDate(_) => SelectorField::ReferenceDate,
            SelectorUpdate::HoveredLocation(_) => SelectorField::HoveredLocation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorField {
    XColumn,
    YColumn,
    XScale,
    YScale,
    ReferenceDate,
    HoveredLocation,
}

/// Current selections. Treated as an immutable value: updates produce a new
/// record via [`SelectorState::apply`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorState {
    pub x_column: MetricId,
    pub y_column: MetricId,
    pub x_scale: Scale,
    pub y_scale: Scale,
    pub reference_date: NaiveDate,
    pub hovered_location: String,
}

impl SelectorState {
    pub const DEFAULT_X: MetricId = MetricId::NewCases;
    pub const DEFAULT_Y: MetricId = MetricId::NewDeaths;

    /// Defaults: new_cases vs new_deaths, linear axes, the latest date in the
    /// dataset, and `hovered_location` as given.
    pub fn new(dataset: &Dataset, hovered_location: impl Into<String>) -> Result<Self> {
        let reference_date = dataset.latest_date().ok_or(Error::EmptyDataset)?;
        Ok(Self {
            x_column: Self::DEFAULT_X,
            y_column: Self::DEFAULT_Y,
            x_scale: Scale::Linear,
            y_scale: Scale::Linear,
            reference_date,
            hovered_location: hovered_location.into(),
        })
    }

    /// Validate `update` and return the resulting state. On error `self` is
    /// untouched, so the caller keeps the prior state.
    pub fn apply(&self, update: &SelectorUpdate, dataset: &Dataset) -> Result<Self> {
        let mut next = self.clone();
        match update {
            SelectorUpdate::XColumn(name) => next.x_column = name.parse()?,
            SelectorUpdate::YColumn(name) => next.y_column = name.parse()?,
            SelectorUpdate::XScale(scale) => next.x_scale = *scale,
            SelectorUpdate::YScale(scale) => next.y_scale = *scale,
            SelectorUpdate::ReferenceDate(date) => {
                if !dataset.has_date(*date) {
                    return Err(Error::InvalidDate(*date));
                }
                next.reference_date = *date;
            }
            // Unknown locations are allowed and render as empty charts.
            SelectorUpdate::HoveredLocation(loc) => next.hovered_location = loc.clone(),
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::Row;

    fn dataset() -> Dataset {
        let d1 = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2021, 3, 2).unwrap();
        Dataset::from_rows(vec![
            Row::new("China", None, d2),
            Row::new("China", None, d1),
        ])
        .unwrap()
    }

    #[test]
    fn defaults_use_latest_date() {
        let ds = dataset();
        let s = SelectorState::new(&ds, "China").unwrap();
        assert_eq!(s.x_column, MetricId::NewCases);
        assert_eq!(s.y_column, MetricId::NewDeaths);
        assert_eq!(s.x_scale, Scale::Linear);
        assert_eq!(s.y_scale, Scale::Linear);
        assert_eq!(s.reference_date, NaiveDate::from_ymd_opt(2021, 3, 2).unwrap());
        assert_eq!(s.hovered_location, "China");
    }

    #[test]
    fn invalid_metric_leaves_state_alone() {
        let ds = dataset();
        let s = SelectorState::new(&ds, "China").unwrap();
        let err = s
            .apply(&SelectorUpdate::YColumn("bogus".into()), &ds)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidMetric(_)));
        assert_eq!(s.y_column, MetricId::NewDeaths);
    }

    #[test]
    fn unknown_date_is_rejected() {
        let ds = dataset();
        let s = SelectorState::new(&ds, "China").unwrap();
        let missing = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(matches!(
            s.apply(&SelectorUpdate::ReferenceDate(missing), &ds),
            Err(Error::InvalidDate(d)) if d == missing
        ));
    }

    #[test]
    fn each_update_changes_exactly_one_field() {
        let ds = dataset();
        let s = SelectorState::new(&ds, "China").unwrap();
        let next = s.apply(&SelectorUpdate::XScale(Scale::Log), &ds).unwrap();
        assert_eq!(next.x_scale, Scale::Log);
        assert_eq!(SelectorState { x_scale: Scale::Linear, ..next.clone() }, s);

        let next = s
            .apply(&SelectorUpdate::HoveredLocation("Atlantis".into()), &ds)
            .unwrap();
        assert_eq!(next.hovered_location, "Atlantis");
        assert_eq!(
            SelectorUpdate::HoveredLocation("x".into()).field(),
            SelectorField::HoveredLocation
        );
    }
}
