//! MetricId: the closed set of numeric columns the dashboard can plot.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// A numeric dataset column offered in the axis dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricId {
    CardiovascDeathRate,
    DiabetesPrevalence,
    NewCasesSmoothed,
    NewCases,
    NewVaccinations,
    TotalVaccinationsPerHundred,
    NewDeaths,
    NewDeathsSmoothed,
    TotalDeaths,
    PeopleVaccinated,
    PeopleFullyVaccinated,
    PeopleFullyVaccinatedPerHundred,
    NewVaccinationsSmoothedPerMillion,
    StringencyIndex,
    TotalDeathsPerMillion,
    ReproductionRate,
}

/// Number of metrics in [`MetricId::ALL`].
pub const METRIC_COUNT: usize = 16;

static BY_NAME: Lazy<HashMap<&'static str, MetricId>> =
    Lazy::new(|| MetricId::ALL.iter().map(|m| (m.as_str(), *m)).collect());

impl MetricId {
    /// All metrics, in dropdown order.
    pub const ALL: [MetricId; METRIC_COUNT] = [
        MetricId::CardiovascDeathRate,
        MetricId::DiabetesPrevalence,
        MetricId::NewCasesSmoothed,
        MetricId::NewCases,
        MetricId::NewVaccinations,
        MetricId::TotalVaccinationsPerHundred,
        MetricId::NewDeaths,
        MetricId::NewDeathsSmoothed,
        MetricId::TotalDeaths,
        MetricId::PeopleVaccinated,
        MetricId::PeopleFullyVaccinated,
        MetricId::PeopleFullyVaccinatedPerHundred,
        MetricId::NewVaccinationsSmoothedPerMillion,
        MetricId::StringencyIndex,
        MetricId::TotalDeathsPerMillion,
        MetricId::ReproductionRate,
    ];

    /// The exact column name in the dataset.
    pub const fn as_str(self) -> &'static str {
        match self {
            MetricId::CardiovascDeathRate => "cardiovasc_death_rate",
            MetricId::DiabetesPrevalence => "diabetes_prevalence",
            MetricId::NewCasesSmoothed => "new_cases_smoothed",
            MetricId::NewCases => "new_cases",
            MetricId::NewVaccinations => "new_vaccinations",
            MetricId::TotalVaccinationsPerHundred => "total_vaccinations_per_hundred",
            MetricId::NewDeaths => "new_deaths",
            MetricId::NewDeathsSmoothed => "new_deaths_smoothed",
            MetricId::TotalDeaths => "total_deaths",
            MetricId::PeopleVaccinated => "people_vaccinated",
            MetricId::PeopleFullyVaccinated => "people_fully_vaccinated",
            MetricId::PeopleFullyVaccinatedPerHundred => "people_fully_vaccinated_per_hundred",
            MetricId::NewVaccinationsSmoothedPerMillion => "new_vaccinations_smoothed_per_million",
            MetricId::StringencyIndex => "stringency_index",
            MetricId::TotalDeathsPerMillion => "total_deaths_per_million",
            MetricId::ReproductionRate => "reproduction_rate",
        }
    }

    /// Position within [`MetricId::ALL`]; used to index per-row value arrays.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| Error::InvalidMetric(s.to_string()))
    }
}

impl Serialize for MetricId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MetricId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (i, m) in MetricId::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn parses_exact_column_names_only() {
        assert_eq!("new_cases".parse::<MetricId>().unwrap(), MetricId::NewCases);
        assert_eq!(
            "reproduction_rate".parse::<MetricId>().unwrap(),
            MetricId::ReproductionRate
        );
        assert!(matches!(
            "New_Cases".parse::<MetricId>(),
            Err(Error::InvalidMetric(name)) if name == "New_Cases"
        ));
        assert!("not_a_real_column".parse::<MetricId>().is_err());
    }

    #[test]
    fn serializes_as_column_name() {
        let json = serde_json::to_string(&MetricId::StringencyIndex).unwrap();
        assert_eq!(json, "\"stringency_index\"");
        let back: MetricId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MetricId::StringencyIndex);
    }
}
