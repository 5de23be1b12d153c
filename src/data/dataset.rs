//! Dataset: the immutable, indexed in-memory table.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::data::metric::{MetricId, METRIC_COUNT};
use crate::data::source::{DatasetSource, Frame};
use crate::error::{Error, Result};

pub const LOCATION_COLUMN: &str = "location";
pub const CONTINENT_COLUMN: &str = "continent";
pub const DATE_COLUMN: &str = "date";

/// One (location, date) observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub location: String,
    pub continent: Option<String>,
    pub date: NaiveDate,
    metrics: [Option<f64>; METRIC_COUNT],
}

impl Row {
    pub fn new(location: impl Into<String>, continent: Option<String>, date: NaiveDate) -> Self {
        Self {
            location: location.into(),
            continent,
            date,
            metrics: [None; METRIC_COUNT],
        }
    }

    /// Builder-style setter, mostly for fixtures.
    pub fn with(mut self, metric: MetricId, value: f64) -> Self {
        self.metrics[metric.index()] = Some(value);
        self
    }

    /// The value of `metric`, or `None` if the cell was empty or not numeric.
    pub fn value(&self, metric: MetricId) -> Option<f64> {
        self.metrics[metric.index()]
    }
}

/// The loaded dataset plus its location and date indices.
///
/// Built once and never mutated; all accessors take `&self`, so a `Dataset`
/// can be shared behind an `Arc` by any number of readers.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<Row>,
    by_location: HashMap<String, Vec<usize>>,
    by_date: HashMap<NaiveDate, Vec<usize>>,
    locations: Vec<String>,
    dates: Vec<NaiveDate>,
    continents: Vec<String>,
}

impl Dataset {
    /// Load and index the dataset from a source. Any failure here is fatal.
    pub fn load(source: &impl DatasetSource) -> Result<Self> {
        let frame = source.load()?;
        let dataset = Self::from_frame(&frame)?;
        info!(
            source = %source.describe(),
            rows = dataset.len(),
            locations = dataset.locations.len(),
            dates = dataset.dates.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Validate the schema and convert every record into a typed [`Row`].
    pub fn from_frame(frame: &Frame) -> Result<Self> {
        let location_idx = frame.require_column(LOCATION_COLUMN)?;
        let continent_idx = frame.require_column(CONTINENT_COLUMN)?;
        let date_idx = frame.require_column(DATE_COLUMN)?;
        let metric_idx = MetricId::ALL
            .iter()
            .map(|m| frame.require_column(m.as_str()))
            .collect::<Result<Vec<usize>>>()?;

        let mut unparsed: BTreeSet<MetricId> = BTreeSet::new();
        let mut rows = Vec::with_capacity(frame.records.len());
        for (i, rec) in frame.records.iter().enumerate() {
            // header is line 1
            let line = i + 2;
            if rec.len() != frame.header.len() {
                return Err(Error::Csv {
                    line,
                    message: format!(
                        "expected {} fields, found {}",
                        frame.header.len(),
                        rec.len()
                    ),
                });
            }
            let raw_date = rec[date_idx].trim();
            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
                Error::InvalidDateValue {
                    line,
                    value: raw_date.to_string(),
                }
            })?;
            let continent = Some(rec[continent_idx].trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string);
            let mut row = Row::new(rec[location_idx].trim(), continent, date);
            for (metric, &col) in MetricId::ALL.iter().zip(metric_idx.iter()) {
                let cell = rec[col].trim();
                if cell.is_empty() {
                    continue;
                }
                match cell.parse::<f64>() {
                    Ok(v) if v.is_finite() => row = row.with(*metric, v),
                    _ => {
                        if unparsed.insert(*metric) {
                            debug!(%metric, line, cell, "non-numeric metric cell treated as missing");
                        }
                    }
                }
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Index already-typed rows. Fails only if `rows` is empty.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let mut by_location: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_date: HashMap<NaiveDate, Vec<usize>> = HashMap::new();
        let mut continents: BTreeSet<String> = BTreeSet::new();
        for (i, row) in rows.iter().enumerate() {
            by_location.entry(row.location.clone()).or_default().push(i);
            by_date.entry(row.date).or_default().push(i);
            if let Some(c) = &row.continent {
                continents.insert(c.clone());
            }
        }
        let mut locations: Vec<String> = by_location.keys().cloned().collect();
        locations.sort();
        let mut dates: Vec<NaiveDate> = by_date.keys().copied().collect();
        dates.sort();
        Ok(Self {
            rows,
            by_location,
            by_date,
            locations,
            dates,
            continents: continents.into_iter().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct locations, sorted by name.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn has_location(&self, location: &str) -> bool {
        self.by_location.contains_key(location)
    }

    /// Distinct dates, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn has_date(&self, date: NaiveDate) -> bool {
        self.by_date.contains_key(&date)
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Distinct non-empty continents, sorted.
    pub fn continents(&self) -> &[String] {
        &self.continents
    }

    /// All rows of `location` in dataset order. Unknown locations yield an
    /// empty vector.
    pub fn rows_by_location(&self, location: &str) -> Vec<&Row> {
        self.collect(self.by_location.get(location))
    }

    /// All rows observed on `date`. Dates absent from the data yield an empty
    /// vector.
    pub fn rows_by_date(&self, date: NaiveDate) -> Vec<&Row> {
        self.collect(self.by_date.get(&date))
    }

    /// Position of `location` in [`Dataset::locations`].
    pub fn location_index(&self, location: &str) -> Option<usize> {
        self.locations
            .binary_search_by(|l| l.as_str().cmp(location))
            .ok()
    }

    fn collect(&self, idx: Option<&Vec<usize>>) -> Vec<&Row> {
        idx.map(|v| v.iter().map(|&i| &self.rows[i]).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::parse_csv;

    fn header() -> String {
        let mut cols = vec!["location", "continent", "date"];
        cols.extend(MetricId::ALL.iter().map(|m| m.as_str()));
        cols.join(",")
    }

    fn record(location: &str, date: &str, new_cases: &str) -> String {
        let mut cells = vec![location.to_string(), "Asia".to_string(), date.to_string()];
        for m in MetricId::ALL {
            cells.push(if m == MetricId::NewCases {
                new_cases.to_string()
            } else {
                String::new()
            });
        }
        cells.join(",")
    }

    #[test]
    fn empty_and_garbage_cells_are_missing_values() {
        let text = format!(
            "{}\n{}\n{}\n",
            header(),
            record("China", "2021-01-01", "12"),
            record("China", "2021-01-02", "n/a")
        );
        let ds = Dataset::from_frame(&parse_csv(&text).unwrap()).unwrap();
        let rows = ds.rows_by_location("China");
        assert_eq!(rows[0].value(MetricId::NewCases), Some(12.0));
        assert_eq!(rows[1].value(MetricId::NewCases), None);
        assert_eq!(rows[0].value(MetricId::NewDeaths), None);
        assert_eq!(ds.continents(), &["Asia".to_string()]);
    }

    #[test]
    fn missing_metric_column_fails_fast() {
        let text = "location,continent,date,new_cases\nChina,Asia,2021-01-01,1\n";
        let err = Dataset::from_frame(&parse_csv(text).unwrap()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref c) if c == "cardiovasc_death_rate"));
        assert!(err.is_load_error());
    }

    #[test]
    fn bad_date_reports_line() {
        let text = format!("{}\n{}\n", header(), record("China", "01/02/2021", "1"));
        let err = Dataset::from_frame(&parse_csv(&text).unwrap()).unwrap_err();
        assert!(matches!(err, Error::InvalidDateValue { line: 2, .. }));
    }

    #[test]
    fn short_record_is_csv_error() {
        let frame = Frame {
            header: header().split(',').map(str::to_string).collect(),
            records: vec![vec!["China".to_string(), "Asia".to_string()]],
        };
        let err = Dataset::from_frame(&frame).unwrap_err();
        assert!(matches!(err, Error::Csv { line: 2, .. }));
        assert!(err.is_load_error());
    }

    #[test]
    fn header_only_is_empty_dataset() {
        let text = format!("{}\n", header());
        let err = Dataset::from_frame(&parse_csv(&text).unwrap()).unwrap_err();
        assert!(matches!(err, Error::EmptyDataset));
    }

    #[test]
    fn location_index_follows_sorted_order() {
        let d = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let ds = Dataset::from_rows(vec![
            Row::new("Peru", None, d),
            Row::new("Chile", None, d),
            Row::new("Brazil", None, d),
        ])
        .unwrap();
        assert_eq!(ds.location_index("Brazil"), Some(0));
        assert_eq!(ds.location_index("Peru"), Some(2));
        assert_eq!(ds.location_index("Atlantis"), None);
        assert!(ds.continents().is_empty());
    }
}
