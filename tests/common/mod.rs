#![allow(dead_code)]

use chrono::NaiveDate;
use owidplot::{CsvSource, Dataset, MetricId};

pub struct FixtureRow<'a> {
    pub location: &'a str,
    pub continent: &'a str,
    pub date: &'a str,
    pub values: Vec<(MetricId, f64)>,
}

pub fn row<'a>(location: &'a str, date: &'a str, values: &[(MetricId, f64)]) -> FixtureRow<'a> {
    FixtureRow {
        location,
        continent: "Asia",
        date,
        values: values.to_vec(),
    }
}

/// Full-schema CSV text; metrics not listed in a row are left blank.
pub fn csv_text(rows: &[FixtureRow<'_>]) -> String {
    let mut header = vec!["location", "continent", "date"];
    header.extend(MetricId::ALL.iter().map(|m| m.as_str()));
    let mut out = header.join(",");
    out.push('\n');
    for r in rows {
        let mut cells = vec![r.location.to_string(), r.continent.to_string(), r.date.to_string()];
        for m in MetricId::ALL {
            let cell = r
                .values
                .iter()
                .find(|(id, _)| *id == m)
                .map(|(_, v)| v.to_string())
                .unwrap_or_default();
            cells.push(cell);
        }
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

pub fn dataset(rows: &[FixtureRow<'_>]) -> Dataset {
    Dataset::load(&CsvSource::from_text(csv_text(rows))).expect("fixture loads")
}

pub fn day(d: &str) -> NaiveDate {
    NaiveDate::parse_from_str(d, "%Y-%m-%d").expect("fixture date")
}

/// China on 10 consecutive days with increasing new_cases, plus a few other
/// locations on the last day.
pub fn covid_fixture() -> Dataset {
    let dates: Vec<String> = (1..=10).map(|d| format!("2020-01-{d:02}")).collect();
    let mut rows: Vec<FixtureRow<'_>> = dates
        .iter()
        .enumerate()
        .rev()
        .map(|(i, d)| {
            row(
                "China",
                d,
                &[
                    (MetricId::NewCases, (i as f64 + 1.0) * 100.0),
                    (MetricId::NewDeaths, i as f64),
                ],
            )
        })
        .collect();
    let last = "2020-01-10";
    rows.push(row("Chile", last, &[(MetricId::NewCases, 50.0), (MetricId::NewDeaths, 2.0)]));
    rows.push(row("India", last, &[(MetricId::NewCases, 900.0)]));
    rows.push(row("Peru", last, &[(MetricId::NewDeaths, 4.0)]));
    rows.push(row("Spain", last, &[(MetricId::NewCases, 300.0), (MetricId::NewDeaths, 7.0)]));
    dataset(&rows)
}
