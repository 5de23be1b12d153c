mod common;

use common::{covid_fixture, day};
use owidplot::{CsvSource, Dataset, Error, MetricId};

#[test]
fn unknown_location_yields_no_rows() {
    let ds = covid_fixture();
    assert!(ds.rows_by_location("Atlantis").is_empty());
    assert!(!ds.has_location("Atlantis"));
}

#[test]
fn rows_by_date_share_the_date_and_have_one_row_per_location() {
    let ds = covid_fixture();
    let rows = ds.rows_by_date(day("2020-01-10"));
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.date == day("2020-01-10")));
    let mut locs: Vec<&str> = rows.iter().map(|r| r.location.as_str()).collect();
    locs.sort();
    locs.dedup();
    assert_eq!(locs.len(), rows.len());

    assert!(ds.rows_by_date(day("1999-01-01")).is_empty());
}

#[test]
fn indexes_are_sorted() {
    let ds = covid_fixture();
    assert_eq!(ds.locations(), ["Chile", "China", "India", "Peru", "Spain"]);
    assert_eq!(ds.dates().first(), Some(&day("2020-01-01")));
    assert_eq!(ds.latest_date(), Some(day("2020-01-10")));
    assert_eq!(ds.continents(), ["Asia"]);
}

#[test]
fn missing_metric_column_fails_fast() {
    let mut cols = vec!["location", "continent", "date"];
    cols.extend(
        MetricId::ALL
            .iter()
            .filter(|m| **m != MetricId::NewDeaths)
            .map(|m| m.as_str()),
    );
    let mut cells = vec!["China", "Asia", "2020-01-01"];
    cells.resize(cols.len(), "");
    let text = format!("{}\n{}\n", cols.join(","), cells.join(","));

    match Dataset::load(&CsvSource::from_text(text)) {
        Err(Error::MissingColumn(col)) => assert_eq!(col, "new_deaths"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn header_only_file_is_empty_dataset() {
    let text = common::csv_text(&[]);
    let err = Dataset::load(&CsvSource::from_text(text)).unwrap_err();
    assert!(matches!(err, Error::EmptyDataset));
    assert!(err.is_load_error());
}

#[test]
fn bad_date_reports_line() {
    let mut text = common::csv_text(&[common::row("China", "2020-01-01", &[])]);
    let bad = text.lines().nth(1).unwrap().replace("2020-01-01", "01/02/2020");
    text.push_str(&bad);
    text.push('\n');
    match Dataset::load(&CsvSource::from_text(text)) {
        Err(Error::InvalidDateValue { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "01/02/2020");
        }
        other => panic!("expected InvalidDateValue, got {other:?}"),
    }
}
