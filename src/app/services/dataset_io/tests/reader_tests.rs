//! Tests for CSV reading and header validation

use crate::Error;
use crate::app::services::dataset_io::{ensure_columns, read_tourism_records};
use csv::StringRecord;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const FULL_HEADER: &str = "country,country_code,year,tourism_receipts,tourism_arrivals,\
                           tourism_exports,tourism_departures,tourism_expenditures,gdp,\
                           inflation,unemployment";

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_read_tourism_records_parses_rows_in_order() {
    let dir = TempDir::new().unwrap();
    let content = format!(
        "{FULL_HEADER}\n\
         France,FRA,2019,100.5,90910000,7.12,26914000,51070000000,2728870000000,1.11,8.41\n\
         Aruba,ABW,2019,2068000000,1951000,72.51,,,3395798882,4.26,\n"
    );
    let path = write_fixture(&dir, "tourism.csv", &content);

    let records = read_tourism_records(&path).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].country, "France");
    assert_eq!(records[0].country_code, "FRA");
    assert_eq!(records[0].year, 2019);
    assert_eq!(records[0].tourism_receipts, Some(100.5));
    assert_eq!(records[1].country, "Aruba");
    assert_eq!(records[1].tourism_departures, None);
    assert_eq!(records[1].unemployment, None);
}

#[test]
fn test_blank_indicator_cells_read_as_null() {
    let dir = TempDir::new().unwrap();
    let content = format!("{FULL_HEADER}\nKiribati,KIR,2005,,,,,,,,\n");
    let path = write_fixture(&dir, "tourism.csv", &content);

    let records = read_tourism_records(&path).unwrap();

    assert_eq!(records.len(), 1);
    for (_, value) in records[0].indicators() {
        assert_eq!(value, None);
    }
}

#[test]
fn test_absent_indicator_column_reads_as_null() {
    let dir = TempDir::new().unwrap();
    // No unemployment column at all; only schema columns are required
    let content = "country,country_code,year,gdp\nFrance,FRA,2019,100.0\n";
    let path = write_fixture(&dir, "tourism.csv", content);

    let records = read_tourism_records(&path).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].gdp, Some(100.0));
    assert_eq!(records[0].unemployment, None);
    assert_eq!(records[0].tourism_receipts, None);
}

#[test]
fn test_missing_required_column_is_schema_error() {
    let dir = TempDir::new().unwrap();
    let content = "country,year,gdp\nFrance,2019,100.0\n";
    let path = write_fixture(&dir, "tourism.csv", content);

    match read_tourism_records(&path) {
        Err(Error::MissingColumn { column, file }) => {
            assert_eq!(column, "country_code");
            assert!(file.contains("tourism.csv"));
        }
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_unreadable_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.csv");

    match read_tourism_records(&path) {
        Err(Error::Io { .. }) => {}
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_malformed_numeric_cell_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let content = "country,country_code,year,gdp\nFrance,FRA,not-a-year,100.0\n";
    let path = write_fixture(&dir, "tourism.csv", content);

    match read_tourism_records(&path) {
        Err(Error::CsvParsing { message, .. }) => assert!(message.contains("line 2")),
        other => panic!("expected CsvParsing, got {:?}", other),
    }
}

#[test]
fn test_ensure_columns_accepts_reordered_headers() {
    let headers = StringRecord::from(vec!["year", "country_code", "country"]);
    let result = ensure_columns(
        &headers,
        &["country", "country_code", "year"],
        &PathBuf::from("any.csv"),
    );
    assert!(result.is_ok());
}
