//! Tests for country registry loading

use crate::Error;
use crate::app::services::country_registry::CountryRegistry;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("countries_cleaned.csv");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_collects_distinct_codes() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "Country,Alpha-2 code,Alpha-3 code\n\
         France,FR,FRA\n\
         Canada,CA,CAN\n\
         United States,US,USA\n",
    );

    let (registry, stats) = CountryRegistry::load(&path).unwrap();

    assert_eq!(registry.code_count(), 3);
    assert!(registry.contains_code("FRA"));
    assert!(registry.contains_code("CAN"));
    assert!(registry.contains_code("USA"));
    assert!(!registry.contains_code("XXK"));
    assert_eq!(stats.total_records, 3);
    assert_eq!(stats.codes_loaded, 3);
}

#[test]
fn test_blank_codes_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "Country,Alpha-3 code\n\
         France,FRA\n\
         Nowhere,\n\
         Somewhere,   \n",
    );

    let (registry, stats) = CountryRegistry::load(&path).unwrap();

    assert_eq!(registry.code_count(), 1);
    assert_eq!(stats.blank_codes, 2);
    assert_eq!(stats.codes_loaded, 1);
}

#[test]
fn test_duplicate_codes_kept_once() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "Country,Alpha-3 code\n\
         France,FRA\n\
         France (metropolitan),FRA\n",
    );

    let (registry, stats) = CountryRegistry::load(&path).unwrap();

    assert_eq!(registry.code_count(), 1);
    assert_eq!(stats.duplicate_codes, 1);
    assert_eq!(stats.total_records, 2);
}

#[test]
fn test_missing_alpha3_column_is_schema_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "Country,Numeric code\nFrance,250\n");

    match CountryRegistry::load(&path) {
        Err(Error::MissingColumn { column, .. }) => assert_eq!(column, "Alpha-3 code"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_empty_reference_yields_empty_registry() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "Country,Alpha-3 code\n");

    let (registry, stats) = CountryRegistry::load(&path).unwrap();

    assert!(registry.is_empty());
    assert_eq!(stats.total_records, 0);
}

#[test]
fn test_load_summary_mentions_counts() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "Country,Alpha-3 code\nFrance,FRA\nNowhere,\n");

    let (_, stats) = CountryRegistry::load(&path).unwrap();

    let summary = stats.summary();
    assert!(summary.contains("1 country codes"));
    assert!(summary.contains("2 reference rows"));
}
