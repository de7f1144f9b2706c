//! Tests for the record processing pipelines

pub mod rounding_tests;

use crate::app::models::TourismRecord;
use crate::app::services::country_registry::CountryRegistry;
use std::path::PathBuf;

/// Build a record with every indicator unset
pub fn record(country: &str, code: &str, year: i32) -> TourismRecord {
    TourismRecord {
        country: country.to_string(),
        country_code: code.to_string(),
        year,
        tourism_receipts: None,
        tourism_arrivals: None,
        tourism_exports: None,
        tourism_departures: None,
        tourism_expenditures: None,
        gdp: None,
        inflation: None,
        unemployment: None,
    }
}

/// Build a registry holding the given codes
pub fn registry(codes: &[&str]) -> CountryRegistry {
    let mut registry = CountryRegistry::new(PathBuf::from("countries_cleaned.csv"));
    for code in codes {
        registry.codes.insert(code.to_string());
    }
    registry
}
