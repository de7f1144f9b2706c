//! Data models for the tourism economy dataset
//!
//! This module contains the core data structures for representing tourism
//! economy records and their per-country averaged form. Field names follow
//! the CSV headers of the source dataset so rows map directly via serde.

use crate::constants::{INDICATOR_COLUMNS, columns};
use serde::{Deserialize, Serialize};

// =============================================================================
// Tourism Record
// =============================================================================

/// One row of the tourism economy dataset
///
/// Each record describes a single (country, year) observation. All numeric
/// indicators are nullable: the source dataset leaves cells blank where no
/// value was reported, and an input file may omit an indicator column
/// entirely, in which case the field reads as `None` for every row.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TourismRecord {
    /// Human-readable country or entity name (e.g., "France")
    pub country: String,

    /// Short alphabetic country identifier (alpha-3 style, e.g., "FRA")
    pub country_code: String,

    /// Observation year
    pub year: i32,

    /// International tourism receipts (current US$)
    #[serde(default)]
    pub tourism_receipts: Option<f64>,

    /// International tourism arrivals (number of trips)
    #[serde(default)]
    pub tourism_arrivals: Option<f64>,

    /// Tourism exports (% adjusted, current US$)
    #[serde(default)]
    pub tourism_exports: Option<f64>,

    /// International tourism departures (number of trips)
    #[serde(default)]
    pub tourism_departures: Option<f64>,

    /// International tourism expenditures (current US$)
    #[serde(default)]
    pub tourism_expenditures: Option<f64>,

    /// Gross domestic product (current US$)
    #[serde(default)]
    pub gdp: Option<f64>,

    /// Inflation, consumer prices (annual %)
    #[serde(default)]
    pub inflation: Option<f64>,

    /// Unemployment, total (% of labour force)
    #[serde(default)]
    pub unemployment: Option<f64>,
}

impl TourismRecord {
    /// All numeric indicators as (column name, value) pairs, in output order
    pub fn indicators(&self) -> [(&'static str, Option<f64>); 8] {
        [
            (columns::TOURISM_RECEIPTS, self.tourism_receipts),
            (columns::TOURISM_ARRIVALS, self.tourism_arrivals),
            (columns::TOURISM_EXPORTS, self.tourism_exports),
            (columns::TOURISM_DEPARTURES, self.tourism_departures),
            (columns::TOURISM_EXPENDITURES, self.tourism_expenditures),
            (columns::GDP, self.gdp),
            (columns::INFLATION, self.inflation),
            (columns::UNEMPLOYMENT, self.unemployment),
        ]
    }

    /// Grouping key shared by every record of the same country
    pub fn country_key(&self) -> (String, String) {
        (self.country.clone(), self.country_code.clone())
    }
}

// =============================================================================
// Country Average
// =============================================================================

/// Per-country averages of the numeric indicators
///
/// One row per distinct (country, country_code) pair, holding the mean of
/// each indicator across all years, rounded per the column rounding policy.
/// An indicator with no reported value in any year stays `None`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CountryAverage {
    pub country: String,
    pub country_code: String,
    pub tourism_receipts: Option<f64>,
    pub tourism_arrivals: Option<f64>,
    pub tourism_exports: Option<f64>,
    pub tourism_departures: Option<f64>,
    pub tourism_expenditures: Option<f64>,
    pub gdp: Option<f64>,
    pub inflation: Option<f64>,
    pub unemployment: Option<f64>,
}

impl CountryAverage {
    /// Create an average row with every indicator unset
    pub fn new(country: String, country_code: String) -> Self {
        Self {
            country,
            country_code,
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

    /// Look up an indicator value by column name
    pub fn indicator(&self, column: &str) -> Option<f64> {
        match column {
            columns::TOURISM_RECEIPTS => self.tourism_receipts,
            columns::TOURISM_ARRIVALS => self.tourism_arrivals,
            columns::TOURISM_EXPORTS => self.tourism_exports,
            columns::TOURISM_DEPARTURES => self.tourism_departures,
            columns::TOURISM_EXPENDITURES => self.tourism_expenditures,
            columns::GDP => self.gdp,
            columns::INFLATION => self.inflation,
            columns::UNEMPLOYMENT => self.unemployment,
            _ => None,
        }
    }

    /// Set an indicator value by column name
    ///
    /// Unknown column names are ignored; the schema is fixed and callers
    /// iterate [`INDICATOR_COLUMNS`].
    pub fn set_indicator(&mut self, column: &str, value: Option<f64>) {
        match column {
            columns::TOURISM_RECEIPTS => self.tourism_receipts = value,
            columns::TOURISM_ARRIVALS => self.tourism_arrivals = value,
            columns::TOURISM_EXPORTS => self.tourism_exports = value,
            columns::TOURISM_DEPARTURES => self.tourism_departures = value,
            columns::TOURISM_EXPENDITURES => self.tourism_expenditures = value,
            columns::GDP => self.gdp = value,
            columns::INFLATION => self.inflation = value,
            columns::UNEMPLOYMENT => self.unemployment = value,
            _ => {}
        }
    }

    /// True when every indicator has a value
    pub fn is_complete(&self) -> bool {
        INDICATOR_COLUMNS
            .iter()
            .all(|column| self.indicator(column).is_some())
    }
}
