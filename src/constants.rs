//! Application constants for the tourism processor
//!
//! This module contains the column names, rounding policy tables, and
//! default file locations used throughout the application.

// =============================================================================
// Default File Locations
// =============================================================================

/// Default path to the tourism economy dataset
pub const DEFAULT_TOURISM_DATA_PATH: &str = "data/world_tourism_economy_data.csv";

/// Default path to the country reference table
pub const DEFAULT_COUNTRY_REFERENCE_PATH: &str = "data/countries_cleaned.csv";

/// Default output path for the country-filtered dataset
pub const DEFAULT_FILTERED_OUTPUT_PATH: &str = "data/world_tourism_economy_data_countries_only.csv";

/// Default output path for the per-country averaged dataset
pub const DEFAULT_AVERAGED_OUTPUT_PATH: &str = "data/world_tourism_economy_data_averaged.csv";

// =============================================================================
// Column Names
// =============================================================================

/// Column names as they appear in the input CSV headers
pub mod columns {
    /// Country display name in the tourism dataset
    pub const COUNTRY: &str = "country";

    /// Alpha-3 style country code in the tourism dataset
    pub const COUNTRY_CODE: &str = "country_code";

    /// Observation year in the tourism dataset
    pub const YEAR: &str = "year";

    /// Alpha-3 code column in the country reference table
    pub const ALPHA3_CODE: &str = "Alpha-3 code";

    pub const TOURISM_RECEIPTS: &str = "tourism_receipts";
    pub const TOURISM_ARRIVALS: &str = "tourism_arrivals";
    pub const TOURISM_EXPORTS: &str = "tourism_exports";
    pub const TOURISM_DEPARTURES: &str = "tourism_departures";
    pub const TOURISM_EXPENDITURES: &str = "tourism_expenditures";
    pub const GDP: &str = "gdp";
    pub const INFLATION: &str = "inflation";
    pub const UNEMPLOYMENT: &str = "unemployment";
}

/// Columns that must be present in the tourism dataset header
pub const REQUIRED_TOURISM_COLUMNS: &[&str] =
    &[columns::COUNTRY, columns::COUNTRY_CODE, columns::YEAR];

/// Number of numeric indicator columns
pub const INDICATOR_COUNT: usize = INDICATOR_COLUMNS.len();

/// Numeric indicator columns, in output order
pub const INDICATOR_COLUMNS: &[&str] = &[
    columns::TOURISM_RECEIPTS,
    columns::TOURISM_ARRIVALS,
    columns::TOURISM_EXPORTS,
    columns::TOURISM_DEPARTURES,
    columns::TOURISM_EXPENDITURES,
    columns::GDP,
    columns::INFLATION,
    columns::UNEMPLOYMENT,
];

// =============================================================================
// Rounding Policy
// =============================================================================

/// Monetary amounts and counts: averaged values round to whole numbers
pub const WHOLE_NUMBER_COLUMNS: &[&str] = &[
    columns::TOURISM_RECEIPTS,
    columns::TOURISM_ARRIVALS,
    columns::TOURISM_EXPORTS,
    columns::TOURISM_DEPARTURES,
    columns::TOURISM_EXPENDITURES,
    columns::GDP,
];

/// Rates and percentages: averaged values round to two decimal places
pub const RATE_COLUMNS: &[&str] = &[columns::INFLATION, columns::UNEMPLOYMENT];

/// Decimal places kept for monetary/count indicators
pub const WHOLE_NUMBER_DECIMALS: u32 = 0;

/// Decimal places kept for rate/percentage indicators
pub const RATE_DECIMALS: u32 = 2;

// =============================================================================
// Reporting
// =============================================================================

/// Maximum number of distinct excluded country names kept for reporting
pub const EXCLUDED_SAMPLE_LIMIT: usize = 10;
