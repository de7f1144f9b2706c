//! CSV reading with header validation
//!
//! Loads the tourism economy dataset into typed records. The header row is
//! checked for the required columns before any row is deserialized; numeric
//! indicator columns are optional and read as null when blank or absent.

use crate::app::models::TourismRecord;
use crate::constants::REQUIRED_TOURISM_COLUMNS;
use crate::{Error, Result};
use csv::StringRecord;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Read the tourism economy dataset from a CSV file
///
/// # Arguments
///
/// * `path` - Path to the tourism economy CSV file
///
/// # Returns
///
/// All rows of the file as typed records, in file order
///
/// # Errors
///
/// * `Error::Io` if the file cannot be opened
/// * `Error::MissingColumn` if `country`, `country_code`, or `year` is absent
/// * `Error::CsvParsing` if a row cannot be parsed
pub fn read_tourism_records(path: &Path) -> Result<Vec<TourismRecord>> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open {}", path.display()), e))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "failed to read header row",
                Some(e),
            )
        })?
        .clone();
    ensure_columns(&headers, REQUIRED_TOURISM_COLUMNS, path)?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<TourismRecord>().enumerate() {
        let record = row.map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                // +2: one for the header row, one for 1-based line numbers
                format!("failed to parse row at line {}", index + 2),
                Some(e),
            )
        })?;
        records.push(record);
    }

    info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Check that every required column is present in a header row
///
/// # Errors
///
/// * `Error::MissingColumn` naming the first absent column
pub fn ensure_columns(headers: &StringRecord, required: &[&str], file: &Path) -> Result<()> {
    for column in required {
        if !headers.iter().any(|header| header == *column) {
            return Err(Error::missing_column(file.display().to_string(), *column));
        }
    }
    Ok(())
}
