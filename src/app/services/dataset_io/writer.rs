//! Atomic CSV writing
//!
//! Output rows are serialized into a named temporary file in the destination
//! directory, then persisted over the target path in one rename. A failure
//! at any point before the rename leaves the existing output untouched.

use crate::app::models::{CountryAverage, TourismRecord};
use crate::constants::{INDICATOR_COLUMNS, columns};
use crate::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Write the filtered tourism dataset, preserving the input schema
pub fn write_tourism_records(path: &Path, records: &[TourismRecord]) -> Result<()> {
    let mut header: Vec<&str> = vec![columns::COUNTRY, columns::COUNTRY_CODE, columns::YEAR];
    header.extend_from_slice(INDICATOR_COLUMNS);
    write_rows(path, &header, records)
}

/// Write the per-country averaged dataset
pub fn write_country_averages(path: &Path, averages: &[CountryAverage]) -> Result<()> {
    let mut header: Vec<&str> = vec![columns::COUNTRY, columns::COUNTRY_CODE];
    header.extend_from_slice(INDICATOR_COLUMNS);
    write_rows(path, &header, averages)
}

/// Serialize rows behind an explicit header into `path` via a temp file
///
/// The header is written unconditionally so an empty row set still produces
/// a schema-complete CSV file.
fn write_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| {
        Error::io(
            format!("failed to create temporary file in {}", dir.display()),
            e,
        )
    })?;

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut tmp);

        writer.write_record(header).map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "failed to write header row",
                Some(e),
            )
        })?;

        for row in rows {
            writer.serialize(row).map_err(|e| {
                Error::csv_parsing(path.display().to_string(), "failed to write row", Some(e))
            })?;
        }

        writer
            .flush()
            .map_err(|e| Error::io(format!("failed to flush output {}", path.display()), e))?;
    }

    tmp.persist(path).map_err(|e| {
        Error::io(
            format!("failed to persist output {}", path.display()),
            e.error,
        )
    })?;

    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
