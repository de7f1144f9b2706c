//! Country registry loading
//!
//! Loads the country reference table and collects its distinct alpha-3
//! codes. The reference table is consumed positionally via header lookup, so
//! auxiliary columns (country name, numeric code) may come and go without
//! affecting the load; only the `Alpha-3 code` column is required.

use super::CountryRegistry;
use crate::constants::columns;
use crate::{Error, Result};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, warn};

/// Statistics about a country registry load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadStats {
    /// Total number of reference rows read
    pub total_records: usize,

    /// Number of distinct codes loaded into the registry
    pub codes_loaded: usize,

    /// Number of rows skipped for a blank alpha-3 cell
    pub blank_codes: usize,

    /// Number of rows carrying a code already in the registry
    pub duplicate_codes: usize,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            codes_loaded: 0,
            blank_codes: 0,
            duplicate_codes: 0,
        }
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} country codes from {} reference rows ({} blank, {} duplicate)",
            self.codes_loaded, self.total_records, self.blank_codes, self.duplicate_codes
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryRegistry {
    /// Load the country registry from a reference CSV file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the country reference table
    ///
    /// # Returns
    ///
    /// * `Result<(CountryRegistry, LoadStats)>` - Registry and loading statistics
    ///
    /// # Errors
    ///
    /// * `Error::Io` if the file cannot be opened
    /// * `Error::MissingColumn` if no `Alpha-3 code` header is present
    /// * `Error::CsvParsing` for malformed reference rows
    pub fn load(path: &Path) -> Result<(Self, LoadStats)> {
        info!("Loading country registry from {}", path.display());

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

        let code_index = headers
            .iter()
            .position(|header| header == columns::ALPHA3_CODE)
            .ok_or_else(|| {
                Error::missing_column(path.display().to_string(), columns::ALPHA3_CODE)
            })?;

        let mut registry = Self::new(path.to_path_buf());
        let mut stats = LoadStats::new();

        for (index, row) in reader.records().enumerate() {
            let record = row.map_err(|e| {
                Error::csv_parsing(
                    path.display().to_string(),
                    format!("failed to read row at line {}", index + 2),
                    Some(e),
                )
            })?;
            stats.total_records += 1;

            let code = record.get(code_index).unwrap_or("");
            if code.trim().is_empty() {
                stats.blank_codes += 1;
                continue;
            }

            if registry.codes.insert(code.to_string()) {
                stats.codes_loaded += 1;
            } else {
                stats.duplicate_codes += 1;
                debug!(
                    "Duplicate alpha-3 code '{}' at line {}, keeping first",
                    code,
                    index + 2
                );
            }
        }

        if registry.is_empty() {
            warn!(
                "Country registry is empty: no alpha-3 codes found in {}",
                path.display()
            );
        }
        info!("{}", stats.summary());

        Ok((registry, stats))
    }
}
