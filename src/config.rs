//! Configuration for the cleaning pipelines.
//!
//! The original dataset-cleaning workflow baked its file locations into the
//! scripts themselves. Here every pipeline takes its paths as explicit
//! configuration, with defaults pointing at the conventional `data/` layout.

use crate::constants::{
    DEFAULT_AVERAGED_OUTPUT_PATH, DEFAULT_COUNTRY_REFERENCE_PATH, DEFAULT_FILTERED_OUTPUT_PATH,
    DEFAULT_TOURISM_DATA_PATH,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the country-filter pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Tourism economy dataset to filter
    pub records_path: PathBuf,

    /// Country reference table supplying the valid alpha-3 codes
    pub reference_path: PathBuf,

    /// Destination for the filtered dataset
    pub output_path: PathBuf,
}

impl FilterConfig {
    pub fn new(records_path: PathBuf, reference_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            records_path,
            reference_path,
            output_path,
        }
    }

    /// Check that both input files exist before any processing starts
    pub fn validate(&self) -> Result<()> {
        ensure_input_exists(&self.records_path)?;
        ensure_input_exists(&self.reference_path)?;
        Ok(())
    }

    /// Create the output directory if it does not exist yet
    pub fn prepare(&self) -> Result<()> {
        prepare_output_dir(&self.output_path)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            records_path: PathBuf::from(DEFAULT_TOURISM_DATA_PATH),
            reference_path: PathBuf::from(DEFAULT_COUNTRY_REFERENCE_PATH),
            output_path: PathBuf::from(DEFAULT_FILTERED_OUTPUT_PATH),
        }
    }
}

/// Configuration for the yearly-averaging pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageConfig {
    /// Tourism economy dataset to aggregate
    pub records_path: PathBuf,

    /// Destination for the per-country averaged dataset
    pub output_path: PathBuf,
}

impl AverageConfig {
    pub fn new(records_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            records_path,
            output_path,
        }
    }

    /// Check that the input file exists before any processing starts
    pub fn validate(&self) -> Result<()> {
        ensure_input_exists(&self.records_path)
    }

    /// Create the output directory if it does not exist yet
    pub fn prepare(&self) -> Result<()> {
        prepare_output_dir(&self.output_path)
    }
}

impl Default for AverageConfig {
    fn default() -> Self {
        Self {
            records_path: PathBuf::from(DEFAULT_TOURISM_DATA_PATH),
            output_path: PathBuf::from(DEFAULT_AVERAGED_OUTPUT_PATH),
        }
    }
}

fn ensure_input_exists(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::file_not_found(path.display().to_string()));
    }
    Ok(())
}

fn prepare_output_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating output directory: {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("failed to create output directory {}", parent.display()),
                    e,
                )
            })?;
        }
    }
    Ok(())
}
