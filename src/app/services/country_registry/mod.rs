//! Country registry service for O(1) country code lookups
//!
//! This module loads the country reference table and indexes its alpha-3
//! codes so the filter pipeline can test record membership in constant time.
//! Only distinct, non-blank codes enter the registry.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub mod loader;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use loader::LoadStats;

/// Registry of valid alpha-3 country codes
///
/// The registry is derived from the country reference table and backs the
/// filter pipeline's membership checks. It contains no duplicates and no
/// blank entries; an empty reference table yields an empty registry.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    /// Distinct alpha-3 codes for O(1) membership checks
    pub(crate) codes: HashSet<String>,

    /// Path the registry was loaded from
    pub(crate) source_path: PathBuf,
}

impl CountryRegistry {
    /// Create a new empty country registry
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            codes: HashSet::new(),
            source_path,
        }
    }

    /// Check whether a country code is in the registry (O(1) lookup)
    pub fn contains_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Number of distinct codes in the registry
    pub fn code_count(&self) -> usize {
        self.codes.len()
    }

    /// True when the registry holds no codes at all
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Path of the reference table this registry was built from
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}
