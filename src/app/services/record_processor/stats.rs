//! Pipeline statistics and reporting structures
//!
//! The pipeline cores never print; they accumulate counts and samples into
//! these structs, and the CLI layer decides how to present them.

use crate::constants::EXCLUDED_SAMPLE_LIMIT;

/// Statistics for the country-filter pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct FilterStats {
    /// Total number of input records
    pub total_input: usize,
    /// Number of distinct valid codes in the registry
    pub valid_codes: usize,
    /// Number of records retained
    pub retained: usize,
    /// Number of records excluded
    pub excluded: usize,
    /// Sample of distinct excluded entity names, for reporting
    pub excluded_sample: Vec<String>,
}

impl FilterStats {
    /// Create new empty filter statistics
    pub fn new() -> Self {
        Self {
            total_input: 0,
            valid_codes: 0,
            retained: 0,
            excluded: 0,
            excluded_sample: Vec::new(),
        }
    }

    /// Count an excluded record and sample its entity name
    ///
    /// The sample holds the first [`EXCLUDED_SAMPLE_LIMIT`] distinct names,
    /// in exclusion order.
    pub fn record_excluded(&mut self, name: &str) {
        self.excluded += 1;
        if self.excluded_sample.len() < EXCLUDED_SAMPLE_LIMIT
            && !self.excluded_sample.iter().any(|sampled| sampled == name)
        {
            self.excluded_sample.push(name.to_string());
        }
    }

    /// Calculate the retention rate as a percentage
    pub fn retention_rate(&self) -> f64 {
        if self.total_input == 0 {
            100.0
        } else {
            (self.retained as f64 / self.total_input as f64) * 100.0
        }
    }

    /// Get a summary of the filter run
    pub fn summary(&self) -> String {
        format!(
            "Filter summary: {} -> {} records ({:.1}% retained) | {} valid codes | {} excluded",
            self.total_input,
            self.retained,
            self.retention_rate(),
            self.valid_codes,
            self.excluded
        )
    }
}

impl Default for FilterStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics for the yearly-averaging pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationStats {
    /// Total number of input records
    pub total_input: usize,
    /// Number of distinct (country, country_code) groups produced
    pub groups: usize,
    /// Earliest year observed in the input
    pub year_min: Option<i32>,
    /// Latest year observed in the input
    pub year_max: Option<i32>,
    /// Output rows with a value for every indicator
    pub complete_rows: usize,
    /// Output rows with at least one null indicator
    pub rows_with_missing: usize,
}

impl AggregationStats {
    /// Create new empty aggregation statistics
    pub fn new() -> Self {
        Self {
            total_input: 0,
            groups: 0,
            year_min: None,
            year_max: None,
            complete_rows: 0,
            rows_with_missing: 0,
        }
    }

    /// Widen the observed year range with one record's year
    pub fn observe_year(&mut self, year: i32) {
        self.year_min = Some(self.year_min.map_or(year, |min| min.min(year)));
        self.year_max = Some(self.year_max.map_or(year, |max| max.max(year)));
    }

    /// Observed year range, if any records were seen
    pub fn year_range(&self) -> Option<(i32, i32)> {
        match (self.year_min, self.year_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    /// Get a summary of the averaging run
    pub fn summary(&self) -> String {
        let years = match self.year_range() {
            Some((min, max)) => format!("{}-{}", min, max),
            None => "n/a".to_string(),
        };
        format!(
            "Averaging summary: {} records -> {} countries | years {} | {} complete, {} with missing values",
            self.total_input, self.groups, years, self.complete_rows, self.rows_with_missing
        )
    }
}

impl Default for AggregationStats {
    fn default() -> Self {
        Self::new()
    }
}
