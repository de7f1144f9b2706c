//! Country filtering for tourism records
//!
//! Restricts the tourism dataset to rows whose country code appears in the
//! country registry. The dataset mixes sovereign countries with aggregate
//! entities ("World", "Euro area", income groups); only codes present in the
//! reference table survive.

use super::stats::FilterStats;
use crate::app::models::TourismRecord;
use crate::app::services::country_registry::CountryRegistry;
use indicatif::ProgressBar;
use tracing::{debug, info};

/// Filter tourism records to valid country codes
///
/// Retains exactly the records whose `country_code` is in the registry,
/// preserving the input order. No record is modified or fabricated; an empty
/// registry yields an empty result.
///
/// # Arguments
///
/// * `records` - Input records to filter
/// * `registry` - Registry of valid alpha-3 codes
/// * `stats` - Mutable reference to filter statistics
/// * `progress` - Optional progress bar advanced once per record
///
/// # Returns
///
/// The retained records, in their original order
pub fn filter_to_countries(
    records: Vec<TourismRecord>,
    registry: &CountryRegistry,
    stats: &mut FilterStats,
    progress: Option<&ProgressBar>,
) -> Vec<TourismRecord> {
    stats.total_input = records.len();
    stats.valid_codes = registry.code_count();

    let mut retained = Vec::with_capacity(records.len());
    for record in records {
        if let Some(pb) = progress {
            pb.inc(1);
        }

        if registry.contains_code(&record.country_code) {
            retained.push(record);
        } else {
            debug!(
                "Excluding '{}' ({}): code not in reference table",
                record.country, record.country_code
            );
            stats.record_excluded(&record.country);
        }
    }
    stats.retained = retained.len();

    info!(
        "Country filtering complete: {} -> {} records ({} excluded)",
        stats.total_input, stats.retained, stats.excluded
    );

    retained
}
