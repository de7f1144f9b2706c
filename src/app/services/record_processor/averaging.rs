//! Per-country averaging of tourism records
//!
//! Collapses multi-year records into one row per (country, country_code)
//! pair. Groups accumulate a running sum and count per indicator in a single
//! pass; null cells never enter a mean, and an indicator that is null across
//! a whole group stays null. Output rows are ordered by country name, then
//! code, so repeated runs produce identical files.

use super::rounding::round_indicator;
use super::stats::AggregationStats;
use crate::app::models::{CountryAverage, TourismRecord};
use crate::constants::{INDICATOR_COLUMNS, INDICATOR_COUNT};
use indicatif::ProgressBar;
use std::collections::BTreeMap;
use tracing::info;

/// Running sum and count for one indicator within one country group
#[derive(Debug, Clone, Copy, Default)]
struct RunningMean {
    sum: f64,
    count: u32,
}

impl RunningMean {
    fn add(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Average tourism records per country across years
///
/// Groups records by their (country, country_code) pair and computes the
/// arithmetic mean of every numeric indicator over the group's non-null
/// values, rounded per the column rounding policy. Every input row
/// contributes to its group; duplicate (country, year) rows are averaged
/// like any other rows, and year values pass through unvalidated.
///
/// # Arguments
///
/// * `records` - Input records to aggregate
/// * `stats` - Mutable reference to aggregation statistics
/// * `progress` - Optional progress bar advanced once per record
///
/// # Returns
///
/// One averaged row per distinct country, ordered by country name then code
pub fn average_by_country(
    records: &[TourismRecord],
    stats: &mut AggregationStats,
    progress: Option<&ProgressBar>,
) -> Vec<CountryAverage> {
    stats.total_input = records.len();

    let mut groups: BTreeMap<(String, String), [RunningMean; INDICATOR_COUNT]> = BTreeMap::new();

    for record in records {
        if let Some(pb) = progress {
            pb.inc(1);
        }
        stats.observe_year(record.year);

        let sums = groups
            .entry(record.country_key())
            .or_insert_with(|| [RunningMean::default(); INDICATOR_COUNT]);
        for (slot, (_, value)) in sums.iter_mut().zip(record.indicators()) {
            slot.add(value);
        }
    }

    let mut averages = Vec::with_capacity(groups.len());
    for ((country, country_code), sums) in groups {
        let mut average = CountryAverage::new(country, country_code);
        for (column, slot) in INDICATOR_COLUMNS.iter().copied().zip(sums.iter()) {
            average.set_indicator(column, slot.mean().map(|mean| round_indicator(column, mean)));
        }

        if average.is_complete() {
            stats.complete_rows += 1;
        } else {
            stats.rows_with_missing += 1;
        }
        averages.push(average);
    }
    stats.groups = averages.len();

    info!(
        "Yearly averaging complete: {} records -> {} countries",
        stats.total_input, stats.groups
    );

    averages
}
