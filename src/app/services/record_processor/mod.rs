//! Record processing for the tourism economy dataset
//!
//! This module holds the two cleaning pipelines applied to tourism records
//! after CSV parsing, along with their shared rounding and statistics types.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`filter`] - Restricting records to codes present in the country registry
//! - [`averaging`] - Collapsing multi-year records into per-country means
//! - [`rounding`] - The per-column decimal-precision policy
//! - [`stats`] - Pipeline statistics and reporting structures
//!
//! # Reporting Philosophy
//!
//! The pipeline functions never print. Counters and samples accumulate in
//! injected stats structs, diagnostics go through `tracing`, and progress is
//! reported through an optional `indicatif` handle owned by the caller, so
//! the cores stay testable in isolation from any console.
//!
//! # Example
//!
//! ```rust
//! use std::path::PathBuf;
//! use tourism_processor::app::services::country_registry::CountryRegistry;
//! use tourism_processor::app::services::record_processor::{FilterStats, filter_to_countries};
//!
//! let registry = CountryRegistry::new(PathBuf::from("data/countries_cleaned.csv"));
//! let mut stats = FilterStats::new();
//!
//! let retained = filter_to_countries(Vec::new(), &registry, &mut stats, None);
//!
//! assert!(retained.is_empty());
//! assert_eq!(stats.total_input, 0);
//! ```

pub mod averaging;
pub mod filter;
pub mod rounding;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use averaging::average_by_country;
pub use filter::filter_to_countries;
pub use rounding::{RoundingPolicy, policy_for, round_indicator};
pub use stats::{AggregationStats, FilterStats};
