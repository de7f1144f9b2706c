//! Filter command implementation
//!
//! Orchestrates the country-filter pipeline: load the tourism dataset and
//! the country registry, drop records whose code is not in the reference
//! table, and write the filtered dataset atomically.

use super::shared::{create_progress_bar, setup_logging};
use crate::Result;
use crate::app::services::country_registry::{CountryRegistry, LoadStats};
use crate::app::services::dataset_io::{read_tourism_records, write_tourism_records};
use crate::app::services::record_processor::{FilterStats, filter_to_countries};
use crate::cli::args::FilterArgs;
use crate::config::FilterConfig;
use colored::*;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info};

/// Filter command runner
///
/// 1. Resolve and validate configuration
/// 2. Read the tourism dataset and load the country registry
/// 3. Filter records to codes present in the registry
/// 4. Write the filtered dataset and report a summary
pub fn run_filter(args: FilterArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting country filter pipeline");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    config.validate()?;
    config.prepare()?;

    let records = read_tourism_records(&config.records_path)?;
    let (registry, load_stats) = CountryRegistry::load(&config.reference_path)?;

    let progress = if args.quiet {
        None
    } else {
        Some(create_progress_bar(
            records.len() as u64,
            "Filtering records",
        ))
    };

    let mut stats = FilterStats::new();
    let retained = filter_to_countries(records, &registry, &mut stats, progress.as_ref());

    if let Some(pb) = &progress {
        pb.finish_with_message(format!("Filtered to {} records", retained.len()));
    }

    write_tourism_records(&config.output_path, &retained)?;

    if !args.quiet {
        print_summary(&stats, &load_stats, &config, start_time);
    }

    Ok(())
}

fn print_summary(
    stats: &FilterStats,
    load_stats: &LoadStats,
    config: &FilterConfig,
    start_time: Instant,
) {
    println!();
    println!("{}", "Country filtering complete".green().bold());
    println!("  {} {}", "Input records:".cyan(), stats.total_input);
    println!(
        "  {} {} ({} reference rows)",
        "Valid country codes:".cyan(),
        stats.valid_codes,
        load_stats.total_records
    );
    println!(
        "  {} {} ({:.1}%)",
        "Retained records:".cyan(),
        stats.retained,
        stats.retention_rate()
    );
    println!("  {} {}", "Excluded records:".cyan(), stats.excluded);
    if !stats.excluded_sample.is_empty() {
        println!(
            "  {} {}",
            "Excluded entities:".cyan(),
            stats.excluded_sample.join(", ")
        );
    }
    println!(
        "  {} {}",
        "Output:".cyan(),
        config.output_path.display()
    );
    println!(
        "  {} {}",
        "Elapsed:".cyan(),
        HumanDuration(start_time.elapsed())
    );
}
