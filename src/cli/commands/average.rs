//! Average command implementation
//!
//! Orchestrates the yearly-averaging pipeline: load the tourism dataset,
//! collapse it into one row per country holding per-indicator means, and
//! write the averaged dataset atomically.

use super::shared::{create_progress_bar, setup_logging};
use crate::Result;
use crate::app::services::dataset_io::{read_tourism_records, write_country_averages};
use crate::app::services::record_processor::{AggregationStats, average_by_country};
use crate::cli::args::AverageArgs;
use crate::config::AverageConfig;
use colored::*;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info};

/// Average command runner
///
/// 1. Resolve and validate configuration
/// 2. Read the tourism dataset
/// 3. Average every numeric indicator per country across years
/// 4. Write the averaged dataset and report a summary
pub fn run_average(args: AverageArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting yearly averaging pipeline");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    config.validate()?;
    config.prepare()?;

    let records = read_tourism_records(&config.records_path)?;

    let progress = if args.quiet {
        None
    } else {
        Some(create_progress_bar(
            records.len() as u64,
            "Averaging records",
        ))
    };

    let mut stats = AggregationStats::new();
    let averages = average_by_country(&records, &mut stats, progress.as_ref());

    if let Some(pb) = &progress {
        pb.finish_with_message(format!("Averaged into {} countries", averages.len()));
    }

    write_country_averages(&config.output_path, &averages)?;

    if !args.quiet {
        print_summary(&stats, &config, start_time);
    }

    Ok(())
}

fn print_summary(stats: &AggregationStats, config: &AverageConfig, start_time: Instant) {
    println!();
    println!("{}", "Yearly averaging complete".green().bold());
    println!("  {} {}", "Input records:".cyan(), stats.total_input);
    match stats.year_range() {
        Some((min, max)) => println!("  {} {} - {}", "Years:".cyan(), min, max),
        None => println!("  {} {}", "Years:".cyan(), "n/a"),
    }
    println!("  {} {}", "Countries:".cyan(), stats.groups);
    println!(
        "  {} {}",
        "Countries with complete data:".cyan(),
        stats.complete_rows
    );
    println!(
        "  {} {}",
        "Countries with missing values:".cyan(),
        stats.rows_with_missing
    );
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
