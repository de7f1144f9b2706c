//! Command-line argument definitions for the tourism processor
//!
//! This module defines the CLI interface using the clap derive API. Every
//! path has a default matching the conventional `data/` layout of the
//! dataset, so both pipelines run with no arguments at all.

use crate::config::{AverageConfig, FilterConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the tourism dataset processor
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tourism-processor",
    version,
    about = "Clean the world tourism economy dataset",
    long_about = "A tool that cleans the world tourism economy dataset. The filter command \
                  restricts records to sovereign countries using a reference list of alpha-3 \
                  codes; the average command collapses multi-year records into one row per \
                  country holding the mean of each economic indicator."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the tourism processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Filter the tourism dataset to valid sovereign countries
    Filter(FilterArgs),
    /// Average the tourism dataset per country across years
    Average(AverageArgs),
}

/// Arguments for the filter command
#[derive(Debug, Clone, Parser)]
pub struct FilterArgs {
    /// Input path to the tourism economy dataset
    ///
    /// If not specified, defaults to data/world_tourism_economy_data.csv
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input path to the tourism economy CSV file"
    )]
    pub input_path: Option<PathBuf>,

    /// Path to the country reference table
    ///
    /// Must contain an `Alpha-3 code` column. If not specified, defaults to
    /// data/countries_cleaned.csv
    #[arg(
        short = 'r',
        long = "reference",
        value_name = "PATH",
        help = "Path to the country reference CSV file"
    )]
    pub reference_path: Option<PathBuf>,

    /// Output path for the filtered dataset
    ///
    /// Will be created or replaced atomically. If not specified, defaults to
    /// data/world_tourism_economy_data_countries_only.csv
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for the filtered CSV file"
    )]
    pub output_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress progress bars and the end-of-run summary
    #[arg(short = 'q', long = "quiet", help = "Only show errors")]
    pub quiet: bool,
}

impl FilterArgs {
    /// Resolve the logging level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        resolve_log_level(self.verbose)
    }

    /// Resolve CLI overrides against the default configuration
    pub fn to_config(&self) -> FilterConfig {
        let defaults = FilterConfig::default();
        FilterConfig::new(
            self.input_path.clone().unwrap_or(defaults.records_path),
            self.reference_path.clone().unwrap_or(defaults.reference_path),
            self.output_path.clone().unwrap_or(defaults.output_path),
        )
    }
}

/// Arguments for the average command
#[derive(Debug, Clone, Parser)]
pub struct AverageArgs {
    /// Input path to the tourism economy dataset
    ///
    /// If not specified, defaults to data/world_tourism_economy_data.csv
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input path to the tourism economy CSV file"
    )]
    pub input_path: Option<PathBuf>,

    /// Output path for the averaged dataset
    ///
    /// Will be created or replaced atomically. If not specified, defaults to
    /// data/world_tourism_economy_data_averaged.csv
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for the averaged CSV file"
    )]
    pub output_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress progress bars and the end-of-run summary
    #[arg(short = 'q', long = "quiet", help = "Only show errors")]
    pub quiet: bool,
}

impl AverageArgs {
    /// Resolve the logging level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        resolve_log_level(self.verbose)
    }

    /// Resolve CLI overrides against the default configuration
    pub fn to_config(&self) -> AverageConfig {
        let defaults = AverageConfig::default();
        AverageConfig::new(
            self.input_path.clone().unwrap_or(defaults.records_path),
            self.output_path.clone().unwrap_or(defaults.output_path),
        )
    }
}

fn resolve_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_FILTERED_OUTPUT_PATH, DEFAULT_TOURISM_DATA_PATH};

    #[test]
    fn test_filter_args_resolve_defaults() {
        let args = Args::try_parse_from(["tourism-processor", "filter"]).unwrap();
        let Some(Commands::Filter(filter_args)) = args.command else {
            panic!("expected filter subcommand");
        };

        let config = filter_args.to_config();
        assert_eq!(config.records_path, PathBuf::from(DEFAULT_TOURISM_DATA_PATH));
        assert_eq!(
            config.output_path,
            PathBuf::from(DEFAULT_FILTERED_OUTPUT_PATH)
        );
    }

    #[test]
    fn test_filter_args_overrides_win() {
        let args = Args::try_parse_from([
            "tourism-processor",
            "filter",
            "-i",
            "in.csv",
            "-r",
            "ref.csv",
            "-o",
            "out.csv",
        ])
        .unwrap();
        let Some(Commands::Filter(filter_args)) = args.command else {
            panic!("expected filter subcommand");
        };

        let config = filter_args.to_config();
        assert_eq!(config.records_path, PathBuf::from("in.csv"));
        assert_eq!(config.reference_path, PathBuf::from("ref.csv"));
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_verbosity_maps_to_log_levels() {
        for (flags, expected) in [
            (vec!["tourism-processor", "average"], "warn"),
            (vec!["tourism-processor", "average", "-v"], "info"),
            (vec!["tourism-processor", "average", "-vv"], "debug"),
            (vec!["tourism-processor", "average", "-vvv"], "trace"),
        ] {
            let args = Args::try_parse_from(flags).unwrap();
            let Some(Commands::Average(average_args)) = args.command else {
                panic!("expected average subcommand");
            };
            assert_eq!(average_args.get_log_level(), expected);
        }
    }

    #[test]
    fn test_no_subcommand_parses() {
        let args = Args::try_parse_from(["tourism-processor"]).unwrap();
        assert!(args.command.is_none());
    }
}
