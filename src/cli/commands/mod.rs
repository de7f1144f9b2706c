//! Command implementations for the tourism processor CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and summary printing for the CLI interface. Each command is implemented
//! in its own module:
//! - `filter`: restrict the dataset to valid sovereign countries
//! - `average`: collapse multi-year records into per-country averages

pub mod average;
pub mod filter;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner for the tourism processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Filter(filter_args)) => filter::run_filter(filter_args),
        Some(Commands::Average(average_args)) => average::run_average(average_args),
        None => Err(Error::configuration("no command specified")),
    }
}
