use clap::Parser;
use std::process;
use tourism_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Tourism Processor - World Tourism Economy Dataset Cleaner");
    println!("=========================================================");
    println!();
    println!("Clean the world tourism economy dataset by filtering records to");
    println!("sovereign countries and averaging indicators per country across years.");
    println!();
    println!("USAGE:");
    println!("    tourism-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    filter      Keep only records whose country code is in the reference table");
    println!("    average     Collapse multi-year records into per-country indicator averages");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Filter with the default data/ layout:");
    println!("    tourism-processor filter");
    println!();
    println!("    # Filter with explicit paths:");
    println!("    tourism-processor filter --input tourism.csv --reference countries.csv \\");
    println!("                             --output countries_only.csv");
    println!();
    println!("    # Average the dataset per country:");
    println!("    tourism-processor average --input tourism.csv --output averaged.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    tourism-processor <COMMAND> --help");
}
