use clap::Parser;
use riptide::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Riptide - Academic Performance Report Parser");
    println!("============================================");
    println!();
    println!("Extract per-class academic performance records from fixed-layout");
    println!("plain-text report exports into CSV, JSON lines or a terminal table.");
    println!();
    println!("USAGE:");
    println!("    riptide <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse a report export and write the extracted records");
    println!("    metadata    Inspect the metadata registry the parser validates against");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a report with the default metadata registry:");
    println!("    riptide parse relatorio-2023-1.txt");
    println!();
    println!("    # Parse with explicit metadata and CSV output:");
    println!("    riptide parse relatorio-2023-1.txt --metadata metadata.toml \\");
    println!("                  --output records.csv --output-format csv");
    println!();
    println!("    # Check a report without writing anything:");
    println!("    riptide parse relatorio-2023-1.txt --dry-run -v");
    println!();
    println!("    # Inspect the metadata registry:");
    println!("    riptide metadata --metadata metadata.toml");
    println!();
    println!("For detailed help on any command, use:");
    println!("    riptide <COMMAND> --help");
}
