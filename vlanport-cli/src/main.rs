//! Main entry point for the vlanport CLI.
//!
//! This is the command-line interface for the vlanport allocator.
//! It provides commands for:
//! - `run`: Serve allocation requests against an availability file
//! - `inventory`: Show the inventory built from an availability file
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = vlanport::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        config: cli.config,
        delimiter: cli.delimiter,
        logger,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Run(cmd) => cmd.execute(&global),
        cli::Command::Inventory(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
