//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, InventoryCommand, RunCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for allocating device ports on VLANs.
#[derive(Parser)]
#[command(name = "vlanport")]
#[command(version, about = "Allocate device ports on VLANs", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of the user config
    #[arg(long, value_name = "PATH", global = true, env = "VLANPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Field delimiter for all inputs and the output
    #[arg(long, value_name = "CHAR", global = true)]
    pub delimiter: Option<char>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Serve allocation requests and write the reservations
    Run(RunCommand),

    /// Show the inventory built from an availability file
    Inventory(InventoryCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
