//! Inventory command implementation.
//!
//! This module implements the `inventory` command, which displays the
//! inventory built from an availability file without allocating anything.

use crate::commands::load_inventory;
use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use vlanport::Inventory;

/// Show the inventory built from an availability file.
#[derive(Args)]
pub struct InventoryCommand {
    /// CSV file of available ports (vlan_id, device_id, primary_port)
    #[arg(value_name = "AVAILABILITY")]
    pub availability: PathBuf,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "VLANPORT_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for the inventory command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per VLAN (human-readable)
    Table,
    /// JSON format
    Json,
}

impl InventoryCommand {
    /// Execute the inventory command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let report = load_inventory(&self.availability, &config, global)?;

        match self.format {
            OutputFormat::Table => format_as_table(&report.inventory)?,
            OutputFormat::Json => format_as_json(&report.inventory)?,
        }

        Ok(())
    }
}

/// Format the inventory as one line per VLAN.
fn format_as_table(inventory: &Inventory) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{inventory}")?;
    Ok(())
}

/// Format the inventory as JSON.
fn format_as_json(inventory: &Inventory) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, inventory)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}
