//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `run`: Serve allocation requests and write the reservations
//! - `inventory`: Show the inventory built from an availability file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod inventory;
pub mod run;

pub use completions::CompletionsCommand;
pub use inventory::InventoryCommand;
pub use run::RunCommand;

use crate::error::CliError;
use crate::utils::{read_rows, GlobalOptions};
use std::path::Path;
use vlanport::records::AvailabilityRow;
use vlanport::{BuildReport, Config, InventoryBuilder};

/// Read an availability file and build the inventory, reporting skipped rows.
pub(crate) fn load_inventory(
    path: &Path,
    config: &Config,
    global: &GlobalOptions,
) -> Result<BuildReport, CliError> {
    let read = read_rows::<AvailabilityRow>(path, &AvailabilityRow::COLUMNS, config)?;
    let row_count = read.total();
    for skipped in &read.skipped {
        global.logger.skipped_row("availability", skipped);
    }

    let report = InventoryBuilder::from_rows(read.rows);
    for skipped in &report.skipped {
        global.logger.skipped_row("availability", skipped);
    }

    global.logger.info(format_args!(
        "built inventory of {} VLAN(s) and {} device(s) from {} of {row_count} row(s)",
        report.inventory.vlan_count(),
        report.inventory.device_count(),
        report.rows_accepted,
    ));

    Ok(report)
}
