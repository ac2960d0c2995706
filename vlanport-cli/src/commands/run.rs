//! Run command implementation.
//!
//! This module implements the `run` command, which builds the inventory
//! from an availability file, serves every request of a requests file in
//! order, and writes one output row per reserved port.

use crate::commands::load_inventory;
use crate::error::CliError;
use crate::utils::{load_configuration, read_rows, write_rows, GlobalOptions};
use clap::Args;
use std::fs::File;
use std::path::{Path, PathBuf};
use vlanport::records::{RequestRow, OUTPUT_HEADER};
use vlanport::{process_requests, Error, Request};

/// Serve allocation requests and write the reservations.
#[derive(Args)]
pub struct RunCommand {
    /// CSV file of available ports (vlan_id, device_id, primary_port)
    #[arg(value_name = "AVAILABILITY")]
    pub availability: PathBuf,

    /// CSV file of requests (request_id, redundant)
    #[arg(value_name = "REQUESTS")]
    pub requests: PathBuf,

    /// CSV file to write reservations to
    #[arg(value_name = "OUTPUT", required_unless_present = "dry_run")]
    pub output: Option<PathBuf>,

    /// Print reservations to stdout instead of writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

impl RunCommand {
    /// Execute the run command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = &global.logger;

        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Build the inventory; every availability row is read before any allocation
        let mut inventory = load_inventory(&self.availability, &config, global)?.inventory;
        logger.debug(format_args!("initial inventory:\n{inventory}"));

        // 3. Read and coerce requests, skipping malformed rows
        let requests = read_requests(&self.requests, &config, global)?;

        // 4. Serve requests in order
        let outcome = process_requests(&mut inventory, &requests);

        if let Some(stop) = &outcome.stopped {
            logger.early_stop(stop);
        }

        // 5. Nothing reserved: report failure and leave no output behind
        if outcome.is_empty() {
            return Err(Error::NoReservations.into());
        }

        // 6. Write reservations
        let rows = outcome.output_rows();
        if self.dry_run {
            let stdout = std::io::stdout();
            write_rows(stdout.lock(), &OUTPUT_HEADER, &rows, &config, Path::new("-"))?;
        } else if let Some(output) = self.output {
            let file = File::create(&output)?;
            write_rows(file, &OUTPUT_HEADER, &rows, &config, &output)?;
        } else {
            return Err(CliError::InvalidArguments(
                "an output file is required unless --dry-run is given".into(),
            ));
        }

        logger.summary(&outcome, requests.len());

        Ok(())
    }
}

/// Read the requests file, coercing each row and skipping malformed ones.
fn read_requests(
    path: &Path,
    config: &vlanport::Config,
    global: &GlobalOptions,
) -> Result<Vec<Request>, CliError> {
    let read = read_rows::<RequestRow>(path, &RequestRow::COLUMNS, config)?;
    for skipped in &read.skipped {
        global.logger.skipped_row("request", skipped);
    }

    let mut requests = Vec::with_capacity(read.rows.len());
    for (line, row) in read.rows {
        match row.parse(line) {
            Ok(request) => requests.push(request),
            Err(err) => global.logger.skipped_row("request", &err),
        }
    }

    Ok(requests)
}
