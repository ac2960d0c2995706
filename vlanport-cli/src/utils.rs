//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: global options,
//! configuration loading, and reading and writing delimited files.

use crate::error::CliError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use vlanport::{Config, ConfigBuilder, Logger, RowError};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Field delimiter override.
    pub delimiter: Option<char>,

    /// Logger for operator-facing diagnostics.
    pub logger: Logger,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file (`--config` or the user config)
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    if global.delimiter.is_some() {
        builder = builder.with_config(Config {
            delimiter: global.delimiter,
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Convert csv::Error to CliError, naming the file involved.
fn csv_error(path: &Path, e: csv::Error) -> CliError {
    CliError::Io(io::Error::new(
        io::ErrorKind::Other,
        format!("{}: {e}", path.display()),
    ))
}

/// Rows read from a delimited file.
#[derive(Debug)]
pub struct RowsRead<T> {
    /// Decoded rows paired with their 1-based line numbers.
    pub rows: Vec<(u64, T)>,
    /// Rows that could not be decoded, in file order.
    pub skipped: Vec<RowError>,
}

impl<T> RowsRead<T> {
    /// Number of data rows in the file, decoded or not.
    pub fn total(&self) -> usize {
        self.rows.len() + self.skipped.len()
    }
}

/// Read every data row of a delimited file with a header row.
///
/// Columns are matched by header name and must all be present; a missing
/// column or an unreadable file is fatal. A row with the wrong number of
/// fields or a field that is not valid UTF-8 is only skipped.
pub fn read_rows<T: DeserializeOwned>(
    path: &Path,
    columns: &[&str],
    config: &Config,
) -> Result<RowsRead<T>, CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter_byte())
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    if let Some(missing) = columns.iter().find(|c| !headers.iter().any(|h| h == **c)) {
        return Err(CliError::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: missing column '{missing}'", path.display()),
        )));
    }
    let byte_headers = headers.as_byte_record().clone();

    let mut read = RowsRead {
        rows: Vec::new(),
        skipped: Vec::new(),
    };
    for record in reader.byte_records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let line = record.position().map_or(0, csv::Position::line);

        if record.len() != byte_headers.len() {
            read.skipped.push(RowError {
                row: line,
                field: "record".into(),
                value: joined(&record, config.delimiter()),
                reason: format!(
                    "expected {} fields, found {}",
                    byte_headers.len(),
                    record.len()
                ),
            });
            continue;
        }

        match record.deserialize(Some(&byte_headers)) {
            Ok(row) => read.rows.push((line, row)),
            Err(e) => match undecodable_row(line, &headers, &record, &e) {
                Some(skipped) => read.skipped.push(skipped),
                None => return Err(csv_error(path, e)),
            },
        }
    }

    Ok(read)
}

/// Describe a row whose fields could not be decoded.
fn undecodable_row(
    line: u64,
    headers: &csv::StringRecord,
    record: &csv::ByteRecord,
    e: &csv::Error,
) -> Option<RowError> {
    let csv::ErrorKind::Deserialize { err, .. } = e.kind() else {
        return None;
    };

    let index = err.field().and_then(|i| usize::try_from(i).ok());
    let (field, value) = match index.and_then(|i| Some((headers.get(i)?, record.get(i)?))) {
        Some((name, bytes)) => (name.to_string(), String::from_utf8_lossy(bytes).into_owned()),
        None => ("record".to_string(), String::new()),
    };
    let reason = match err.kind() {
        csv::DeserializeErrorKind::InvalidUtf8(_) => "not valid UTF-8".to_string(),
        other => other.to_string(),
    };

    Some(RowError {
        row: line,
        field,
        value,
        reason,
    })
}

/// Render a raw record for diagnostics.
fn joined(record: &csv::ByteRecord, delimiter: char) -> String {
    record
        .iter()
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

/// Write a header row followed by serialized rows.
pub fn write_rows<W: Write, T: Serialize>(
    writer: W,
    header: &[&str],
    rows: &[T],
    config: &Config,
    path: &Path,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter_byte())
        .has_headers(false)
        .from_writer(writer);

    writer
        .write_record(header)
        .map_err(|e| csv_error(path, e))?;

    for row in rows {
        writer.serialize(row).map_err(|e| csv_error(path, e))?;
    }

    writer.flush()?;

    Ok(())
}
