//! Operator-facing diagnostics on stderr.
//!
//! A run talks to the operator about three things: input rows that were
//! skipped, the request at which processing stopped early, and a summary of
//! what was served. [`Logger`] has a method for each, gated by [`LogLevel`].
//! Library internals use the `log` facade instead and stay silent unless the
//! embedding program installs a `log` backend.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::processor::{EarlyStop, ProcessOutcome};
use crate::records::RowError;

/// Environment variable selecting the default log level.
pub const LOG_MODE_ENV: &str = "VLANPORT_LOG_MODE";

/// How much the CLI tells the operator, from least to most.
///
/// # Examples
///
/// ```
/// use vlanport::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!("Verbose".parse::<LogLevel>(), Ok(LogLevel::Verbose));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing but fatal errors.
    Quiet,
    /// Skipped rows and early stops.
    Normal,
    /// Also the inventory dump and the served summary.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// Writes diagnostics to stderr according to its level.
///
/// # Examples
///
/// ```
/// use vlanport::records::AvailabilityRow;
/// use vlanport::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// if let Err(err) = AvailabilityRow::new("x", "0", "1").parse(3) {
///     // WARN: skipping availability row 3: rejected vlan_id 'x': ...
///     logger.skipped_row("availability", &err);
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the level this logger was created with.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Reports an input row that was left out of the run.
    pub fn skipped_row(&self, source: &str, err: &RowError) {
        self.warn(format_args!("skipping {source} {err}"));
    }

    /// Reports the request at which processing stopped.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlanport::{process_requests, Inventory, LogLevel, Logger, Request};
    ///
    /// let outcome = process_requests(&mut Inventory::default(), &[Request::new("a", false)]);
    /// if let Some(stop) = &outcome.stopped {
    ///     // WARN: no more available devices to process requests from request id a onwards ...
    ///     Logger::new(LogLevel::Normal).early_stop(stop);
    /// }
    /// ```
    pub fn early_stop(&self, stop: &EarlyStop) {
        self.warn(stop);
    }

    /// Reports how many of `requested` requests were served.
    pub fn summary(&self, outcome: &ProcessOutcome, requested: usize) {
        self.info(format_args!(
            "served {} of {requested} request(s) with {} reservation(s)",
            outcome.served,
            outcome.reservations.len()
        ));
    }

    /// Logs a warning, unless quiet.
    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Logs an informational message when verbose.
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Logs a debug message when verbose.
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }

    fn emit(&self, min: LogLevel, tag: &str, message: impl fmt::Display) {
        if let Some(line) = self.render(min, tag, message) {
            eprintln!("{line}");
        }
    }

    fn render(&self, min: LogLevel, tag: &str, message: impl fmt::Display) -> Option<String> {
        (self.level >= min).then(|| format!("{tag}: {message}"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Picks the level from CLI flags, then `VLANPORT_LOG_MODE`, then Normal.
///
/// `verbose` wins over `quiet`. An unparsable environment value is ignored.
///
/// # Examples
///
/// ```
/// use vlanport::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or(LogLevel::Normal)
    };
    Logger::new(level)
}
