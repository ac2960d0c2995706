//! Environment variable handling for configuration overrides.
//!
//! This module provides support for VLANPORT_* environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides the field delimiter.
pub const DELIMITER_ENV: &str = "VLANPORT_DELIMITER";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use vlanport::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(DELIMITER_ENV) {
            config.delimiter = Some(Self::parse_char(DELIMITER_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a single character, accepting `\t` as an escape for tab.
    pub(crate) fn parse_char(field: &str, s: &str) -> Result<char> {
        if s == "\\t" {
            return Ok('\t');
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Expected a single character, got '{s}'"),
            }),
        }
    }
}
