//! Error types for the vlanport library.
//!
//! This module provides the error hierarchy for the vlanport library,
//! using `thiserror` for ergonomic error handling. Running out of devices
//! is deliberately absent here: exhaustion is an expected outcome of
//! allocation and is reported through [`crate::processor::EarlyStop`].

use thiserror::Error;

/// Malformed input rows are reported, not raised: they are skipped and
/// collected by the caller.
pub use crate::records::RowError;

/// Result type alias for operations that may fail with a vlanport error.
///
/// # Examples
///
/// ```
/// use vlanport::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the vlanport library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Request processing finished without producing a single reservation.
    #[error("failed to reserve ports: no reservations were produced")]
    NoReservations,
}

impl Error {
    /// Check if error is a configuration or validation problem.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlanport::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "delimiter".to_string(),
    ///     message: "must be ASCII".to_string(),
    /// };
    /// assert!(err.is_configuration());
    /// assert!(!Error::NoReservations.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Validation { .. })
    }
}
