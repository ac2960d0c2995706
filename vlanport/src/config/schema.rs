//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Field delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = ',';

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use vlanport::config::Config;
///
/// let config: Config = serde_yaml::from_str("delimiter: ';'\n").unwrap();
/// assert_eq!(config.delimiter, Some(';'));
/// assert_eq!(config.delimiter_byte(), b';');
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Field delimiter for all inputs and the output.
    ///
    /// Data fields are never trimmed; request ids are copied verbatim and
    /// integer fields tolerate surrounding whitespace on their own.
    pub delimiter: Option<char>,
}

impl Config {
    /// The configured delimiter, or [`DEFAULT_DELIMITER`].
    #[must_use]
    pub fn delimiter(&self) -> char {
        self.delimiter.unwrap_or(DEFAULT_DELIMITER)
    }

    /// The delimiter as a byte, for CSV readers and writers.
    ///
    /// Falls back to the default for a non-ASCII delimiter, which
    /// [`Config::validate`] rejects.
    #[must_use]
    pub fn delimiter_byte(&self) -> u8 {
        u8::try_from(self.delimiter()).unwrap_or(b',')
    }

    /// Overwrites every field that is set in `source`.
    pub fn merge_from(&mut self, source: &Config) {
        if source.delimiter.is_some() {
            self.delimiter = source.delimiter;
        }
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the delimiter is not a single ASCII
    /// punctuation or whitespace character, or is a quote or line break.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlanport::config::Config;
    ///
    /// let tabs = Config { delimiter: Some('\t') };
    /// assert!(tabs.validate().is_ok());
    ///
    /// let letter = Config { delimiter: Some('x') };
    /// assert!(letter.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let delimiter = self.delimiter();
        let message = if !delimiter.is_ascii() {
            Some("must be an ASCII character")
        } else if delimiter.is_ascii_alphanumeric() {
            Some("must not be a letter or digit")
        } else if matches!(delimiter, '"' | '\n' | '\r') {
            Some("must not be a quote or line break")
        } else {
            None
        };

        match message {
            Some(message) => Err(Error::Validation {
                field: "delimiter".into(),
                message: format!("{message} (got {delimiter:?})"),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.delimiter(), ',');
        assert_eq!(config.delimiter_byte(), b',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_overwrites_set_fields_only() {
        let mut base = Config {
            delimiter: Some(';'),
        };
        base.merge_from(&Config { delimiter: None });
        assert_eq!(base.delimiter, Some(';'));

        base.merge_from(&Config {
            delimiter: Some('|'),
        });
        assert_eq!(base.delimiter, Some('|'));
    }

    #[test]
    fn test_validate_rejects_bad_delimiters() {
        for bad in ['a', '7', '"', '\n', '\r', 'é'] {
            let config = Config {
                delimiter: Some(bad),
            };
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("delimiter"), "{bad:?}");
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = serde_yaml::from_str("separator: ';'\n");
        assert!(result.is_err());

        let result: std::result::Result<Config, _> =
            serde_yaml::from_str("delimiter: ';'\ntrim_fields: true\n");
        assert!(result.is_err());
    }
}
