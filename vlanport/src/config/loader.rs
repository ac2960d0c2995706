//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the per-user data directory under the home directory.
const DATA_DIR_NAME: &str = ".vlanport";

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use vlanport::config::ConfigLoader;
///
/// if let Some(config) = ConfigLoader::load_user_config().unwrap() {
///     println!("delimiter: {}", config.delimiter());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the user configuration file, `~/.vlanport/config.yaml`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(DATA_DIR_NAME).join("config.yaml"))
    }

    /// Load the user configuration file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config() -> Result<Option<Config>> {
        match Self::user_config_path() {
            Some(path) if path.exists() => Self::load_file(&path).map(Some),
            _ => Ok(None),
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(&contents)?)
    }
}
