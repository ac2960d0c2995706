//! Configuration system for vlanport.
//!
//! Settings only affect how tabular inputs and outputs are read and written;
//! allocation itself has no tunables.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (VLANPORT_*)
//! 3. Explicit config file, or the user config (`~/.vlanport/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use vlanport::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         delimiter: Some(';'),
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.delimiter_byte(), b';');
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, DEFAULT_DELIMITER};
