//! Configuration file loading for reverie
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `REVERIE_*` environment variables (`__` separates section and key)
//! 2. `--config <path>` specified file
//! 3. Project root: `./reverie.toml` or `./.reverie.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/reverie/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    DEFAULT_CARDS_PATH, FileCardsConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileProviderConfig, FileReadingConfig,
};
pub use loader::{ConfigLoadError, ConfigLoader};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity, has_errors};
