//! Card table configuration from TOML (`[cards]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the card meaning table
pub const DEFAULT_CARDS_PATH: &str = "data/cards_meaning.csv";

/// Raw card table configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCardsConfig {
    /// CSV file with one row per card
    pub path: PathBuf,
}

impl Default for FileCardsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CARDS_PATH),
        }
    }
}
