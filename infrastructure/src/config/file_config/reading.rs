//! Reading configuration from TOML (`[reading]` section)

use reverie_domain::{DEFAULT_CLOSING_REMARK, DEFAULT_SYSTEM_PROMPT};
use serde::{Deserialize, Serialize};

/// Texts used around the external interpretation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReadingConfig {
    /// System instruction sent with every request
    pub system_prompt: String,
    /// Appended to the generated interpretation
    pub closing_remark: String,
}

impl Default for FileReadingConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            closing_remark: DEFAULT_CLOSING_REMARK.to_string(),
        }
    }
}
