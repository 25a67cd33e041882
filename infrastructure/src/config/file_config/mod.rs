//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is optional; missing keys fall back to the defaults.

mod cards;
mod logging;
mod output;
mod provider;
mod reading;

pub use cards::{DEFAULT_CARDS_PATH, FileCardsConfig};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use reading::FileReadingConfig;

use super::validation::{ConfigIssue, ConfigIssueCode, Severity};
use reverie_application::ReadingParams;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Card meaning table
    pub cards: FileCardsConfig,
    /// Generation backend
    pub provider: FileProviderConfig,
    /// Prompt texts
    pub reading: FileReadingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Parameters for the interpretation use case
    pub fn reading_params(&self) -> ReadingParams {
        ReadingParams::default()
            .with_model(self.provider.model.trim())
            .with_system_prompt(&self.reading.system_prompt)
            .with_closing_remark(&self.reading.closing_remark)
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.provider.model.trim().is_empty() {
            issues.push(ConfigIssue::empty_field("provider.model"));
        }
        if self.provider.base_url.trim().is_empty() {
            issues.push(ConfigIssue::empty_field("provider.base_url"));
        }
        // No table means no reading at all
        if self.cards.path.as_os_str().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                ..ConfigIssue::empty_field("cards.path")
            });
        }
        if self.reading.system_prompt.trim().is_empty() {
            issues.push(ConfigIssue::empty_field("reading.system_prompt"));
        }

        if self.provider.resolve_api_key().is_none() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingApiKey {
                    env_var: self.provider.api_key_env.clone(),
                },
                message: format!(
                    "No API key: set {} or provider.api_key; interpretations will fail",
                    self.provider.api_key_env
                ),
            });
        }

        issues
    }
}
