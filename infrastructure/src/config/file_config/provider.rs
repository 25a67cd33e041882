//! Generation backend configuration from TOML (`[provider]` section)

use reverie_application::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completions backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Model name sent with the request (default: "gpt-4").
    pub model: String,
    /// Base URL of the API; `/v1/chat/completions` is appended.
    pub base_url: String,
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended - use env var instead).
    pub api_key: Option<String>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: "https://api.openai.com".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
        }
    }
}

impl FileProviderConfig {
    /// The configured key, falling back to the environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }
}
