//! OpenAI-compatible gateway
//!
//! Implements [`LlmGateway`] over `POST {base_url}/v1/chat/completions`.

use super::session::OpenAiSession;
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use reverie_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use tracing::info;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub struct OpenAiGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl OpenAiGateway {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: completions_endpoint(base_url),
            api_key,
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }

    /// Build from the `[provider]` section, resolving the API key now
    pub fn from_config(config: &FileProviderConfig) -> Self {
        let gateway = Self {
            api_key_env: config.api_key_env.clone(),
            ..Self::new(&config.base_url, config.resolve_api_key())
        };
        info!(
            endpoint = %gateway.endpoint,
            has_key = gateway.api_key.is_some(),
            "Chat completions gateway configured"
        );
        gateway
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn completions_endpoint(base_url: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let base = base.strip_suffix("/v1").unwrap_or(base);
    format!("{}{}", base, COMPLETIONS_PATH)
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &str,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            GatewayError::MissingCredentials(format!("{} is not set", self.api_key_env))
        })?;

        Ok(Box::new(OpenAiSession::new(
            self.client.clone(),
            self.endpoint.clone(),
            api_key,
            model.to_string(),
            system_prompt,
        )))
    }
}
