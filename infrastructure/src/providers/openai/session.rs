//! Chat completions session
//!
//! Every request carries the system prompt and the one user message; no
//! earlier turns are replayed.

use super::types::{self, ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use reverie_application::ports::llm_gateway::{GatewayError, LlmSession};
use reverie_domain::Message;
use tracing::debug;

pub struct OpenAiSession {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    system_prompt: String,
}

impl OpenAiSession {
    pub fn new(
        client: reqwest::Client,
        endpoint: String,
        api_key: String,
        model: String,
        system_prompt: &str,
    ) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            model,
            system_prompt: system_prompt.to_string(),
        }
    }

    fn request_messages(&self, content: &str) -> [Message; 2] {
        [
            Message::system(self.system_prompt.as_str()),
            Message::user(content),
        ]
    }

    async fn complete(&self, messages: &[Message]) -> Result<String, GatewayError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
        };

        debug!(
            model = %self.model,
            messages = messages.len(),
            "Calling chat completions API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| types::map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(types::map_http_error(status, &body_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        types::extract_text(parsed)
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.complete(&self.request_messages(content)).await
    }
}
