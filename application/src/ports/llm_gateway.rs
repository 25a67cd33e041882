//! LLM Gateway port
//!
//! Defines the interface for communicating with the text-generation backend.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Check if the backend refused the request because of rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GatewayError::RateLimited(_))
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to a text-generation
/// service. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session with a system prompt
    async fn create_session_with_system_prompt(
        &self,
        model: &str,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &str;

    /// Send a user message and get the generated text
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
