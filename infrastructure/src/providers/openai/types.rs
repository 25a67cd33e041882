//! Wire types for the OpenAI-compatible chat completions API
//!
//! Converts between domain [`Message`]s and the request body, and maps
//! responses and HTTP failures onto [`GatewayError`].

use reqwest::StatusCode;
use reverie_application::ports::llm_gateway::GatewayError;
use reverie_domain::Message;
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Text of the first choice
pub fn extract_text(response: ChatCompletionResponse) -> Result<String, GatewayError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| GatewayError::InvalidResponse("no content in the response".to_string()))
}

/// Map a non-success status and its body to a gateway error
pub fn map_http_error(status: StatusCode, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GatewayError::MissingCredentials(format!("HTTP {}: {}", status.as_u16(), message))
        }
        _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status.as_u16(), message)),
    }
}

/// Map a transport failure (no HTTP status) to a gateway error
pub fn map_transport_error(err: &reqwest::Error) -> GatewayError {
    if err.is_connect() || err.is_timeout() {
        GatewayError::ConnectionError(err.to_string())
    } else {
        GatewayError::RequestFailed(err.to_string())
    }
}
