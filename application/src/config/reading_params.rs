//! Reading parameters - how the external interpretation is requested.
//!
//! [`ReadingParams`] groups the static values used by
//! [`InterpretSpreadUseCase`](crate::use_cases::interpret_spread::InterpretSpreadUseCase).

use reverie_domain::{DEFAULT_CLOSING_REMARK, DEFAULT_SYSTEM_PROMPT};
use serde::{Deserialize, Serialize};

/// Default model for the interpretation request
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Interpretation request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingParams {
    /// Model name passed to the gateway.
    pub model: String,
    /// System instruction sent before the user message.
    pub system_prompt: String,
    /// Text appended to every successful interpretation.
    pub closing_remark: String,
}

impl Default for ReadingParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            closing_remark: DEFAULT_CLOSING_REMARK.to_string(),
        }
    }
}

impl ReadingParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_closing_remark(mut self, remark: impl Into<String>) -> Self {
        self.closing_remark = remark.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ReadingParams::default();
        assert_eq!(params.model, "gpt-4");
        assert!(params.system_prompt.contains("nine card spread"));
        assert!(params.closing_remark.starts_with(" . I hope"));
    }

    #[test]
    fn test_builder() {
        let params = ReadingParams::default()
            .with_model("gpt-4o-mini")
            .with_closing_remark("");

        assert_eq!(params.model, "gpt-4o-mini");
        assert_eq!(params.closing_remark, "");
    }
}
