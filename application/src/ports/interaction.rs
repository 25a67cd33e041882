//! Reading interaction port.
//!
//! The use cases need to ask the user for a few values (name, question,
//! split percentages, regroup order) and to tell them when something was
//! refused. This port abstracts that dialogue.
//!
//! # Architecture
//!
//! - **Port**: [`ReadingInteraction`] - defined here in application layer
//! - **Adapter**: `TerminalInteraction` - implemented in presentation layer
//!
//! Re-prompt loops live in the use cases; an adapter only has to answer one
//! question at a time and report cancellation as `Ok(None)`.

use thiserror::Error;

/// Error type for interaction operations.
///
/// These are failures of the channel itself, not user decisions: a
/// cancelled prompt is `Ok(None)`, not an error. Prompts that re-ask on
/// cancel rely on [`InteractionError::Closed`] to stop at end of input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// The input stream ended; there is nobody left to answer
    #[error("Input closed")]
    Closed,

    #[error("I/O error: {0}")]
    IoError(String),
}

/// How prominently a notice should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A dismissible message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: "Info".to_string(),
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: "Warning".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// Port for asking the user questions during a reading
///
/// Used from the single thread that drives the reading, so adapters may
/// keep their line editor in a `RefCell`.
pub trait ReadingInteraction {
    /// Ask for a line of text. `Ok(None)` means the prompt was cancelled.
    fn ask_text(&self, prompt: &str) -> Result<Option<String>, InteractionError>;

    /// Ask for a number. `Ok(None)` means cancelled or not a number.
    fn ask_number(&self, prompt: &str) -> Result<Option<f64>, InteractionError> {
        Ok(self
            .ask_text(prompt)?
            .and_then(|text| text.trim().parse::<f64>().ok()))
    }

    /// Show a dismissible notice
    fn notify(&self, notice: &Notice);
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedInteraction;
    use super::*;

    #[test]
    fn test_ask_number_parses() {
        let interaction = ScriptedInteraction::new(&[Some(" 42.5 ")]);
        assert_eq!(interaction.ask_number("?").unwrap(), Some(42.5));
    }

    #[test]
    fn test_ask_number_rejects_text_and_cancel() {
        let interaction = ScriptedInteraction::new(&[Some("forty"), None]);
        assert_eq!(interaction.ask_number("?").unwrap(), None);
        assert_eq!(interaction.ask_number("?").unwrap(), None);
    }

    #[test]
    fn test_notice_constructors() {
        assert_eq!(Notice::warning("w").level, NoticeLevel::Warning);
        assert_eq!(Notice::error("e").title, "Error");
    }
}
