//! Seeker value object

use crate::core::error::DomainError;
use crate::core::string::non_blank;
use serde::{Deserialize, Serialize};

/// The person the reading is for, and what they want to know
///
/// Captured once when the session starts and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seeker {
    name: String,
    question: String,
}

impl Seeker {
    pub fn new(name: &str, question: &str) -> Result<Self, DomainError> {
        Ok(Self {
            name: Self::validate_name(name)?,
            question: Self::validate_question(question)?,
        })
    }

    /// Trimmed name, rejecting blank input
    pub fn validate_name(name: &str) -> Result<String, DomainError> {
        non_blank(name)
            .map(str::to_string)
            .ok_or(DomainError::EmptyName)
    }

    /// Trimmed question, rejecting blank input
    pub fn validate_question(question: &str) -> Result<String, DomainError> {
        non_blank(question)
            .map(str::to_string)
            .ok_or(DomainError::EmptyQuestion)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeker_creation_trims() {
        let seeker = Seeker::new("  Ada ", " Will the move go well? ").unwrap();
        assert_eq!(seeker.name(), "Ada");
        assert_eq!(seeker.question(), "Will the move go well?");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(Seeker::new("   ", "Why?"), Err(DomainError::EmptyName));
    }

    #[test]
    fn test_blank_question_rejected() {
        assert_eq!(Seeker::new("Ada", ""), Err(DomainError::EmptyQuestion));
    }
}
