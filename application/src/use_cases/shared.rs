//! Types shared by the reading use cases.

use crate::ports::interaction::{Notice, ReadingInteraction};
use reverie_domain::WorkflowViolation;

/// Result of a gated step
///
/// A refused step is not an error: the user has already been warned and
/// the session is unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome<T, R = WorkflowViolation> {
    Completed(T),
    Refused(R),
}

impl<T, R> StepOutcome<T, R> {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed(_))
    }

    pub fn completed(self) -> Option<T> {
        match self {
            StepOutcome::Completed(value) => Some(value),
            StepOutcome::Refused(_) => None,
        }
    }
}

/// Warn the user about a refused step and hand the refusal back
pub(crate) fn refuse<T, R: std::fmt::Display>(
    interaction: &dyn ReadingInteraction,
    reason: R,
) -> StepOutcome<T, R> {
    interaction.notify(&Notice::warning(reason.to_string()));
    StepOutcome::Refused(reason)
}
