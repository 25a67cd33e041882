//! Domain error types

use thiserror::Error;

/// Domain-level validation errors
///
/// These are raised by value-object constructors when user input does not
/// describe a valid value. Callers recover by asking again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid percentage: {0} (expected a value between 0 and 100)")]
    InvalidPercentage(f64),

    #[error("Percentages {first} and {second} add up to more than 100")]
    PercentageOverflow { first: f64, second: f64 },

    #[error("Invalid assembly order: {0:?}")]
    InvalidAssemblyOrder(String),

    #[error("Invalid card identifier: {0}")]
    InvalidCardId(u32),

    #[error("There is no card at position {0}.")]
    InvalidPosition(usize),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Question cannot be empty")]
    EmptyQuestion,
}

/// A step attempted out of order, or attempted twice
///
/// Workflow violations are not failures: the operation is ignored and the
/// user sees the [`Display`](std::fmt::Display) text as a warning.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowViolation {
    #[error("You cannot perform this action 2 times.")]
    AlreadyShuffled,

    #[error("You cannot perform this action 2 times.")]
    AlreadySplit,

    #[error("You cannot perform this action 2 times.")]
    AlreadyAssembled,

    #[error("Please shuffle the deck before splitting it.")]
    NotShuffled,

    #[error("Please split the deck before regrouping it.")]
    NotSplit,

    #[error("Please shuffle, split, and assemble the deck before selecting cards.")]
    DeckNotPrepared,

    #[error("You have already selected 9 cards.")]
    SpreadFull,

    #[error("Please select 9 cards before interpreting.")]
    SpreadIncomplete,

    #[error("The spread has already been interpreted.")]
    AlreadyInterpreted,
}
