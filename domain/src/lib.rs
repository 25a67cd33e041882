//! Domain layer for reverie
//!
//! This crate contains the core reading logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Deck preparation
//!
//! A reading starts from a fresh 44-card deck that must be shuffled, split
//! into three piles and regrouped, in that order. Each step is a one-way
//! gate ([`DeckStateMachine`]).
//!
//! ## Spread
//!
//! Once every gate is closed, nine distinct cards are drawn
//! ([`SelectionTracker`]) and frozen into a [`Spread`] laid out 3×3.
//!
//! ## Interpretation
//!
//! The spread is read two ways: a static write-up per card from the
//! [`CardCatalog`], and a [`ReadingPrompt`] sent to a text-generation
//! backend.

pub mod catalog;
pub mod core;
pub mod deck;
pub mod reading;
pub mod selection;

// Re-export commonly used types
pub use catalog::{record::CardRecord, table::CardCatalog};
pub use core::error::{DomainError, WorkflowViolation};
pub use deck::{
    card_id::{CardId, DECK_SIZE},
    entities::Deck,
    order::{AssemblyOrder, Pile},
    split::{Percentage, SplitCounts, SplitDeck, SplitPercentages},
    state_machine::{DeckPhase, DeckStateMachine, Gates},
};
pub use reading::{
    interpretation::{card_write_up, static_interpretation},
    message::{Message, Role},
    prompt::{DEFAULT_CLOSING_REMARK, DEFAULT_SYSTEM_PROMPT, ReadingPrompt, with_closing_remark},
    seeker::Seeker,
};
pub use selection::{
    spread::{GRID_SIDE, SPREAD_SIZE, Spread},
    tracker::{Pick, SelectOutcome, SelectionError, SelectionTracker},
};
