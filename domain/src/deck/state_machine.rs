//! Deck preparation state machine
//!
//! A reading starts from a fresh deck which has to be shuffled, split into
//! three piles and regrouped, in that order, before any card can be drawn:
//!
//! ```text
//! Fresh ──shuffle──▶ Shuffled ──split──▶ Split ──assemble──▶ Assembled
//! ```
//!
//! Every transition is one-way. Attempting a step twice, or before its
//! predecessor, yields a [`WorkflowViolation`] and leaves the state untouched.

use super::entities::Deck;
use super::order::AssemblyOrder;
use super::split::{SplitCounts, SplitDeck, SplitPercentages};
use crate::core::error::WorkflowViolation;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Where the deck is in its preparation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckPhase {
    Fresh,
    Shuffled,
    Split,
    Assembled,
}

impl DeckPhase {
    pub fn as_str(&self) -> &str {
        match self {
            DeckPhase::Fresh => "fresh",
            DeckPhase::Shuffled => "shuffled",
            DeckPhase::Split => "split",
            DeckPhase::Assembled => "assembled",
        }
    }
}

impl std::fmt::Display for DeckPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three one-way preparation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gates {
    pub shuffled: bool,
    pub split: bool,
    pub assembled: bool,
}

impl Gates {
    pub fn all_closed(&self) -> bool {
        self.shuffled && self.split && self.assembled
    }
}

/// Owns the deck and enforces the preparation order
#[derive(Debug, Clone)]
pub struct DeckStateMachine {
    deck: Deck,
    phase: DeckPhase,
    piles: Option<SplitDeck>,
}

impl DeckStateMachine {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            phase: DeckPhase::Fresh,
            piles: None,
        }
    }

    pub fn phase(&self) -> DeckPhase {
        self.phase
    }

    pub fn gates(&self) -> Gates {
        Gates {
            shuffled: self.phase >= DeckPhase::Shuffled,
            split: self.phase >= DeckPhase::Split,
            assembled: self.phase >= DeckPhase::Assembled,
        }
    }

    /// Cards can be drawn once every gate is closed
    pub fn selection_enabled(&self) -> bool {
        self.gates().all_closed()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The piles waiting to be regrouped, while in the `Split` phase
    pub fn piles(&self) -> Option<&SplitDeck> {
        self.piles.as_ref()
    }

    pub fn check_shuffle(&self) -> Result<(), WorkflowViolation> {
        match self.phase {
            DeckPhase::Fresh => Ok(()),
            _ => Err(WorkflowViolation::AlreadyShuffled),
        }
    }

    pub fn check_split(&self) -> Result<(), WorkflowViolation> {
        match self.phase {
            DeckPhase::Fresh => Err(WorkflowViolation::NotShuffled),
            DeckPhase::Shuffled => Ok(()),
            DeckPhase::Split | DeckPhase::Assembled => Err(WorkflowViolation::AlreadySplit),
        }
    }

    pub fn check_assemble(&self) -> Result<(), WorkflowViolation> {
        match self.phase {
            DeckPhase::Fresh | DeckPhase::Shuffled => Err(WorkflowViolation::NotSplit),
            DeckPhase::Split => Ok(()),
            DeckPhase::Assembled => Err(WorkflowViolation::AlreadyAssembled),
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), WorkflowViolation> {
        self.check_shuffle()?;
        self.deck.shuffle(rng);
        self.phase = DeckPhase::Shuffled;
        Ok(())
    }

    pub fn split(&mut self, percentages: &SplitPercentages) -> Result<SplitCounts, WorkflowViolation> {
        self.check_split()?;
        let piles = self.deck.split(percentages);
        let counts = piles.counts();
        self.piles = Some(piles);
        self.phase = DeckPhase::Split;
        Ok(counts)
    }

    pub fn assemble(&mut self, order: &AssemblyOrder) -> Result<&Deck, WorkflowViolation> {
        self.check_assemble()?;
        let piles = self.piles.take().ok_or(WorkflowViolation::NotSplit)?;
        self.deck = piles.reassemble(order);
        self.phase = DeckPhase::Assembled;
        Ok(&self.deck)
    }
}

impl Default for DeckStateMachine {
    fn default() -> Self {
        Self::new(Deck::standard())
    }
}
