//! The nine-card spread

use crate::deck::card_id::CardId;
use serde::{Deserialize, Serialize};

/// Number of cards in a spread
pub const SPREAD_SIZE: usize = 9;

/// Side length of the square layout
pub const GRID_SIDE: usize = 3;

/// Nine distinct cards in the order they were drawn (Value Object)
///
/// Laid out row-major on a 3×3 grid: the first card drawn sits top-left,
/// the ninth bottom-right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spread {
    cards: [CardId; SPREAD_SIZE],
}

impl Spread {
    pub(crate) fn new(cards: [CardId; SPREAD_SIZE]) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[CardId; SPREAD_SIZE] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    /// Rows of the 3×3 layout, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CardId]> {
        self.cards.chunks(GRID_SIDE)
    }
}
