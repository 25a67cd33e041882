//! Deck entity

use super::card_id::{CardId, DECK_SIZE};
use super::split::{SplitCounts, SplitDeck, SplitPercentages};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Ordered sequence of card identifiers
///
/// A deck only changes through [`shuffle`](Deck::shuffle) and through
/// reassembly of a [`SplitDeck`], so it is always a permutation of the
/// cards it started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<CardId>,
}

impl Deck {
    /// The full deck in printed order (1..=44)
    pub fn standard() -> Self {
        Self {
            cards: CardId::all().collect(),
        }
    }

    pub(crate) fn from_cards(cards: Vec<CardId>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a 0-based position, if any
    pub fn card_at(&self, position: usize) -> Option<CardId> {
        self.cards.get(position).copied()
    }

    /// Randomly permute the whole deck
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Cut the deck into three contiguous piles
    pub fn split(&self, percentages: &SplitPercentages) -> SplitDeck {
        let counts = SplitCounts::for_deck(self.len(), percentages);
        let (first, rest) = self.cards.split_at(counts.first);
        let (second, third) = rest.split_at(counts.second);
        SplitDeck::new([first.to_vec(), second.to_vec(), third.to_vec()])
    }

    /// Whether this deck holds every card exactly once
    pub fn is_complete(&self) -> bool {
        let unique: HashSet<_> = self.cards.iter().collect();
        self.cards.len() == DECK_SIZE && unique.len() == DECK_SIZE
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
