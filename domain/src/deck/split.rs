//! Splitting the deck into three piles

use super::card_id::CardId;
use super::entities::Deck;
use super::order::AssemblyOrder;
use crate::core::error::DomainError;

/// A percentage in the closed range [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidPercentage(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// The two user-chosen cut points; the third pile gets whatever is left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPercentages {
    first: Percentage,
    second: Percentage,
}

impl SplitPercentages {
    pub fn new(first: f64, second: f64) -> Result<Self, DomainError> {
        let first = Percentage::new(first)?;
        Self::with_first(first, second)
    }

    /// Pair an already-validated first percentage with a second one
    ///
    /// The second value must itself be a percentage, and the two together
    /// must not exceed 100.
    pub fn with_first(first: Percentage, second: f64) -> Result<Self, DomainError> {
        let second = Percentage::new(second)?;
        if first.value() + second.value() > 100.0 {
            return Err(DomainError::PercentageOverflow {
                first: first.value(),
                second: second.value(),
            });
        }
        Ok(Self { first, second })
    }

    pub fn first(&self) -> Percentage {
        self.first
    }

    pub fn second(&self) -> Percentage {
        self.second
    }
}

/// Pile sizes produced by a split
///
/// The first two counts truncate `len * pct / 100`; the third absorbs the
/// remainder, so the three always add up to the deck length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitCounts {
    pub first: usize,
    pub second: usize,
    pub third: usize,
}

impl SplitCounts {
    pub fn for_deck(len: usize, percentages: &SplitPercentages) -> Self {
        let first = truncated_share(len, percentages.first).min(len);
        let second = truncated_share(len, percentages.second).min(len - first);
        Self {
            first,
            second,
            third: len - first - second,
        }
    }

    pub fn total(&self) -> usize {
        self.first + self.second + self.third
    }
}

impl std::fmt::Display for SplitCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.first, self.second, self.third)
    }
}

fn truncated_share(len: usize, pct: Percentage) -> usize {
    (len as f64 * pct.value() / 100.0) as usize
}

/// Three contiguous piles cut from a deck, waiting to be regrouped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDeck {
    piles: [Vec<CardId>; 3],
}

impl SplitDeck {
    pub(crate) fn new(piles: [Vec<CardId>; 3]) -> Self {
        Self { piles }
    }

    pub fn piles(&self) -> &[Vec<CardId>; 3] {
        &self.piles
    }

    pub fn counts(&self) -> SplitCounts {
        SplitCounts {
            first: self.piles[0].len(),
            second: self.piles[1].len(),
            third: self.piles[2].len(),
        }
    }

    /// Stack the piles back together in the given order
    pub fn reassemble(self, order: &AssemblyOrder) -> Deck {
        let mut piles = self.piles.map(Some);
        let mut cards = Vec::with_capacity(piles.iter().flatten().map(Vec::len).sum());
        for pile in order.piles() {
            if let Some(group) = piles[pile.index()].take() {
                cards.extend(group);
            }
        }
        Deck::from_cards(cards)
    }
}
