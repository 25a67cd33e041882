//! Selection tracker: drawing nine distinct cards from the prepared deck

use super::spread::{SPREAD_SIZE, Spread};
use crate::core::error::{DomainError, WorkflowViolation};
use crate::deck::card_id::CardId;
use crate::deck::state_machine::DeckStateMachine;
use thiserror::Error;

/// Why a pick was refused
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error(transparent)]
    Workflow(#[from] WorkflowViolation),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// A card drawn from a given deck position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    /// 0-based position in the deck
    pub position: usize,
    pub card: CardId,
}

/// Result of an accepted (or silently ignored) pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The card was added; `count` is the new number of picks
    Selected { card: CardId, count: usize },
    /// That card is already part of the selection; nothing changed
    AlreadySelected(CardId),
    /// The ninth card was added and the selection is now frozen
    Completed(Spread),
}

/// Tracks up to nine distinct picks in draw order
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    picks: Vec<Pick>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.picks.len()
    }

    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    pub fn is_complete(&self) -> bool {
        self.picks.len() == SPREAD_SIZE
    }

    /// Whether the card at this deck position has been drawn
    pub fn is_position_selected(&self, position: usize) -> bool {
        self.picks.iter().any(|p| p.position == position)
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.picks.iter().any(|p| p.card == card)
    }

    /// The frozen spread, once nine cards are drawn
    pub fn spread(&self) -> Option<Spread> {
        let cards: [CardId; SPREAD_SIZE] = self
            .picks
            .iter()
            .map(|p| p.card)
            .collect::<Vec<_>>()
            .try_into()
            .ok()?;
        Some(Spread::new(cards))
    }

    /// Draw the card at a 0-based deck position
    ///
    /// Refused while the deck is not fully prepared or once nine cards are
    /// held. Drawing a card that is already selected changes nothing.
    pub fn select(
        &mut self,
        deck: &DeckStateMachine,
        position: usize,
    ) -> Result<SelectOutcome, SelectionError> {
        if !deck.selection_enabled() {
            return Err(WorkflowViolation::DeckNotPrepared.into());
        }
        if self.is_complete() {
            return Err(WorkflowViolation::SpreadFull.into());
        }
        let card = deck
            .deck()
            .card_at(position)
            .ok_or(DomainError::InvalidPosition(position + 1))?;

        if self.contains(card) {
            return Ok(SelectOutcome::AlreadySelected(card));
        }

        self.picks.push(Pick { position, card });

        match self.spread() {
            Some(spread) => Ok(SelectOutcome::Completed(spread)),
            None => Ok(SelectOutcome::Selected {
                card,
                count: self.count(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::split::SplitPercentages;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn prepared_deck() -> DeckStateMachine {
        let mut machine = DeckStateMachine::default();
        machine.shuffle(&mut StdRng::seed_from_u64(9)).unwrap();
        machine
            .split(&SplitPercentages::new(40.0, 30.0).unwrap())
            .unwrap();
        machine.assemble(&"312".parse().unwrap()).unwrap();
        machine
    }

    #[test]
    fn test_select_before_preparation_rejected() {
        let machine = DeckStateMachine::default();
        let mut tracker = SelectionTracker::new();
        assert_eq!(
            tracker.select(&machine, 0),
            Err(SelectionError::Workflow(WorkflowViolation::DeckNotPrepared))
        );
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn test_select_records_card_at_position() {
        let machine = prepared_deck();
        let mut tracker = SelectionTracker::new();
        let expected = machine.deck().card_at(3).unwrap();

        let outcome = tracker.select(&machine, 3).unwrap();

        assert_eq!(
            outcome,
            SelectOutcome::Selected {
                card: expected,
                count: 1
            }
        );
        assert!(tracker.is_position_selected(3));
        assert!(tracker.contains(expected));
    }

    #[test]
    fn test_same_position_twice_counts_once() {
        let machine = prepared_deck();
        let mut tracker = SelectionTracker::new();
        tracker.select(&machine, 10).unwrap();

        let outcome = tracker.select(&machine, 10).unwrap();

        assert!(matches!(outcome, SelectOutcome::AlreadySelected(_)));
        assert_eq!(tracker.count(), 1);
    }

    #[test]
    fn test_ninth_pick_completes_spread() {
        let machine = prepared_deck();
        let mut tracker = SelectionTracker::new();
        for position in 0..8 {
            let outcome = tracker.select(&machine, position * 2).unwrap();
            assert!(matches!(outcome, SelectOutcome::Selected { .. }));
        }

        let outcome = tracker.select(&machine, 30).unwrap();

        let SelectOutcome::Completed(spread) = outcome else {
            panic!("Expected Completed, got {outcome:?}");
        };
        let expected: Vec<_> = [0, 2, 4, 6, 8, 10, 12, 14, 30]
            .iter()
            .map(|&p| machine.deck().card_at(p).unwrap())
            .collect();
        assert_eq!(spread.cards().as_slice(), expected.as_slice());
        assert!(tracker.is_complete());
    }

    #[test]
    fn test_selection_frozen_after_nine() {
        let machine = prepared_deck();
        let mut tracker = SelectionTracker::new();
        for position in 0..9 {
            tracker.select(&machine, position).unwrap();
        }

        assert_eq!(
            tracker.select(&machine, 20),
            Err(SelectionError::Workflow(WorkflowViolation::SpreadFull))
        );
        // Already-selected positions are inert as well
        assert_eq!(
            tracker.select(&machine, 0),
            Err(SelectionError::Workflow(WorkflowViolation::SpreadFull))
        );
        assert_eq!(tracker.count(), 9);
    }

    #[test]
    fn test_position_out_of_range() {
        let machine = prepared_deck();
        let mut tracker = SelectionTracker::new();
        assert_eq!(
            tracker.select(&machine, 44),
            Err(SelectionError::Invalid(DomainError::InvalidPosition(45)))
        );
    }

    #[test]
    fn test_never_more_than_nine_or_duplicates() {
        let machine = prepared_deck();
        let mut tracker = SelectionTracker::new();
        // Hammer the same few positions in a scrambled order
        for position in [3, 3, 7, 1, 7, 0, 0, 2, 5, 5, 9, 11, 13, 17, 19, 21, 3] {
            let _ = tracker.select(&machine, position);
            assert!(tracker.count() <= SPREAD_SIZE);
        }
        let mut cards: Vec<_> = tracker.picks().iter().map(|p| p.card).collect();
        cards.sort();
        cards.dedup();
        assert_eq!(cards.len(), tracker.count());
        assert_eq!(tracker.count(), SPREAD_SIZE);
    }

    #[test]
    fn test_spread_none_until_complete() {
        let machine = prepared_deck();
        let mut tracker = SelectionTracker::new();
        tracker.select(&machine, 0).unwrap();
        assert!(tracker.spread().is_none());
    }
}
