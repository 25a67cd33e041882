//! Card identifier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of cards in the deck
pub const DECK_SIZE: usize = 44;

/// Identifier of a single card (1..=44)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CardId(u8);

impl CardId {
    /// Create a card identifier, rejecting numbers outside the deck
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if (1..=DECK_SIZE as u32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::InvalidCardId(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// All identifiers in their printed order
    pub fn all() -> impl Iterator<Item = CardId> {
        (1..=DECK_SIZE as u8).map(CardId)
    }
}

impl TryFrom<u32> for CardId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        CardId::new(value)
    }
}

impl From<CardId> for u32 {
    fn from(id: CardId) -> Self {
        id.0 as u32
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        assert_eq!(CardId::new(1).unwrap().value(), 1);
        assert_eq!(CardId::new(44).unwrap().value(), 44);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(CardId::new(0), Err(DomainError::InvalidCardId(0)));
        assert_eq!(CardId::new(45), Err(DomainError::InvalidCardId(45)));
    }

    #[test]
    fn test_all_covers_deck() {
        let ids: Vec<_> = CardId::all().collect();
        assert_eq!(ids.len(), DECK_SIZE);
        assert_eq!(ids.first().map(|c| c.value()), Some(1));
        assert_eq!(ids.last().map(|c| c.value()), Some(44));
    }

    #[test]
    fn test_deserialize_validates() {
        let id: CardId = serde_json::from_str("12").unwrap();
        assert_eq!(id.value(), 12);
        assert!(serde_json::from_str::<CardId>("99").is_err());
    }
}
