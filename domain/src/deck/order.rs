//! Order in which the three piles are stacked back together

use crate::core::error::DomainError;
use std::str::FromStr;

/// One of the three piles produced by a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pile {
    First,
    Second,
    Third,
}

impl Pile {
    pub fn index(&self) -> usize {
        match self {
            Pile::First => 0,
            Pile::Second => 1,
            Pile::Third => 2,
        }
    }

    fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Pile::First),
            '2' => Some(Pile::Second),
            '3' => Some(Pile::Third),
            _ => None,
        }
    }

    fn digit(&self) -> char {
        match self {
            Pile::First => '1',
            Pile::Second => '2',
            Pile::Third => '3',
        }
    }
}

/// A permutation of the three piles, written as e.g. `"312"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssemblyOrder([Pile; 3]);

impl AssemblyOrder {
    pub fn piles(&self) -> &[Pile; 3] {
        &self.0
    }
}

impl FromStr for AssemblyOrder {
    type Err = DomainError;

    /// Accepts exactly three characters using each of `1`, `2`, `3` once
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidAssemblyOrder(s.to_string());

        let mut chars = s.chars();
        let (Some(a), Some(b), Some(c), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let piles = [
            Pile::from_digit(a).ok_or_else(invalid)?,
            Pile::from_digit(b).ok_or_else(invalid)?,
            Pile::from_digit(c).ok_or_else(invalid)?,
        ];
        if piles[0] == piles[1] || piles[0] == piles[2] || piles[1] == piles[2] {
            return Err(invalid());
        }
        Ok(Self(piles))
    }
}

impl std::fmt::Display for AssemblyOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for pile in &self.0 {
            write!(f, "{}", pile.digit())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_permutations_parse() {
        for text in ["123", "132", "213", "231", "312", "321"] {
            let order: AssemblyOrder = text.parse().unwrap();
            assert_eq!(order.to_string(), text);
        }
    }

    #[test]
    fn test_rejects_everything_else() {
        for text in [
            "", "1", "12", "1234", "112", "333", "124", "abc", " 12", "12 ", "0123", "１２３",
        ] {
            assert!(
                text.parse::<AssemblyOrder>().is_err(),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_exhaustive_three_digit_strings() {
        let mut accepted = 0;
        for a in '0'..='9' {
            for b in '0'..='9' {
                for c in '0'..='9' {
                    let text: String = [a, b, c].iter().collect();
                    if text.parse::<AssemblyOrder>().is_ok() {
                        accepted += 1;
                    }
                }
            }
        }
        assert_eq!(accepted, 6);
    }

    #[test]
    fn test_error_keeps_input() {
        assert_eq!(
            "221".parse::<AssemblyOrder>(),
            Err(DomainError::InvalidAssemblyOrder("221".to_string()))
        );
    }
}
