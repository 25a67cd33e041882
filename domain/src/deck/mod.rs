//! Deck subdomain: the 44-card deck and how it is prepared.
//!
//! - [`card_id::CardId`] - identifier of a single card
//! - [`entities::Deck`] - ordered permutation of all identifiers
//! - [`split`] - percentages, pile counts and the three-pile split
//! - [`order::AssemblyOrder`] - how the piles are regrouped
//! - [`state_machine::DeckStateMachine`] - shuffle → split → assemble gating

pub mod card_id;
pub mod entities;
pub mod order;
pub mod split;
pub mod state_machine;
