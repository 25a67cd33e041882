//! Terminal adapter for the interaction port

pub mod terminal;
