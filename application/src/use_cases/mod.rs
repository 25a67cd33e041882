//! Use cases
//!
//! Application-level operations that drive a [`ReadingSession`] through a
//! reading. Each one talks to the user only through ports.
//!
//! [`ReadingSession`]: crate::session::reading_session::ReadingSession

pub mod interpret_spread;
pub mod prepare_deck;
pub mod select_card;
pub(crate) mod shared;
pub mod start_reading;

pub use shared::StepOutcome;
