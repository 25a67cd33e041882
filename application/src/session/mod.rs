//! Reading session state and dialog bookkeeping.

pub mod dialog;
pub mod reading_session;
