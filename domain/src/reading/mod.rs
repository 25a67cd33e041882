//! Reading subdomain: who asks, what is sent out, what is shown back.
//!
//! - [`seeker::Seeker`] - name and question captured at startup
//! - [`prompt::ReadingPrompt`] - system + user messages for the external interpretation
//! - [`interpretation`] - static per-card write-ups from the card table
//! - [`message::Message`] - role/content chat message

pub mod interpretation;
pub mod message;
pub mod prompt;
pub mod seeker;
