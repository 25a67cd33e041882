//! Prepare Deck use case.
//!
//! Drives the three one-way preparation steps on a [`ReadingSession`]:
//! shuffle, split into three piles, and regroup the piles. Each step checks
//! its gate before asking anything, so an out-of-order request produces a
//! single warning and no prompt.

use super::shared::{StepOutcome, refuse};
use crate::ports::interaction::{InteractionError, Notice, ReadingInteraction};
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use crate::session::reading_session::ReadingSession;
use rand::SeedableRng;
use rand::rngs::StdRng;
use reverie_domain::{AssemblyOrder, Percentage, SplitCounts, SplitPercentages};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

const FIRST_SPLIT_PROMPT: &str = "Enter percentage for first split (e.g., 40 for 40%):";
const SECOND_SPLIT_PROMPT: &str =
    "Enter percentage for second split (remaining percentage is for third split):";
const ORDER_PROMPT: &str = "Enter order to assemble the deck (e.g.: 123, 213, 312 etc.)";

const INVALID_FIRST: &str = "Please provide a valid percentage between 0 and 100.";
const INVALID_SECOND: &str = "Please provide a valid percentage between 0 and 100 that, when added to the first percentage, doesn't exceed 100.";
const MISSING_ORDER: &str = "Please provide a valid order (e.g.: 123, 213, 312).";
const INVALID_ORDER: &str = "Invalid order. Please enter a permutation of '123'";

/// Use case for shuffling, splitting and regrouping the deck
pub struct PrepareDeckUseCase {
    rng: Mutex<StdRng>,
    transcript: Arc<dyn TranscriptLogger>,
}

impl PrepareDeckUseCase {
    /// Shuffle with a generator seeded from the OS
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Shuffle deterministically
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            transcript: Arc::new(NoTranscriptLogger),
        }
    }

    /// Create with a transcript logger.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    /// Shuffle the fresh deck.
    pub fn shuffle(
        &self,
        session: &mut ReadingSession,
        interaction: &dyn ReadingInteraction,
    ) -> StepOutcome<()> {
        let result = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            session.deck_mut().shuffle(&mut *rng)
        };

        match result {
            Ok(()) => {
                info!("Deck shuffled");
                interaction.notify(&Notice::info("Deck shuffled successfully!"));
                StepOutcome::Completed(())
            }
            Err(violation) => refuse(interaction, violation),
        }
    }

    /// Ask for two percentages and cut the shuffled deck into three piles.
    ///
    /// Invalid or cancelled answers are asked again; only a closed input
    /// stream ends the loop early.
    pub fn split(
        &self,
        session: &mut ReadingSession,
        interaction: &dyn ReadingInteraction,
    ) -> Result<StepOutcome<SplitCounts>, InteractionError> {
        if let Err(violation) = session.deck().check_split() {
            return Ok(refuse(interaction, violation));
        }

        let first = loop {
            let answer = interaction.ask_number(FIRST_SPLIT_PROMPT)?;
            match answer.map(Percentage::new) {
                Some(Ok(first)) => break first,
                _ => interaction.notify(&Notice::warning(INVALID_FIRST)),
            }
        };

        let percentages = loop {
            let answer = interaction.ask_number(SECOND_SPLIT_PROMPT)?;
            match answer.map(|second| SplitPercentages::with_first(first, second)) {
                Some(Ok(percentages)) => break percentages,
                _ => interaction.notify(&Notice::warning(INVALID_SECOND)),
            }
        };

        let counts = match session.deck_mut().split(&percentages) {
            Ok(counts) => counts,
            Err(violation) => return Ok(refuse(interaction, violation)),
        };

        info!(
            "Deck split at {}% / {}% into {}",
            percentages.first().value(),
            percentages.second().value(),
            counts
        );
        interaction.notify(&Notice::info(format!("Decks split into {} cards.", counts)));
        Ok(StepOutcome::Completed(counts))
    }

    /// Ask for a regroup order and put the three piles back together.
    pub fn assemble(
        &self,
        session: &mut ReadingSession,
        interaction: &dyn ReadingInteraction,
    ) -> Result<StepOutcome<AssemblyOrder>, InteractionError> {
        if let Err(violation) = session.deck().check_assemble() {
            return Ok(refuse(interaction, violation));
        }

        let order = loop {
            let Some(answer) = interaction.ask_text(ORDER_PROMPT)? else {
                interaction.notify(&Notice::warning(MISSING_ORDER));
                continue;
            };
            match answer.parse::<AssemblyOrder>() {
                Ok(order) => break order,
                Err(e) => {
                    debug!("Rejected regroup order: {}", e);
                    interaction.notify(&Notice::error(INVALID_ORDER));
                }
            }
        };

        if let Err(violation) = session.deck_mut().assemble(&order) {
            return Ok(refuse(interaction, violation));
        }

        info!("Deck assembled in order {}", order);
        interaction.notify(&Notice::info("Deck assembled successfully!"));
        self.transcript.log(TranscriptEvent::new(
            "deck_prepared",
            serde_json::json!({
                "order": order.to_string(),
                "deck": session.deck().deck().cards().iter().map(|c| c.value()).collect::<Vec<_>>(),
            }),
        ));
        Ok(StepOutcome::Completed(order))
    }
}

impl Default for PrepareDeckUseCase {
    fn default() -> Self {
        Self::new()
    }
}
