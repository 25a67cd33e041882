//! Select Card use case.
//!
//! Draws one card from the prepared deck into the spread. Picking a card
//! that is already in the spread is silently ignored.

use super::shared::{StepOutcome, refuse};
use crate::ports::interaction::ReadingInteraction;
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use crate::session::reading_session::ReadingSession;
use reverie_domain::{SelectOutcome, SelectionError};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for drawing cards into the spread
pub struct SelectCardUseCase {
    transcript: Arc<dyn TranscriptLogger>,
}

impl SelectCardUseCase {
    pub fn new() -> Self {
        Self {
            transcript: Arc::new(NoTranscriptLogger),
        }
    }

    /// Create with a transcript logger.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    /// Draw the card at a 0-based deck position.
    pub fn execute(
        &self,
        session: &mut ReadingSession,
        position: usize,
        interaction: &dyn ReadingInteraction,
    ) -> StepOutcome<SelectOutcome, SelectionError> {
        let (deck, selection) = session.deck_and_selection_mut();
        let outcome = match selection.select(deck, position) {
            Ok(outcome) => outcome,
            Err(e) => return refuse(interaction, e),
        };

        match &outcome {
            SelectOutcome::Selected { card, count } => {
                debug!("Selected card {} at position {} ({}/9)", card, position + 1, count);
            }
            SelectOutcome::AlreadySelected(card) => {
                debug!("Card {} is already in the spread", card);
            }
            SelectOutcome::Completed(spread) => {
                let cards: Vec<u8> = spread.iter().map(|c| c.value()).collect();
                info!("Spread completed: {:?}", cards);
                self.transcript.log(TranscriptEvent::new(
                    "spread_completed",
                    serde_json::json!({ "cards": cards }),
                ));
            }
        }

        StepOutcome::Completed(outcome)
    }
}

impl Default for SelectCardUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::interaction::testing::ScriptedInteraction;
    use crate::ports::transcript_logger::testing::RecordingTranscript;
    use crate::use_cases::prepare_deck::PrepareDeckUseCase;
    use reverie_domain::{DomainError, Seeker, WorkflowViolation};

    fn prepared_session() -> ReadingSession {
        let prepare = PrepareDeckUseCase::with_seed(11);
        let mut session = ReadingSession::new(Seeker::new("Ada", "Why?").unwrap());
        let silent = ScriptedInteraction::silent();
        prepare.shuffle(&mut session, &silent);
        prepare
            .split(&mut session, &ScriptedInteraction::new(&[Some("40"), Some("30")]))
            .unwrap();
        prepare
            .assemble(&mut session, &ScriptedInteraction::new(&[Some("123")]))
            .unwrap();
        session
    }

    #[test]
    fn test_select_before_preparation_warns() {
        let mut session = ReadingSession::new(Seeker::new("Ada", "Why?").unwrap());
        let interaction = ScriptedInteraction::silent();

        let outcome = SelectCardUseCase::new().execute(&mut session, 0, &interaction);

        assert_eq!(
            outcome,
            StepOutcome::Refused(SelectionError::Workflow(WorkflowViolation::DeckNotPrepared))
        );
        assert_eq!(
            interaction.notices()[0].message,
            "Please shuffle, split, and assemble the deck before selecting cards."
        );
        assert_eq!(session.selection().count(), 0);
    }

    #[test]
    fn test_duplicate_pick_is_silent() {
        let mut session = prepared_session();
        let use_case = SelectCardUseCase::new();
        let interaction = ScriptedInteraction::silent();

        assert!(use_case.execute(&mut session, 5, &interaction).is_completed());
        let again = use_case.execute(&mut session, 5, &interaction);

        assert!(matches!(
            again,
            StepOutcome::Completed(SelectOutcome::AlreadySelected(_))
        ));
        assert_eq!(session.selection().count(), 1);
        assert!(interaction.notices().is_empty());
    }

    #[test]
    fn test_out_of_range_position_warns() {
        let mut session = prepared_session();
        let interaction = ScriptedInteraction::silent();

        let outcome = SelectCardUseCase::new().execute(&mut session, 44, &interaction);

        assert_eq!(
            outcome,
            StepOutcome::Refused(SelectionError::Invalid(DomainError::InvalidPosition(45)))
        );
        assert_eq!(
            interaction.notices()[0].message,
            "There is no card at position 45."
        );
    }

    #[test]
    fn test_ninth_pick_completes_spread() {
        let transcript = Arc::new(RecordingTranscript::default());
        let use_case = SelectCardUseCase::new().with_transcript_logger(transcript.clone());
        let mut session = prepared_session();
        let interaction = ScriptedInteraction::silent();

        for position in 0..8 {
            use_case.execute(&mut session, position, &interaction);
        }
        assert!(session.spread().is_none());

        let outcome = use_case.execute(&mut session, 20, &interaction);
        let StepOutcome::Completed(SelectOutcome::Completed(spread)) = outcome else {
            panic!("expected a completed spread");
        };
        assert_eq!(spread.cards()[8], session.deck().deck().card_at(20).unwrap());
        assert!(session.can_interpret());
        assert_eq!(transcript.event_types(), vec!["spread_completed"]);

        let tenth = use_case.execute(&mut session, 30, &interaction);
        assert_eq!(
            tenth,
            StepOutcome::Refused(SelectionError::Workflow(WorkflowViolation::SpreadFull))
        );
        assert_eq!(session.selection().count(), 9);
        assert_eq!(
            interaction.notices().last().unwrap().message,
            "You have already selected 9 cards."
        );
    }
}
