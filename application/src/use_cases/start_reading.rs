//! Start Reading use case.
//!
//! Captures who the reading is for. Blank answers are refused and asked
//! again; cancelling either prompt ends the program.

use crate::ports::interaction::{InteractionError, Notice, ReadingInteraction};
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use crate::session::reading_session::ReadingSession;
use reverie_domain::Seeker;
use reverie_domain::core::string::truncate;
use std::sync::Arc;
use tracing::info;

const NAME_PROMPT: &str = "What is Your Name?";
const QUESTION_PROMPT: &str = "What is your question?";

/// Use case for opening a reading session
pub struct StartReadingUseCase {
    transcript: Arc<dyn TranscriptLogger>,
}

impl StartReadingUseCase {
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

    /// Ask for name and question.
    ///
    /// Returns `Ok(None)` when the user cancels; the caller should exit.
    pub fn execute(
        &self,
        interaction: &dyn ReadingInteraction,
    ) -> Result<Option<ReadingSession>, InteractionError> {
        let Some(name) = ask_until_valid(
            interaction,
            NAME_PROMPT,
            "Please provide a valid name.",
            Seeker::validate_name,
        )?
        else {
            info!("Name prompt cancelled");
            return Ok(None);
        };

        let Some(seeker) = ask_until_valid(
            interaction,
            QUESTION_PROMPT,
            "Please provide a valid question.",
            |question| Seeker::new(&name, question),
        )?
        else {
            info!("Question prompt cancelled");
            return Ok(None);
        };

        info!(
            "Reading started for {}: {}",
            seeker.name(),
            truncate(seeker.question(), 80)
        );
        self.transcript.log(TranscriptEvent::new(
            "reading_started",
            serde_json::json!({
                "name": seeker.name(),
                "question": seeker.question(),
            }),
        ));

        Ok(Some(ReadingSession::new(seeker)))
    }
}

impl Default for StartReadingUseCase {
    fn default() -> Self {
        Self::new()
    }
}

fn ask_until_valid<T, E>(
    interaction: &dyn ReadingInteraction,
    prompt: &str,
    warning: &str,
    validate: impl Fn(&str) -> Result<T, E>,
) -> Result<Option<T>, InteractionError> {
    loop {
        let Some(answer) = interaction.ask_text(prompt)? else {
            return Ok(None);
        };
        match validate(&answer) {
            Ok(valid) => return Ok(Some(valid)),
            Err(_) => interaction.notify(&Notice::warning(warning)),
        }
    }
}
