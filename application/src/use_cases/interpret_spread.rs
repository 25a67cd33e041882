//! Interpret Spread use case.
//!
//! Runs once per reading, after the ninth card is drawn. Produces the static
//! write-up from the card table and asks the generation backend for a
//! narrative interpretation. A backend failure is reported to the user but
//! never loses the static write-up.

use super::shared::{StepOutcome, refuse};
use crate::config::ReadingParams;
use crate::ports::interaction::{Notice, ReadingInteraction};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use crate::session::reading_session::ReadingSession;
use reverie_domain::core::string::truncate;
use reverie_domain::{
    CardCatalog, ReadingPrompt, WorkflowViolation, static_interpretation, with_closing_remark,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Shown when the backend refuses the request for rate limiting
pub const RATE_LIMIT_MESSAGE: &str =
    "Could not get an AI interpretation due to an internal error. Please try again later.";

/// Errors from the external interpretation request
#[derive(Error, Debug)]
pub enum InterpretError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("The model returned an empty interpretation")]
    EmptyResponse,
}

impl InterpretError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, InterpretError::Gateway(e) if e.is_rate_limited())
    }
}

/// What happened to the external request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalOutcome {
    /// The final text, closing remark included
    Received(String),
    RateLimited,
    /// Any other failure, with its description
    Failed(String),
}

/// Both interpretations of a spread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpretationReport {
    pub card_text: String,
    pub external: ExternalOutcome,
}

/// Use case for interpreting a complete spread
pub struct InterpretSpreadUseCase {
    gateway: Arc<dyn LlmGateway>,
    catalog: Arc<CardCatalog>,
    params: ReadingParams,
    transcript: Arc<dyn TranscriptLogger>,
}

impl InterpretSpreadUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, catalog: Arc<CardCatalog>) -> Self {
        Self {
            gateway,
            catalog,
            params: ReadingParams::default(),
            transcript: Arc::new(NoTranscriptLogger),
        }
    }

    pub fn with_params(mut self, params: ReadingParams) -> Self {
        self.params = params;
        self
    }

    /// Create with a transcript logger.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    pub fn params(&self) -> &ReadingParams {
        &self.params
    }

    /// Interpret the session's spread.
    ///
    /// Refused until nine cards are drawn, and after the first call.
    pub async fn execute(
        &self,
        session: &mut ReadingSession,
        interaction: &dyn ReadingInteraction,
        progress: &dyn ProgressNotifier,
    ) -> StepOutcome<InterpretationReport> {
        if session.interpretations().requested {
            return refuse(interaction, WorkflowViolation::AlreadyInterpreted);
        }
        let Some(spread) = session.spread() else {
            return refuse(interaction, WorkflowViolation::SpreadIncomplete);
        };

        let card_text = static_interpretation(&spread, &self.catalog);
        {
            let interpretations = session.interpretations_mut();
            interpretations.requested = true;
            interpretations.card_text = Some(card_text.clone());
        }

        let prompt = ReadingPrompt::build(
            &self.params.system_prompt,
            session.seeker(),
            &spread,
            &self.catalog,
        );
        info!(
            "Requesting interpretation from {} for: {}",
            self.params.model,
            truncate(session.seeker().question(), 80)
        );
        debug!("Interpretation prompt: {}", prompt.user);
        self.transcript.log(TranscriptEvent::new(
            "interpretation_requested",
            serde_json::json!({
                "model": self.params.model,
                "cards": prompt.card_names,
                "prompt": prompt.user,
            }),
        ));

        progress.on_request_start(&self.params.model);
        let result = self.request(&prompt).await;
        progress.on_request_complete(result.is_ok());

        let external = match result {
            Ok(text) => {
                let text = with_closing_remark(&text, &self.params.closing_remark);
                info!("Interpretation received ({} chars)", text.len());
                self.transcript.log(TranscriptEvent::new(
                    "interpretation_received",
                    serde_json::json!({ "text": text }),
                ));
                session.interpretations_mut().ai_text = Some(text.clone());
                ExternalOutcome::Received(text)
            }
            Err(e) if e.is_rate_limited() => {
                warn!("Interpretation request was rate limited: {}", e);
                self.log_failure("rate_limited", &e);
                interaction.notify(&Notice::error(RATE_LIMIT_MESSAGE));
                ExternalOutcome::RateLimited
            }
            Err(e) => {
                error!("Interpretation request failed: {}", e);
                self.log_failure("failed", &e);
                interaction.notify(&Notice::error(format!(
                    "Could not get an AI interpretation: {}",
                    e
                )));
                ExternalOutcome::Failed(e.to_string())
            }
        };

        StepOutcome::Completed(InterpretationReport {
            card_text,
            external,
        })
    }

    async fn request(&self, prompt: &ReadingPrompt) -> Result<String, InterpretError> {
        let session = self
            .gateway
            .create_session_with_system_prompt(&self.params.model, &prompt.system)
            .await?;
        debug!("Session created with model {}", session.model());

        let text = session.send(&prompt.user).await?;
        if text.trim().is_empty() {
            return Err(InterpretError::EmptyResponse);
        }
        Ok(text)
    }

    fn log_failure(&self, reason: &str, error: &InterpretError) {
        self.transcript.log(TranscriptEvent::new(
            "interpretation_failed",
            serde_json::json!({
                "reason": reason,
                "error": error.to_string(),
            }),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::interaction::NoticeLevel;
    use crate::ports::interaction::testing::ScriptedInteraction;
    use crate::ports::llm_gateway::LlmSession;
    use crate::ports::progress::NoProgress;
    use crate::ports::transcript_logger::testing::RecordingTranscript;
    use crate::use_cases::prepare_deck::PrepareDeckUseCase;
    use crate::use_cases::select_card::SelectCardUseCase;
    use async_trait::async_trait;
    use reverie_domain::{CardId, CardRecord, Seeker};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Mock Infrastructure ====================

    struct MockGateway {
        responses: Arc<Mutex<VecDeque<Result<String, GatewayError>>>>,
        requests: Arc<Mutex<Vec<(String, String, String)>>>,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(responses.into())),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn requests(&self) -> Vec<(String, String, String)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn create_session_with_system_prompt(
            &self,
            model: &str,
            system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Ok(Box::new(MockSession {
                model: model.to_string(),
                system_prompt: system_prompt.to_string(),
                responses: self.responses.clone(),
                requests: self.requests.clone(),
            }))
        }
    }

    struct MockSession {
        model: String,
        system_prompt: String,
        responses: Arc<Mutex<VecDeque<Result<String, GatewayError>>>>,
        requests: Arc<Mutex<Vec<(String, String, String)>>>,
    }

    #[async_trait]
    impl LlmSession for MockSession {
        fn model(&self) -> &str {
            &self.model
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            self.requests.lock().unwrap().push((
                self.model.clone(),
                self.system_prompt.clone(),
                content.to_string(),
            ));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::RequestFailed("no response".to_string())))
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_request_start(&self, model: &str) {
            self.events.lock().unwrap().push(format!("start:{}", model));
        }

        fn on_request_complete(&self, success: bool) {
            self.events.lock().unwrap().push(format!("complete:{}", success));
        }
    }

    // ==================== Helpers ====================

    const DEFAULT_REMARK: &str = reverie_domain::DEFAULT_CLOSING_REMARK;

    fn catalog() -> Arc<CardCatalog> {
        Arc::new(
            (1..=36)
                .map(|n| {
                    CardRecord::new(
                        CardId::new(n).unwrap(),
                        format!("Name{}", n),
                        format!("Meaning{}", n),
                        format!("Detail{}", n),
                    )
                })
                .collect(),
        )
    }

    fn session_with_picks(picks: usize) -> ReadingSession {
        let prepare = PrepareDeckUseCase::with_seed(5);
        let select = SelectCardUseCase::new();
        let mut session = ReadingSession::new(Seeker::new("Ada", "Will I travel").unwrap());
        let silent = ScriptedInteraction::silent();
        prepare.shuffle(&mut session, &silent);
        prepare
            .split(&mut session, &ScriptedInteraction::new(&[Some("40"), Some("30")]))
            .unwrap();
        prepare
            .assemble(&mut session, &ScriptedInteraction::new(&[Some("312")]))
            .unwrap();
        for position in 0..picks {
            select.execute(&mut session, position, &silent);
        }
        session
    }

    fn use_case(gateway: Arc<MockGateway>) -> InterpretSpreadUseCase {
        InterpretSpreadUseCase::new(gateway, catalog())
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_incomplete_spread_is_refused() {
        let gateway = Arc::new(MockGateway::new(vec![]));
        let mut session = session_with_picks(8);
        let interaction = ScriptedInteraction::silent();

        let outcome = use_case(gateway.clone())
            .execute(&mut session, &interaction, &NoProgress)
            .await;

        assert_eq!(outcome, StepOutcome::Refused(WorkflowViolation::SpreadIncomplete));
        assert_eq!(
            interaction.notices()[0].message,
            "Please select 9 cards before interpreting."
        );
        assert!(gateway.requests().is_empty());
        assert!(!session.interpretations().requested);
    }

    #[tokio::test]
    async fn test_successful_interpretation() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("  The path is open.\n".to_string())]));
        let mut session = session_with_picks(9);
        let interaction = ScriptedInteraction::silent();
        let progress = RecordingProgress::default();

        let report = use_case(gateway.clone())
            .execute(&mut session, &interaction, &progress)
            .await
            .completed()
            .unwrap();

        assert_eq!(
            report.external,
            ExternalOutcome::Received(format!("The path is open.{}", DEFAULT_REMARK))
        );
        assert_eq!(
            session.interpretations().ai_text.as_deref(),
            Some(format!("The path is open.{}", DEFAULT_REMARK).as_str())
        );
        assert_eq!(session.interpretations().card_text.as_ref(), Some(&report.card_text));
        assert!(session.can_reopen());
        assert!(interaction.notices().is_empty());
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec!["start:gpt-4".to_string(), "complete:true".to_string()]
        );

        let requests = gateway.requests();
        assert_eq!(requests.len(), 1);
        let (model, system, user) = &requests[0];
        assert_eq!(model, "gpt-4");
        assert!(system.contains("nine card spread"));
        assert!(user.starts_with("My name is Ada and I've drawn a 3x3 tarot spread: "));
        assert!(user.ends_with(". I want to know: Will I travel."));
    }

    #[tokio::test]
    async fn test_static_text_follows_draw_order() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("ok".to_string())]));
        let mut session = session_with_picks(9);
        let spread = session.spread().unwrap();

        let report = use_case(gateway)
            .execute(&mut session, &ScriptedInteraction::silent(), &NoProgress)
            .await
            .completed()
            .unwrap();

        let expected: String = spread
            .iter()
            .map(|id| reverie_domain::card_write_up(id, &catalog()))
            .collect();
        assert_eq!(report.card_text, expected);
    }

    #[tokio::test]
    async fn test_rate_limit_keeps_static_interpretation() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::RateLimited(
            "429 Too Many Requests".to_string(),
        ))]));
        let transcript = Arc::new(RecordingTranscript::default());
        let mut session = session_with_picks(9);
        let interaction = ScriptedInteraction::silent();

        let report = use_case(gateway)
            .with_transcript_logger(transcript.clone())
            .execute(&mut session, &interaction, &NoProgress)
            .await
            .completed()
            .unwrap();

        assert_eq!(report.external, ExternalOutcome::RateLimited);
        let spread = session.spread().unwrap();
        let write_ups: Vec<String> = spread
            .iter()
            .map(|id| reverie_domain::card_write_up(id, &catalog()))
            .collect();
        assert_eq!(write_ups.len(), 9);
        for write_up in &write_ups {
            assert!(report.card_text.contains(write_up.as_str()));
        }
        assert_eq!(report.card_text, write_ups.concat());
        assert_eq!(report.card_text, static_interpretation(&spread, &catalog()));
        assert!(session.interpretations().ai_text.is_none());
        assert!(session.interpretations().card_text.is_some());

        let notices = interaction.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, RATE_LIMIT_MESSAGE);

        assert_eq!(
            transcript.event_types(),
            vec!["interpretation_requested", "interpretation_failed"]
        );
    }

    #[tokio::test]
    async fn test_other_failure_is_reported() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::ConnectionError(
            "refused".to_string(),
        ))]));
        let mut session = session_with_picks(9);
        let interaction = ScriptedInteraction::silent();

        let report = use_case(gateway)
            .execute(&mut session, &interaction, &NoProgress)
            .await
            .completed()
            .unwrap();

        assert!(matches!(report.external, ExternalOutcome::Failed(ref m) if m.contains("refused")));
        assert!(interaction.notices()[0].message.contains("refused"));
        assert!(session.interpretations().requested);
    }

    #[tokio::test]
    async fn test_empty_response_is_a_failure() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("   ".to_string())]));
        let mut session = session_with_picks(9);

        let report = use_case(gateway)
            .execute(&mut session, &ScriptedInteraction::silent(), &NoProgress)
            .await
            .completed()
            .unwrap();

        assert!(matches!(report.external, ExternalOutcome::Failed(_)));
        assert!(session.interpretations().ai_text.is_none());
    }

    #[tokio::test]
    async fn test_second_interpretation_is_refused() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("first".to_string())]));
        let interpret = use_case(gateway.clone());
        let mut session = session_with_picks(9);
        let interaction = ScriptedInteraction::silent();

        interpret
            .execute(&mut session, &interaction, &NoProgress)
            .await;
        let second = interpret
            .execute(&mut session, &interaction, &NoProgress)
            .await;

        assert_eq!(second, StepOutcome::Refused(WorkflowViolation::AlreadyInterpreted));
        assert_eq!(gateway.requests().len(), 1);
        assert_eq!(
            interaction.notices()[0].message,
            "The spread has already been interpreted."
        );
    }

    #[tokio::test]
    async fn test_custom_params() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("Clear skies".to_string())]));
        let mut session = session_with_picks(9);

        let report = use_case(gateway.clone())
            .with_params(
                ReadingParams::default()
                    .with_model("gpt-4o-mini")
                    .with_system_prompt("Be brief.")
                    .with_closing_remark(""),
            )
            .execute(&mut session, &ScriptedInteraction::silent(), &NoProgress)
            .await
            .completed()
            .unwrap();

        assert_eq!(report.external, ExternalOutcome::Received("Clear skies".to_string()));
        let (model, system, _) = &gateway.requests()[0];
        assert_eq!(model, "gpt-4o-mini");
        assert_eq!(system, "Be brief.");
    }
}
