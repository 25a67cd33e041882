//! Application layer for reverie
//!
//! This crate contains use cases, port definitions, the reading session and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MODEL, ReadingParams};
pub use ports::{
    catalog_loader::{CardCatalogLoader, CatalogError},
    interaction::{InteractionError, Notice, NoticeLevel, ReadingInteraction},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoProgress, ProgressNotifier},
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use session::{
    dialog::{DialogEvent, DialogKind, DialogState, Reopen},
    reading_session::{Interpretations, ReadingSession},
};
pub use use_cases::StepOutcome;
pub use use_cases::interpret_spread::{
    ExternalOutcome, InterpretError, InterpretSpreadUseCase, InterpretationReport,
    RATE_LIMIT_MESSAGE,
};
pub use use_cases::prepare_deck::PrepareDeckUseCase;
pub use use_cases::select_card::SelectCardUseCase;
pub use use_cases::start_reading::StartReadingUseCase;
