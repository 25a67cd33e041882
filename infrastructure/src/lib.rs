//! Infrastructure layer for reverie
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cards;
pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use cards::CsvCardCatalogLoader;
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoadError, ConfigLoader, FileCardsConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileProviderConfig, FileReadingConfig, Severity,
    has_errors,
};
pub use logging::JsonlTranscriptLogger;
pub use providers::openai::OpenAiGateway;
