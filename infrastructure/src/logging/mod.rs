//! Logging infrastructure - structured reading transcripts.
//!
//! Provides [`JsonlTranscriptLogger`], a JSONL file writer that implements
//! the [`TranscriptLogger`](reverie_application::TranscriptLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlTranscriptLogger;
