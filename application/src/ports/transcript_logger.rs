//! Port for structured reading transcripts.
//!
//! Defines the [`TranscriptLogger`] trait for recording reading milestones
//! (deck prepared, spread drawn, prompt sent, interpretation received) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the reading
//! itself in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured transcript event.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Adapters add the timestamp.
#[derive(Debug, Clone)]
pub struct TranscriptEvent {
    /// Event type identifier (e.g., "reading_started", "spread_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TranscriptEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging transcript events.
///
/// `log` is synchronous and infallible; adapters swallow write failures.
pub trait TranscriptLogger: Send + Sync {
    /// Record a transcript event.
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when transcripts are disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}
