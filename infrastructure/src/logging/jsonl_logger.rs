//! JSONL file writer for reading transcripts.
//!
//! Each [`TranscriptEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use chrono::{SecondsFormat, Utc};
use reverie_application::ports::transcript_logger::{TranscriptEvent, TranscriptLogger};
use serde_json::{Value, json};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL transcript logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`. Readings
/// are appended, so one file can hold many sessions.
pub struct JsonlTranscriptLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlTranscriptLogger {
    /// Open (or create) the transcript at the given path.
    ///
    /// Creates parent directories if needed. Returns `None` if the file
    /// cannot be opened; the reading then runs without a transcript.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open transcript file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the transcript file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One transcript line: the payload fields plus `type` and `timestamp`.
///
/// Payloads that are not JSON objects are kept under `data`.
fn transcript_line(event: TranscriptEvent) -> Value {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    match event.payload {
        Value::Object(mut fields) => {
            fields.insert("type".to_string(), event.event_type.into());
            fields.insert("timestamp".to_string(), timestamp.into());
            Value::Object(fields)
        }
        data => json!({
            "type": event.event_type,
            "timestamp": timestamp,
            "data": data,
        }),
    }
}

impl TranscriptLogger for JsonlTranscriptLogger {
    fn log(&self, event: TranscriptEvent) {
        let event_type = event.event_type;
        let line = match serde_json::to_string(&transcript_line(event)) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not serialize transcript event {}: {}", event_type, e);
                return;
            }
        };

        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(writer, "{}", line).and_then(|()| writer.flush()) {
            warn!("Could not write to {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlTranscriptLogger {
    fn drop(&mut self) {
        let writer = self.writer.get_mut().unwrap_or_else(|e| e.into_inner());
        let _ = writer.flush();
    }
}
