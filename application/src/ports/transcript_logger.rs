//! Port for structured transcript logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording session events
//! (seed, messages, phase changes, terminal outcome) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! session record in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured session event for logging.
pub struct TranscriptEvent {
    /// Event type identifier (e.g., "message", "phase_change").
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

/// Port for logging session events to a structured sink.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible:
/// logging failures must never disturb the session loop.
pub trait TranscriptLogger: Send + Sync {
    /// Record a session event.
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}
