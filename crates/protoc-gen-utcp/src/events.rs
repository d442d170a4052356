// crates/protoc-gen-utcp/src/events.rs
// ============================================================================
// Module: Generation Events
// Description: Structured records of per-file generation outcomes.
// Purpose: Optional JSON-line diagnostics on stderr.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! stdout carries the protobuf response, so diagnostics go to stderr as one
//! JSON object per line. Sinks are selected by the `log_events` option and
//! must never fail generation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;
use std::sync::PoisonError;

use serde::Serialize;

// ============================================================================
// SECTION: Events
// ============================================================================

/// Generation event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationEventKind {
    /// A document was produced.
    FileGenerated,
    /// The file declares no services.
    FileSkipped,
    /// Generation failed and the request was aborted.
    GenerationFailed,
}

/// One per-file generation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationEvent {
    /// Event kind.
    pub event: GenerationEventKind,
    /// Source file path.
    pub file: String,
    /// Output document path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Number of tools in the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_count: Option<usize>,
    /// Failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationEvent {
    /// Records a produced document.
    #[must_use]
    pub fn generated(file: &str, output: &str, tool_count: usize) -> Self {
        Self {
            event: GenerationEventKind::FileGenerated,
            file: file.to_string(),
            output: Some(output.to_string()),
            tool_count: Some(tool_count),
            error: None,
        }
    }

    /// Records a file without services.
    #[must_use]
    pub fn skipped(file: &str) -> Self {
        Self {
            event: GenerationEventKind::FileSkipped,
            file: file.to_string(),
            output: None,
            tool_count: None,
            error: None,
        }
    }

    /// Records a failure.
    #[must_use]
    pub fn failed(file: &str, error: &str) -> Self {
        Self {
            event: GenerationEventKind::GenerationFailed,
            file: file.to_string(),
            output: None,
            tool_count: None,
            error: Some(error.to_string()),
        }
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Destination for generation events.
pub trait GenerationEventSink: Send + Sync {
    /// Records one event.
    fn record(&self, event: &GenerationEvent);
}

/// Writes events as JSON lines to stderr.
pub struct StderrEventSink;

impl GenerationEventSink for StderrEventSink {
    fn record(&self, event: &GenerationEvent) {
        let Ok(payload) = serde_json::to_string(event) else {
            return;
        };
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(&mut stderr, "{payload}");
    }
}

/// Discards events.
pub struct NoopEventSink;

impl GenerationEventSink for NoopEventSink {
    fn record(&self, _event: &GenerationEvent) {}
}

/// Retains events in memory for inspection.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    /// Recorded events in arrival order.
    events: Mutex<Vec<GenerationEvent>>,
}

impl MemoryEventSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<GenerationEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl GenerationEventSink for MemoryEventSink {
    fn record(&self, event: &GenerationEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event.clone());
    }
}
