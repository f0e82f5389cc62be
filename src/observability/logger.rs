//! Structured JSON logger
//!
//! - One log line = one event
//! - `event` first, then `severity`, then fields sorted by key
//! - Synchronous, flushed per line
//! - Written to the logger's sink: stderr in the binary, so stdout carries
//!   only command responses, or a shared buffer that tests read back

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where log lines go
#[derive(Debug, Clone, Default)]
pub enum LogSink {
    /// Process stderr
    #[default]
    Stderr,
    /// In-memory buffer shared between clones of the logger
    Buffer(Arc<Mutex<Vec<u8>>>),
}

impl LogSink {
    fn write_line(&self, line: &str) {
        // Logging must never fail the command
        match self {
            LogSink::Stderr => {
                let mut stderr = io::stderr();
                let _ = stderr.write_all(line.as_bytes());
                let _ = stderr.flush();
            }
            LogSink::Buffer(buffer) => {
                lock(buffer).extend_from_slice(line.as_bytes());
            }
        }
    }
}

/// Poisoning only means another writer panicked mid-line; the bytes are
/// still usable.
fn lock(buffer: &Mutex<Vec<u8>>) -> MutexGuard<'_, Vec<u8>> {
    buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A structured logger that drops lines below its minimum severity
#[derive(Debug, Clone)]
pub struct Logger {
    min_severity: Severity,
    sink: LogSink,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}

impl Logger {
    /// Logger writing to stderr
    pub fn new(min_severity: Severity) -> Self {
        Self::with_sink(min_severity, LogSink::Stderr)
    }

    /// Logger writing to a fresh in-memory buffer
    pub fn buffered(min_severity: Severity) -> Self {
        Self::with_sink(min_severity, LogSink::Buffer(Arc::default()))
    }

    pub fn with_sink(min_severity: Severity, sink: LogSink) -> Self {
        Self { min_severity, sink }
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }

    /// Log an event with the given severity and fields
    pub fn log(&self, severity: Severity, event: Event, fields: &[(&str, &str)]) {
        if !self.enabled(severity) {
            return;
        }
        self.sink.write_line(&format_line(severity, event.as_str(), fields));
    }

    /// Log to an arbitrary writer instead of the sink, honouring the
    /// minimum severity
    pub fn log_to_writer<W: Write>(
        &self,
        severity: Severity,
        event: Event,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        if !self.enabled(severity) {
            return;
        }
        let line = format_line(severity, event.as_str(), fields);

        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Lines written so far to a buffer sink. Always empty for stderr.
    pub fn captured_lines(&self) -> Vec<String> {
        match &self.sink {
            LogSink::Stderr => Vec::new(),
            LogSink::Buffer(buffer) => String::from_utf8_lossy(&lock(buffer))
                .lines()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn trace(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(Severity::Trace, event, fields);
    }

    pub fn info(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(Severity::Info, event, fields);
    }

    pub fn warn(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(Severity::Warn, event, fields);
    }

    pub fn error(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(Severity::Error, event, fields);
    }
}

/// Formats one JSON log line, newline included.
///
/// Fields are output in deterministic order (alphabetical by key).
pub fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(128);

    output.push_str("{\"event\":\"");
    escape_json_string(&mut output, event);
    output.push_str("\",\"severity\":\"");
    output.push_str(severity.as_str());
    output.push('"');

    let mut sorted_fields: Vec<_> = fields.iter().collect();
    sorted_fields.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted_fields {
        output.push_str(",\"");
        escape_json_string(&mut output, key);
        output.push_str("\":\"");
        escape_json_string(&mut output, value);
        output.push('"');
    }

    output.push_str("}\n");
    output
}

fn escape_json_string(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}
