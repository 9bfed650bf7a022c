//! Diagnostic sinks.
//!
//! The generator's only side effect is a log line per generated sheet (and a
//! warning when a font family is rejected). It goes through a
//! [`DiagnosticSink`] so embedders can route it anywhere and tests can
//! inspect it without touching a global logger.

use log::Level;
use std::sync::Mutex;

/// Log target used by [`LogSink`].
pub const LOG_TARGET: &str = "filter_css";

/// Fire-and-forget destination for diagnostic messages.
pub trait DiagnosticSink: Send + Sync {
    fn log_diagnostic(&self, level: Level, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(Level, &str) + Send + Sync,
{
    fn log_diagnostic(&self, level: Level, message: &str) {
        self(level, message)
    }
}

/// Forwards to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn log_diagnostic(&self, level: Level, message: &str) {
        log::log!(target: LOG_TARGET, level, "{}", message);
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn log_diagnostic(&self, _level: Level, _message: &str) {}
}

/// Keeps messages in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<(Level, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, message)| message).collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn log_diagnostic(&self, level: Level, message: &str) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.log_diagnostic(Level::Debug, "first");
        sink.log_diagnostic(Level::Warn, "second");
        assert_eq!(
            sink.entries(),
            vec![
                (Level::Debug, "first".to_string()),
                (Level::Warn, "second".to_string())
            ]
        );
    }

    #[test]
    fn test_closure_sink() {
        let seen = Mutex::new(Vec::new());
        let sink = |level: Level, message: &str| {
            seen.lock().unwrap().push(format!("{}: {}", level, message));
        };
        sink.log_diagnostic(Level::Info, "hello");
        assert_eq!(*seen.lock().unwrap(), vec!["INFO: hello".to_string()]);
    }
}
