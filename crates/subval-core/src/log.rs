//! # Validation Log Sink
//!
//! Checkers report progress that a reviewer should see (for instance that an
//! open-source code directory will be inspected by hand) through a
//! [`ValidationLog`] supplied by the caller. The sink is a capability passed
//! into each operation, so two submissions checked side by side never share
//! log state unless the caller decides they should.

use std::sync::{Mutex, PoisonError};

/// Write-only sink for informational validation messages.
pub trait ValidationLog {
    /// Record an informational message.
    fn info(&self, message: &str);
}

/// Forwards messages to `tracing` at `INFO` level under the `subval` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl ValidationLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(target: "subval", "{message}");
    }
}

/// Keeps every message in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ValidationLog for MemoryLog {
    fn info(&self, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

impl<L: ValidationLog + ?Sized> ValidationLog for &L {
    fn info(&self, message: &str) {
        (**self).info(message);
    }
}
