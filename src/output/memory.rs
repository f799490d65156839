//! In-memory capture sink.
//!
//! Exists so the disabled-level contract (zero writes) and channel routing
//! are observable in tests, and doubles as a minimal reference for custom
//! `Sink` implementations.

use super::{Channel, Sink};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Clones share the same buffer, so a test can keep a handle while the
/// logger owns the sink.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(Channel, String)>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far, in emission order.
    #[must_use]
    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.buffer().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    /// A poisoned lock only means a panicking test wrote here; the buffer itself is still usable.
    fn buffer(&self) -> MutexGuard<'_, Vec<(Channel, String)>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn write(&self, channel: Channel, line: &str) -> Result<(), crate::Error> {
        self.buffer().push((channel, line.to_string()));
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
