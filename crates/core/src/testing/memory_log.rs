//! In-memory hook log for testing.

use std::sync::{Arc, Mutex};

use crate::hooklog::{HookEvent, HookLog};

/// Hook log that keeps events in memory.
///
/// Clones share their recorded events.
#[derive(Debug, Clone, Default)]
pub struct MemoryHookLog {
    events: Arc<Mutex<Vec<HookEvent>>>,
}

impl MemoryHookLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in call order.
    pub fn events(&self) -> Vec<HookEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Rendered messages, in call order.
    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }

    /// Whether any rendered message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl HookLog for MemoryHookLog {
    fn record(&self, event: &HookEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
