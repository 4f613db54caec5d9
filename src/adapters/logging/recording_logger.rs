//! `GatewayLogger` that keeps events in memory.

use std::sync::Mutex;

use crate::ports::{GatewayEvent, GatewayLogger, LogLevel};

/// Captures every logged event for later inspection.
#[derive(Debug, Default)]
pub struct RecordingGatewayLogger {
    events: Mutex<Vec<GatewayEvent>>,
}

impl RecordingGatewayLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all captured events, oldest first.
    pub fn events(&self) -> Vec<GatewayEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns captured events at or above `level`.
    pub fn at_least(&self, level: LogLevel) -> Vec<GatewayEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.level() >= level)
            .collect()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl GatewayLogger for RecordingGatewayLogger {
    fn log(&self, event: GatewayEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}
