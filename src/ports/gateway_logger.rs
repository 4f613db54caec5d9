//! Gateway logger port.
//!
//! Components receive their log sink at construction instead of reaching
//! for a process-wide logger. The production adapter forwards to `tracing`;
//! tests capture events in memory.

use crate::domain::order::OrderStatus;

/// Severity of a gateway event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Why a requested transition was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The order is already in the target state (retried callback).
    AlreadyApplied,
    /// The order's state machine does not allow the move.
    NotAllowed,
}

/// Things worth recording while talking to the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    RedirectBuilt {
        reference: String,
    },
    RedirectRefused {
        reference: String,
        missing: Vec<&'static str>,
    },
    CallbackReceived {
        reference: String,
        action: String,
    },
    CallbackRejected {
        reason: String,
    },
    UnknownAction {
        reference: String,
        action: String,
    },
    OrderMissing {
        reference: String,
    },
    TransitionApplied {
        reference: String,
        action: String,
        from: OrderStatus,
        to: OrderStatus,
    },
    TransitionSkipped {
        reference: String,
        action: String,
        status: OrderStatus,
        reason: SkipReason,
    },
    /// An approval arrived for an order already paid under another id.
    ConflictingTransaction {
        reference: String,
        recorded: String,
        received: String,
    },
    Failure {
        reference: String,
        error: String,
    },
}

impl GatewayEvent {
    pub fn level(&self) -> LogLevel {
        match self {
            GatewayEvent::RedirectBuilt { .. } | GatewayEvent::CallbackReceived { .. } => {
                LogLevel::Debug
            }
            GatewayEvent::TransitionApplied { .. } => LogLevel::Info,
            GatewayEvent::TransitionSkipped {
                reason: SkipReason::AlreadyApplied,
                ..
            } => LogLevel::Info,
            GatewayEvent::RedirectRefused { .. }
            | GatewayEvent::CallbackRejected { .. }
            | GatewayEvent::UnknownAction { .. }
            | GatewayEvent::OrderMissing { .. }
            | GatewayEvent::TransitionSkipped { .. }
            | GatewayEvent::ConflictingTransaction { .. } => LogLevel::Warn,
            GatewayEvent::Failure { .. } => LogLevel::Error,
        }
    }
}

/// Port for recording gateway events.
pub trait GatewayLogger: Send + Sync {
    fn log(&self, event: GatewayEvent);
}
