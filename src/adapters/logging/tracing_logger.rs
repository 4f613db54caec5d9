//! `GatewayLogger` backed by `tracing`.

use crate::ports::{GatewayEvent, GatewayLogger, LogLevel};

/// Forwards gateway events to the `tracing` subscriber.
///
/// Events go out under the `sps_gateway::events` target so operators can
/// filter them separately from request traces.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingGatewayLogger;

impl TracingGatewayLogger {
    pub fn new() -> Self {
        Self
    }
}

impl GatewayLogger for TracingGatewayLogger {
    fn log(&self, event: GatewayEvent) {
        let message = describe(&event);
        match event.level() {
            LogLevel::Debug => tracing::debug!(target: "sps_gateway::events", "{}", message),
            LogLevel::Info => tracing::info!(target: "sps_gateway::events", "{}", message),
            LogLevel::Warn => tracing::warn!(target: "sps_gateway::events", "{}", message),
            LogLevel::Error => tracing::error!(target: "sps_gateway::events", "{}", message),
        }
    }
}

/// Renders an event as a single log line.
pub fn describe(event: &GatewayEvent) -> String {
    match event {
        GatewayEvent::RedirectBuilt { reference } => {
            format!("Built processor redirect for order {}", reference)
        }
        GatewayEvent::RedirectRefused { reference, missing } => format!(
            "Refused redirect for order {}: missing settings {}",
            reference,
            missing.join(", ")
        ),
        GatewayEvent::CallbackReceived { reference, action } => {
            format!("Callback for order {} with action '{}'", reference, action)
        }
        GatewayEvent::CallbackRejected { reason } => {
            format!("Rejected callback: {}", reason)
        }
        GatewayEvent::UnknownAction { reference, action } => {
            format!("Unknown callback action '{}' for order '{}'", action, reference)
        }
        GatewayEvent::OrderMissing { reference } => {
            format!("Callback for unknown order {}", reference)
        }
        GatewayEvent::TransitionApplied {
            reference,
            action,
            from,
            to,
        } => format!("Order {} moved {} -> {} on {}", reference, from, to, action),
        GatewayEvent::TransitionSkipped {
            reference,
            action,
            status,
            reason,
        } => format!(
            "Ignored {} for order {} in status {} ({:?})",
            action, reference, status, reason
        ),
        GatewayEvent::ConflictingTransaction {
            reference,
            recorded,
            received,
        } => format!(
            "Order {} already paid with transaction '{}', ignoring '{}'",
            reference, recorded, received
        ),
        GatewayEvent::Failure { reference, error } => {
            format!("Failed to handle order {}: {}", reference, error)
        }
    }
}
