//! Order status state machine.
//!
//! Mirrors the order lifecycle of the host shop. Only the callback
//! reconciler moves orders between these states on behalf of the processor.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status as seen by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Created at checkout, awaiting payment.
    Pending,

    /// Awaiting manual confirmation by the merchant.
    OnHold,

    /// Payment received, order being fulfilled.
    Processing,

    /// Fulfilled.
    Completed,

    /// Payment attempt failed; the customer may pay again.
    Failed,

    /// Cancelled by the customer, the merchant or the processor.
    Cancelled,

    /// Money returned to the customer.
    Refunded,
}

impl OrderStatus {
    /// Returns true once payment has been captured.
    pub fn is_paid(&self) -> bool {
        matches!(self, OrderStatus::Processing | OrderStatus::Completed)
    }

    /// Stable lowercase name used in logs and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::OnHold => "on_hold",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Failed => "failed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for OrderStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use OrderStatus::*;
        matches!(
            (self, target),
            // From PENDING
            (Pending, OnHold)
                | (Pending, Processing)
                | (Pending, Completed)
                | (Pending, Failed)
                | (Pending, Cancelled)
            // From ON_HOLD
                | (OnHold, Processing)
                | (OnHold, Completed)
                | (OnHold, Failed)
                | (OnHold, Cancelled)
            // From FAILED (customer retries payment)
                | (Failed, Pending)
                | (Failed, Processing)
                | (Failed, Completed)
                | (Failed, Cancelled)
            // From CANCELLED (late approval still captures money)
                | (Cancelled, Pending)
                | (Cancelled, Processing)
                | (Cancelled, Completed)
            // From PROCESSING
                | (Processing, OnHold)
                | (Processing, Completed)
                | (Processing, Refunded)
            // From COMPLETED
                | (Completed, Refunded)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Transition;

    const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::OnHold,
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::Failed,
        OrderStatus::Cancelled,
        OrderStatus::Refunded,
    ];

    #[test]
    fn pending_can_be_paid() {
        assert_eq!(
            OrderStatus::Pending.plan(OrderStatus::Processing),
            Transition::Changed {
                from: OrderStatus::Pending,
                to: OrderStatus::Processing
            }
        );
    }

    #[test]
    fn pending_can_fail_or_be_cancelled() {
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Failed));
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Cancelled));
    }

    #[test]
    fn cancelled_order_can_still_be_paid() {
        assert!(OrderStatus::Cancelled.can_transition_to(&OrderStatus::Processing));
    }

    #[test]
    fn paid_order_cannot_be_cancelled_or_failed() {
        assert_eq!(
            OrderStatus::Processing.plan(OrderStatus::Cancelled),
            Transition::Rejected {
                from: OrderStatus::Processing,
                to: OrderStatus::Cancelled
            }
        );
        assert!(!OrderStatus::Completed.can_transition_to(&OrderStatus::Failed));
    }

    #[test]
    fn refunded_has_no_exits() {
        for target in ALL {
            assert!(!OrderStatus::Refunded.can_transition_to(&target));
        }
    }

    #[test]
    fn every_unpaid_state_accepts_approval() {
        for status in ALL.into_iter().filter(|s| !s.is_paid() && *s != OrderStatus::Refunded) {
            assert!(
                status.can_transition_to(&OrderStatus::Processing),
                "{:?} should accept approval",
                status
            );
        }
    }

    #[test]
    fn repeating_current_status_is_unchanged() {
        for status in ALL {
            assert_eq!(status.plan(status), Transition::Unchanged(status));
        }
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&OrderStatus::OnHold).unwrap();
        assert_eq!(json, "\"on_hold\"");
        assert_eq!(OrderStatus::OnHold.to_string(), "on_hold");
    }
}
