//! Order snapshot handed to the gateway by the host shop.

use crate::domain::foundation::{Amount, CurrencyCode, OrderKey, OrderReference, TransactionId};

use super::OrderStatus;

/// Read-only view of a shop order.
///
/// The shop owns the order; the gateway only ever holds a snapshot for the
/// duration of one request and changes it through the `OrderRepository` port.
#[derive(Debug, Clone)]
pub struct Order {
    pub reference: OrderReference,
    pub order_key: OrderKey,
    pub total: Amount,
    pub currency: CurrencyCode,
    pub status: OrderStatus,
    /// Processor transaction id recorded by a previous approval.
    pub transaction_id: Option<TransactionId>,
}

impl Order {
    /// Creates a freshly placed order awaiting payment.
    pub fn new(
        reference: OrderReference,
        order_key: OrderKey,
        total: Amount,
        currency: CurrencyCode,
    ) -> Self {
        Self {
            reference,
            order_key,
            total,
            currency,
            status: OrderStatus::Pending,
            transaction_id: None,
        }
    }

    /// Returns a copy in the given status.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns a copy carrying a recorded transaction id.
    pub fn with_transaction_id(mut self, transaction_id: TransactionId) -> Self {
        self.transaction_id = Some(transaction_id);
        self
    }

    /// True if the order is paid and carries exactly this transaction id.
    pub fn is_paid_with(&self, transaction_id: &TransactionId) -> bool {
        self.status.is_paid() && self.transaction_id.as_ref() == Some(transaction_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn order() -> Order {
        Order::new(
            OrderReference::new("1042").unwrap(),
            OrderKey::new("wc_order_k3y").unwrap(),
            Amount::new(dec!(12.5)).unwrap(),
            CurrencyCode::new("TND").unwrap(),
        )
    }

    #[test]
    fn new_order_is_pending_without_transaction() {
        let order = order();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.transaction_id.is_none());
    }

    #[test]
    fn is_paid_with_requires_paid_status_and_same_id() {
        let tx = TransactionId::new("T-1").unwrap();
        let other = TransactionId::new("T-2").unwrap();

        let unpaid = order().with_transaction_id(tx.clone());
        assert!(!unpaid.is_paid_with(&tx));

        let paid = order()
            .with_status(OrderStatus::Processing)
            .with_transaction_id(tx.clone());
        assert!(paid.is_paid_with(&tx));
        assert!(!paid.is_paid_with(&other));
    }
}
