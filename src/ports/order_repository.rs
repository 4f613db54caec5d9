//! Order repository port.
//!
//! Defines the contract between the gateway and the shop that owns the
//! orders. The gateway looks orders up by reference and asks the shop to
//! change them; it never persists anything itself.
//!
//! # Idempotency
//!
//! Processors retry callbacks. The reconciler already skips transitions
//! the order has made, but two deliveries racing each other can both get
//! past that check, so implementations should make every mutation safe to
//! repeat (e.g. `mark_paid` with a transaction id the order already carries
//! must not complete payment twice). `release_stock` is called again when an
//! ERREUR callback finds the order already failed, so it must give stock
//! back at most once per order.
//!
//! # Example
//!
//! ```ignore
//! let order = repo
//!     .find_by_reference(&reference)
//!     .await?
//!     .ok_or_else(|| GatewayError::order_not_found(reference.clone()))?;
//!
//! repo.mark_paid(&order.reference, &transaction_id).await?;
//! repo.add_note(&order.reference, "Credit Card Transaction Approved").await?;
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrderReference, TransactionId};
use crate::domain::order::Order;

/// Port for reading and mutating shop orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find an order by its reference.
    ///
    /// Returns `None` if no order matches.
    async fn find_by_reference(&self, reference: &OrderReference)
        -> Result<Option<Order>, DomainError>;

    /// Complete payment, recording the processor transaction id.
    async fn mark_paid(
        &self,
        reference: &OrderReference,
        transaction_id: &TransactionId,
    ) -> Result<(), DomainError>;

    /// Mark the order failed, attaching `note`.
    async fn mark_failed(&self, reference: &OrderReference, note: &str) -> Result<(), DomainError>;

    /// Cancel the order, attaching `note`.
    async fn mark_cancelled(&self, reference: &OrderReference, note: &str)
        -> Result<(), DomainError>;

    /// Give the order's line items back to inventory.
    ///
    /// Must be idempotent: a second call for the same order changes nothing.
    async fn release_stock(&self, reference: &OrderReference) -> Result<(), DomainError>;

    /// Attach an audit note to the order.
    async fn add_note(&self, reference: &OrderReference, note: &str) -> Result<(), DomainError>;
}
