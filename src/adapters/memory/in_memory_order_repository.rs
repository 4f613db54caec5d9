//! In-memory order repository.
//!
//! Holds orders in a map and records every mutation the gateway asks for,
//! so tests can assert on the exact calls made to the shop.
//!
//! # Security Note
//!
//! Orders live only as long as the process. Use it for tests and local
//! runs; a real shop implements `OrderRepository` over its own storage.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, OrderReference, TransactionId};
use crate::domain::order::{Order, OrderStatus};
use crate::ports::OrderRepository;

/// A mutation requested through the port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderMutation {
    MarkPaid {
        reference: OrderReference,
        transaction_id: TransactionId,
    },
    MarkFailed {
        reference: OrderReference,
        note: String,
    },
    MarkCancelled {
        reference: OrderReference,
        note: String,
    },
    ReleaseStock {
        reference: OrderReference,
    },
    AddNote {
        reference: OrderReference,
        note: String,
    },
}

/// In-memory `OrderRepository`.
///
/// `mark_paid` is idempotent: repeating it with the transaction id the
/// order already carries changes nothing. `release_stock` gives stock back
/// at most once per order.
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<OrderReference, Order>>,
    notes: RwLock<HashMap<OrderReference, Vec<String>>>,
    mutations: RwLock<Vec<OrderMutation>>,
    released: RwLock<HashSet<OrderReference>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
            notes: RwLock::new(HashMap::new()),
            mutations: RwLock::new(Vec::new()),
            released: RwLock::new(HashSet::new()),
        }
    }

    /// Creates a repository pre-loaded with orders.
    pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let repo = Self::new();
        for order in orders {
            repo.insert(order);
        }
        repo
    }

    /// Adds or replaces an order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn insert(&self, order: Order) {
        self.orders
            .write()
            .expect("InMemoryOrderRepository: orders write lock poisoned")
            .insert(order.reference.clone(), order);
    }

    // === Test Helpers ===

    /// Returns the current snapshot of an order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn get(&self, reference: &OrderReference) -> Option<Order> {
        self.orders
            .read()
            .expect("InMemoryOrderRepository: orders lock poisoned")
            .get(reference)
            .cloned()
    }

    /// Returns the audit notes attached to an order, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn notes(&self, reference: &OrderReference) -> Vec<String> {
        self.notes
            .read()
            .expect("InMemoryOrderRepository: notes lock poisoned")
            .get(reference)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns every mutation requested so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn mutations(&self) -> Vec<OrderMutation> {
        self.mutations
            .read()
            .expect("InMemoryOrderRepository: mutations lock poisoned")
            .clone()
    }

    /// Returns true once the order's stock has been given back.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn stock_released(&self, reference: &OrderReference) -> bool {
        self.released
            .read()
            .expect("InMemoryOrderRepository: released lock poisoned")
            .contains(reference)
    }

    fn record(&self, mutation: OrderMutation) -> Result<(), DomainError> {
        self.mutations
            .write()
            .map_err(|_| poisoned("mutations"))?
            .push(mutation);
        Ok(())
    }

    fn push_note(&self, reference: &OrderReference, note: &str) -> Result<(), DomainError> {
        self.notes
            .write()
            .map_err(|_| poisoned("notes"))?
            .entry(reference.clone())
            .or_default()
            .push(note.to_string());
        Ok(())
    }

    fn update<F>(&self, reference: &OrderReference, change: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut Order),
    {
        let mut orders = self.orders.write().map_err(|_| poisoned("orders"))?;
        let order = orders.get_mut(reference).ok_or_else(|| {
            DomainError::new(ErrorCode::OrderNotFound, "Order not found")
                .with_detail("reference", reference.as_str())
        })?;
        change(order);
        Ok(())
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(what: &str) -> DomainError {
    DomainError::new(
        ErrorCode::InternalError,
        format!("InMemoryOrderRepository: {} lock poisoned", what),
    )
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_reference(
        &self,
        reference: &OrderReference,
    ) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.read().map_err(|_| poisoned("orders"))?;
        Ok(orders.get(reference).cloned())
    }

    async fn mark_paid(
        &self,
        reference: &OrderReference,
        transaction_id: &TransactionId,
    ) -> Result<(), DomainError> {
        self.record(OrderMutation::MarkPaid {
            reference: reference.clone(),
            transaction_id: transaction_id.clone(),
        })?;
        self.update(reference, |order| {
            if !order.is_paid_with(transaction_id) {
                order.status = OrderStatus::Processing;
                order.transaction_id = Some(transaction_id.clone());
            }
        })
    }

    async fn mark_failed(&self, reference: &OrderReference, note: &str) -> Result<(), DomainError> {
        self.record(OrderMutation::MarkFailed {
            reference: reference.clone(),
            note: note.to_string(),
        })?;
        self.update(reference, |order| order.status = OrderStatus::Failed)?;
        self.push_note(reference, note)
    }

    async fn mark_cancelled(
        &self,
        reference: &OrderReference,
        note: &str,
    ) -> Result<(), DomainError> {
        self.record(OrderMutation::MarkCancelled {
            reference: reference.clone(),
            note: note.to_string(),
        })?;
        self.update(reference, |order| order.status = OrderStatus::Cancelled)?;
        self.push_note(reference, note)
    }

    async fn release_stock(&self, reference: &OrderReference) -> Result<(), DomainError> {
        self.record(OrderMutation::ReleaseStock {
            reference: reference.clone(),
        })?;
        self.update(reference, |_| {})?;
        self.released
            .write()
            .map_err(|_| poisoned("released"))?
            .insert(reference.clone());
        Ok(())
    }

    async fn add_note(&self, reference: &OrderReference, note: &str) -> Result<(), DomainError> {
        self.record(OrderMutation::AddNote {
            reference: reference.clone(),
            note: note.to_string(),
        })?;
        self.update(reference, |_| {})?;
        self.push_note(reference, note)
    }
}
