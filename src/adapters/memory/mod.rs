//! In-memory adapters.
//!
//! - `InMemoryOrderRepository` - order store recording every mutation

mod in_memory_order_repository;

pub use in_memory_order_repository::{InMemoryOrderRepository, OrderMutation};
