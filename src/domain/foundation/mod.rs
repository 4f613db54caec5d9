//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait and error
//! types that form the vocabulary of the gateway domain.

mod errors;
mod ids;
mod money;
mod query;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{OrderKey, OrderReference, TransactionId};
pub use money::{format_amount, Amount, CurrencyCode, AMOUNT_SCALE};
pub use query::{decode_query, encode_query};
pub use state_machine::{StateMachine, Transition};
